use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use alloc::vec::Vec;
use tracing::debug;

use crate::raw::{Direction, RawDictionary, Stack};

mod capacity;
mod display;
mod node_ref;
mod rotation;

pub use display::{Entries, TreeShape};
pub use node_ref::NodeRef;

/// An ordered map based on an unbalanced [binary search tree].
///
/// Given a key type with a [total order], a `Dictionary` stores its entries in key order.
/// Keys must implement [`Ord`]. Every node holds one key/value pair and owns at most two
/// children: all keys in the left subtree are smaller than the node's key, all keys in the
/// right subtree are larger.
///
/// The tree never rebalances itself. Its shape is decided by insertion order, by removals,
/// and by the rotations requested through [`rotate_left`](Dictionary::rotate_left) and
/// [`rotate_right`](Dictionary::rotate_right). [`root`](Dictionary::root) and
/// [`node`](Dictionary::node) expose that shape for inspection.
///
/// Every operation walks the tree iteratively, so degenerate shapes (for example keys
/// inserted in increasing order) cost time proportional to their height but never
/// recurse.
///
/// # Examples
///
/// ```
/// use bst_dictionary::Dictionary;
///
/// let mut monarchs = Dictionary::new();
/// monarchs.insert(22, "Jane");
/// monarchs.insert(22, "Mary");
/// monarchs.insert(0, "Harold");
/// monarchs.insert(9, "Edward");
///
/// // Inserting an existing key overwrites its value.
/// assert_eq!(monarchs.get(&22), Some(&"Mary"));
/// assert_eq!(monarchs.len(), 3);
///
/// monarchs.remove(&0);
/// assert_eq!(monarchs.get(&0), None);
///
/// for (key, name) in &monarchs {
///     println!("{key}: {name}");
/// }
/// ```
///
/// Copies are deep, and `core::mem::take` transfers the whole tree, leaving an empty one:
///
/// ```
/// use bst_dictionary::Dictionary;
///
/// let mut a = Dictionary::from([(1, "one"), (2, "two")]);
/// let b = a.clone();
/// a.insert(3, "three");
/// assert_eq!(b.get(&3), None);
///
/// let c = core::mem::take(&mut a);
/// assert!(a.is_empty());
/// assert_eq!(c.len(), 3);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct Dictionary<K, V> {
    raw: RawDictionary<K, V>,
}

/// An iterator over the entries of a `Dictionary`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`Dictionary`].
///
/// # Examples
///
/// ```
/// use bst_dictionary::Dictionary;
///
/// let map = Dictionary::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: Dictionary::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    raw: Option<&'a RawDictionary<K, V>>,
    // Pending ancestors for the ascending walk.
    front: Stack,
    // Pending ancestors for the descending walk.
    back: Stack,
    remaining: usize,
}

/// An owning iterator over the entries of a `Dictionary`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`Dictionary`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `Dictionary`, in ascending order.
///
/// This `struct` is created by the [`keys`] method on [`Dictionary`].
///
/// [`keys`]: Dictionary::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `Dictionary`, in order by key.
///
/// This `struct` is created by the [`values`] method on [`Dictionary`].
///
/// [`values`]: Dictionary::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An owning iterator over the keys of a `Dictionary`.
///
/// This `struct` is created by the [`into_keys`] method on [`Dictionary`].
///
/// [`into_keys`]: Dictionary::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

/// An owning iterator over the values of a `Dictionary`.
///
/// This `struct` is created by the [`into_values`] method on [`Dictionary`].
///
/// [`into_values`]: Dictionary::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

impl<K, V> Dictionary<K, V> {
    /// Makes a new, empty `Dictionary`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map = Dictionary::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Dictionary<K, V> {
        Dictionary {
            raw: RawDictionary::new(),
        }
    }

    /// Clears the map, releasing every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut a = Dictionary::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the value corresponding to the key, or `None` if the key is
    /// absent.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map = Dictionary::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let map = Dictionary::from([(String::from("b"), 2)]);
    /// assert_eq!(map.get_key_value("b"), Some((&String::from("b"), &2)));
    /// assert_eq!(map.get_key_value("c"), None);
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map = Dictionary::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }

    /// Returns the entry with the minimum key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map = Dictionary::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.first_key_value(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        let node = self.raw.node(self.raw.extreme(Direction::Left)?);
        Some((node.key(), node.value()))
    }

    /// Returns the entry with the maximum key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        let node = self.raw.node(self.raw.extreme(Direction::Right)?);
        Some((node.key(), node.value()))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, a new leaf is attached where the search for
    /// the key ended and `None` is returned.
    ///
    /// If the map did have this key present, the value is overwritten in place and the old
    /// value is returned. The shape of the tree does not change.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map = Dictionary::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// assert_eq!(map.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map. Removing an absent key changes nothing.
    ///
    /// A node with two children is replaced by its in-order successor, the smallest key of
    /// its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map = Dictionary::from([(31, "Anne"), (7, "John"), (42, "Elizabeth")]);
    /// assert_eq!(map.remove(&31), Some("Anne"));
    /// assert_eq!(map.remove(&31), None);
    ///
    /// // 42 was the smallest key to the right of 31, so it took 31's place.
    /// assert_eq!(map.root().map(|node| *node.key()), Some(42));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Removes every entry for which the predicate returns `true`.
    ///
    /// The end state is the same as calling [`remove`](Dictionary::remove) once for each
    /// matching key. Entries are offered to the predicate in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map: Dictionary<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// map.remove_if(|&k, _| k % 2 != 0);
    /// assert_eq!(map.in_order_keys(), [0, 2, 4, 6]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n + m × height), where m is the number of removed entries.
    pub fn remove_if<F>(&mut self, mut pred: F)
    where
        K: Clone + Ord,
        F: FnMut(&K, &V) -> bool,
    {
        let doomed: Vec<K> = self.iter().filter(|&(k, v)| pred(k, v)).map(|(k, _)| k.clone()).collect();
        self.remove_keys(doomed);
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all pairs `(k, v)` for which `f(&k, &mut v)` returns `false`.
    /// The elements are visited in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map: Dictionary<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// // Keep only the elements with even-numbered keys.
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert!(map.into_iter().eq(vec![(0, 0), (2, 20), (4, 40), (6, 60)]));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        K: Clone + Ord,
        F: FnMut(&K, &mut V) -> bool,
    {
        let doomed: Vec<K> = self
            .raw
            .in_order_handles()
            .into_iter()
            .filter_map(|handle| {
                let (k, v) = self.raw.node_mut(handle).entry_mut();
                if f(k, v) { None } else { Some(k.clone()) }
            })
            .collect();
        self.remove_keys(doomed);
    }

    fn remove_keys(&mut self, keys: Vec<K>)
    where
        K: Ord,
    {
        debug!(count = keys.len(), len = self.raw.len(), "removing matching entries");
        for key in keys {
            self.raw.remove(&key);
        }
    }

    /// Returns every key in ascending order.
    ///
    /// The in-order sequence is independent of the tree's shape, so it is the canonical
    /// way to compare contents before and after structural operations.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map = Dictionary::from([(22, "Mary"), (0, "Harold"), (9, "Edward")]);
    /// assert_eq!(map.in_order_keys(), [0, 9, 22]);
    ///
    /// map.rotate_left(&0);
    /// assert_eq!(map.in_order_keys(), [0, 9, 22]);
    /// ```
    #[must_use]
    pub fn in_order_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    /// Creates a consuming iterator visiting all the keys, in sorted order.
    #[inline]
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Creates a consuming iterator visiting all the values, in order by key.
    #[inline]
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map = Dictionary::new();
    /// map.insert(3, "c");
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) to create the iterator; O(1) amortized per step.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut front = Stack::new();
        let mut back = Stack::new();
        self.raw.push_spine(self.raw.root(), Direction::Left, &mut front);
        self.raw.push_spine(self.raw.root(), Direction::Right, &mut back);

        Iter {
            raw: Some(&self.raw),
            front,
            back,
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.iter(),
        }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut a = Dictionary::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.values().cloned().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.iter(),
        }
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// An empty map has height 0 and a single entry has height 1. Keys inserted in sorted
    /// order produce a height equal to the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let chain: Dictionary<i32, ()> = (0..5).map(|k| (k, ())).collect();
    /// assert_eq!(chain.height(), 5);
    ///
    /// let bushy = Dictionary::from([(2, ()), (1, ()), (3, ())]);
    /// assert_eq!(bushy.height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }
}

impl<K: Clone, V: Clone> Clone for Dictionary<K, V> {
    /// Deep-copies every node; the copy has the same shape and shares nothing with `self`.
    fn clone(&self) -> Self {
        Dictionary {
            raw: self.raw.clone(),
        }
    }

    /// Releases the nodes of `self`, then deep-copies `source` into the existing allocation.
    fn clone_from(&mut self, source: &Self) {
        self.raw.clone_from(&source.raw);
    }
}

impl<K: Hash, V: Hash> Hash for Dictionary<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

/// Two dictionaries are equal when they hold the same entries, whatever their shapes.
impl<K: PartialEq, V: PartialEq> PartialEq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for Dictionary<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Dictionary::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Dictionary<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Dictionary::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for Dictionary<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for Dictionary<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for Dictionary<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let map = Dictionary::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for Dictionary<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `Dictionary`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for Dictionary<K, V> {
    /// Inserts the pairs in array order, so the first pair becomes the root.
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let raw = self.raw?;
        let node = raw.node(self.front.pop()?);
        raw.push_spine(node.right(), Direction::Left, &mut self.front);
        self.remaining -= 1;

        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: 'a, V: 'a> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let raw = self.raw?;
        let node = raw.node(self.back.pop()?);
        raw.push_spine(node.left(), Direction::Right, &mut self.back);
        self.remaining -= 1;

        Some((node.key(), node.value()))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Default for Iter<'_, K, V> {
    /// Creates an empty iterator.
    fn default() -> Self {
        Iter {
            raw: None,
            front: Stack::new(),
            back: Stack::new(),
            remaining: 0,
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Default for Keys<'_, K, V> {
    fn default() -> Self {
        Keys {
            inner: Iter::default(),
        }
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Default for Values<'_, K, V> {
    fn default() -> Self {
        Values {
            inner: Iter::default(),
        }
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for IntoKeys<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(k, _)| k)).finish()
    }
}

impl<K, V> Default for IntoKeys<K, V> {
    fn default() -> Self {
        IntoKeys {
            inner: IntoIter::default(),
        }
    }
}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoValues<K, V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for IntoValues<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(_, v)| v)).finish()
    }
}

impl<K, V> Default for IntoValues<K, V> {
    fn default() -> Self {
        IntoValues {
            inner: IntoIter::default(),
        }
    }
}
