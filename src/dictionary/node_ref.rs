use core::borrow::Borrow;
use core::fmt;

use super::Dictionary;
use crate::raw::{Handle, Node, RawDictionary};

/// A read-only view of one node of a [`Dictionary`], used to inspect the tree's shape.
///
/// Obtained from [`Dictionary::root`] or [`Dictionary::node`], and navigated with
/// [`left`](NodeRef::left) and [`right`](NodeRef::right).
///
/// # Examples
///
/// ```
/// use bst_dictionary::Dictionary;
///
/// let map = Dictionary::from([(2, "b"), (1, "a"), (3, "c")]);
/// let root = map.root().unwrap();
/// assert_eq!(root.entry(), (&2, &"b"));
/// assert_eq!(root.left().map(|node| *node.key()), Some(1));
/// assert!(root.right().unwrap().is_leaf());
/// ```
pub struct NodeRef<'a, K, V> {
    raw: &'a RawDictionary<K, V>,
    handle: Handle,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    const fn new(raw: &'a RawDictionary<K, V>, handle: Handle) -> Self {
        NodeRef { raw, handle }
    }

    fn node(&self) -> &'a Node<K, V> {
        self.raw.node(self.handle)
    }

    /// The key stored in this node.
    #[must_use]
    pub fn key(&self) -> &'a K {
        self.node().key()
    }

    /// The value stored in this node.
    #[must_use]
    pub fn value(&self) -> &'a V {
        self.node().value()
    }

    /// The key and value stored in this node.
    #[must_use]
    pub fn entry(&self) -> (&'a K, &'a V) {
        let node = self.node();
        (node.key(), node.value())
    }

    /// The root of this node's left subtree, if any.
    #[must_use]
    pub fn left(&self) -> Option<NodeRef<'a, K, V>> {
        self.node().left().map(|handle| NodeRef::new(self.raw, handle))
    }

    /// The root of this node's right subtree, if any.
    #[must_use]
    pub fn right(&self) -> Option<NodeRef<'a, K, V>> {
        self.node().right().map(|handle| NodeRef::new(self.raw, handle))
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef").field("key", self.key()).field("value", self.value()).finish()
    }
}

impl<K, V> Dictionary<K, V> {
    /// Returns the root node, or `None` if the dictionary is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map = Dictionary::new();
    /// assert!(map.root().is_none());
    ///
    /// map.insert(22, "Jane");
    /// map.insert(0, "Harold");
    /// assert_eq!(map.root().map(|node| *node.key()), Some(22));
    /// ```
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.raw.root().map(|handle| NodeRef::new(&self.raw, handle))
    }

    /// Returns the node holding `key`, or `None` if the key is absent.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn node<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).map(|handle| NodeRef::new(&self.raw, handle))
    }

    /// Returns the left child of the node holding `key`.
    ///
    /// `None` means either the key is absent or its node has no left child.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let map = Dictionary::from([(22, "Mary"), (0, "Harold"), (37, "Victoria")]);
    /// assert_eq!(map.left_child(&22).map(|node| *node.key()), Some(0));
    /// assert!(map.left_child(&0).is_none());
    /// ```
    pub fn left_child<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.node(key)?.left()
    }

    /// Returns the right child of the node holding `key`.
    ///
    /// `None` means either the key is absent or its node has no right child.
    pub fn right_child<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.node(key)?.right()
    }
}
