use super::Dictionary;
use crate::raw::RawDictionary;

impl<K, V> Dictionary<K, V> {
    /// Creates an empty dictionary with room for at least `capacity` nodes.
    ///
    /// Nodes are stored in a single arena, so reserving up front avoids regrowth while a
    /// known number of entries is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let map: Dictionary<i32, i32> = Dictionary::with_capacity(32);
    /// assert!(map.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dictionary {
            raw: RawDictionary::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes the dictionary can hold without reallocating.
    ///
    /// Removing entries does not shrink the capacity; freed nodes are reused by later inserts.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map: Dictionary<i32, i32> = Dictionary::with_capacity(32);
    /// assert!(map.capacity() >= 32);
    ///
    /// map.extend((0..32).map(|k| (k, k)));
    /// map.clear();
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
