use core::borrow::Borrow;

use super::Dictionary;
use crate::raw::Direction;

impl<K: Ord, V> Dictionary<K, V> {
    /// Performs a left rotation at the node holding `key`.
    ///
    /// The node's right child takes its place, the node becomes that child's left child, and
    /// the child's former left subtree becomes the node's right subtree. Key order and
    /// contents are preserved; only the shape changes.
    ///
    /// Returns `false`, leaving the tree untouched, when `key` is absent or the node has no
    /// right child.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map = Dictionary::from([(22, "Mary"), (0, "Harold"), (37, "Victoria"), (42, "Elizabeth")]);
    /// assert!(map.rotate_left(&22));
    ///
    /// let root = map.root().unwrap();
    /// assert_eq!(*root.key(), 37);
    /// assert_eq!(root.left().map(|node| *node.key()), Some(22));
    /// assert_eq!(map.in_order_keys(), [0, 22, 37, 42]);
    ///
    /// // 42 is a leaf, so there is nothing to promote.
    /// assert!(!map.rotate_left(&42));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) to find the node, O(1) to rotate.
    pub fn rotate_left<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rotate_at(key, Direction::Left)
    }

    /// Performs a right rotation at the node holding `key`.
    ///
    /// The mirror image of [`rotate_left`](Dictionary::rotate_left): the node's left child is
    /// promoted and the node becomes its right child.
    ///
    /// Returns `false`, leaving the tree untouched, when `key` is absent or the node has no
    /// left child.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let mut map = Dictionary::from([(22, "Mary"), (0, "Harold"), (9, "Edward")]);
    /// assert!(map.rotate_right(&22));
    /// assert_eq!(map.root().map(|node| *node.key()), Some(0));
    ///
    /// // Rotating back restores the original shape.
    /// assert!(map.rotate_left(&0));
    /// assert_eq!(map.root().map(|node| *node.key()), Some(22));
    /// ```
    pub fn rotate_right<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rotate_at(key, Direction::Right)
    }
}
