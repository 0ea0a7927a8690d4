use core::fmt;

use smallvec::SmallVec;

use super::Dictionary;
use crate::raw::{Handle, RawDictionary, Stack};

const INDENT: &str = "    ";

/// Writes one `Key = {key}, Value = {value}` line per entry, in pre-order (node, left
/// subtree, right subtree).
///
/// This `struct` is created by the [`display_entries`] method on [`Dictionary`].
///
/// [`display_entries`]: Dictionary::display_entries
pub struct Entries<'a, K, V> {
    raw: &'a RawDictionary<K, V>,
}

/// Draws the shape of the tree, one node per line, in pre-order.
///
/// Each level of depth is indented by four spaces. The root line has no prefix, left and
/// right children are prefixed with `L: ` and `R: `, and every absent child is drawn as `*`.
/// An empty tree is a single `*` line.
///
/// This `struct` is created by the [`display_tree`] method on [`Dictionary`].
///
/// [`display_tree`]: Dictionary::display_tree
pub struct TreeShape<'a, K, V> {
    raw: &'a RawDictionary<K, V>,
}

impl<K, V> Dictionary<K, V> {
    /// Returns an adapter that formats every entry on its own line, in pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let map = Dictionary::from([(22, "Mary"), (0, "Harold"), (37, "Victoria")]);
    /// assert_eq!(
    ///     map.display_entries().to_string(),
    ///     "Key = 22, Value = Mary\nKey = 0, Value = Harold\nKey = 37, Value = Victoria\n",
    /// );
    /// ```
    pub fn display_entries(&self) -> Entries<'_, K, V> {
        Entries {
            raw: &self.raw,
        }
    }

    /// Returns an adapter that draws the tree's shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_dictionary::Dictionary;
    ///
    /// let map = Dictionary::from([(22, "Mary"), (0, "Harold")]);
    /// let expected = "\
    /// Key = 22, Value = Mary
    ///     L: Key = 0, Value = Harold
    ///         L: *
    ///         R: *
    ///     R: *
    /// ";
    /// assert_eq!(map.display_tree().to_string(), expected);
    /// ```
    pub fn display_tree(&self) -> TreeShape<'_, K, V> {
        TreeShape {
            raw: &self.raw,
        }
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entries<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Stack::new();
        stack.extend(self.raw.root());

        while let Some(handle) = stack.pop() {
            let node = self.raw.node(handle);
            writeln!(f, "Key = {}, Value = {}", node.key(), node.value())?;
            stack.extend(node.right());
            stack.extend(node.left());
        }

        Ok(())
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for TreeShape<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // (link, depth, prefix); absent links are drawn too.
        let mut stack: SmallVec<[(Option<Handle>, usize, &str); 32]> = SmallVec::new();
        stack.push((self.raw.root(), 0, ""));

        while let Some((link, depth, prefix)) = stack.pop() {
            for _ in 0..depth {
                f.write_str(INDENT)?;
            }
            f.write_str(prefix)?;

            let Some(handle) = link else {
                writeln!(f, "*")?;
                continue;
            };

            let node = self.raw.node(handle);
            writeln!(f, "Key = {}, Value = {}", node.key(), node.value())?;
            stack.push((node.right(), depth + 1, "R: "));
            stack.push((node.left(), depth + 1, "L: "));
        }

        Ok(())
    }
}
