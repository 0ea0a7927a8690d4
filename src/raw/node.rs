use super::handle::Handle;

/// Which side of a parent a child link hangs from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// One key/value pair and the handles of its (uniquely owned) children.
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a detached leaf.
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Splits the borrow so the value can be edited while the key is read.
    #[inline]
    pub(crate) fn entry_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, direction: Direction) -> Option<Handle> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, direction: Direction, child: Option<Handle>) {
        match direction {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }

    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Swaps in a new key/value pair, keeping the child links. Returns the old pair.
    pub(crate) fn replace_entry(&mut self, key: K, value: V) -> (K, V) {
        let old_key = core::mem::replace(&mut self.key, key);
        let old_value = core::mem::replace(&mut self.value, value);
        (old_key, old_value)
    }

    /// Consumes the node, dropping its links.
    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Clone, V: Clone> Node<K, V> {
    /// Copies the key and value into a new leaf; links are not carried over.
    pub(crate) fn detached_clone(&self) -> Self {
        Self::new(self.key.clone(), self.value.clone())
    }
}
