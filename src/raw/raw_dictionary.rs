use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Direction, Node};

/// Explicit traversal stack. Walks never recurse, so tree height never touches the call stack.
pub(crate) type Stack = SmallVec<[Handle; 32]>;

/// The link a subtree hangs from: the tree's root link, or one side of a parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Slot {
    Root,
    Child(Handle, Direction),
}

/// The unbalanced binary search tree backing `Dictionary`.
pub(crate) struct RawDictionary<K, V> {
    /// Arena owning every node of the tree.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of nodes reachable from `root`.
    len: usize,
}

impl<K, V> RawDictionary<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Releases every node. The arena keeps its allocation.
    pub(crate) fn clear(&mut self) {
        debug!(len = self.len, "clearing dictionary");
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    fn slot(&self, slot: Slot) -> Option<Handle> {
        match slot {
            Slot::Root => self.root,
            Slot::Child(parent, direction) => self.nodes.get(parent).child(direction),
        }
    }

    fn set_slot(&mut self, slot: Slot, child: Option<Handle>) {
        match slot {
            Slot::Root => self.root = child,
            Slot::Child(parent, direction) => self.nodes.get_mut(parent).set_child(direction, child),
        }
    }

    /// Pushes `start` and every node reached by following `direction` links from it.
    pub(crate) fn push_spine(&self, mut current: Option<Handle>, direction: Direction, stack: &mut Stack) {
        while let Some(handle) = current {
            stack.push(handle);
            current = self.nodes.get(handle).child(direction);
        }
    }

    /// Returns the last node reached from `start` by following `direction` links, and the slot holding it.
    fn extreme_from(&self, start: Handle, start_slot: Slot, direction: Direction) -> (Handle, Slot) {
        let mut current = start;
        let mut slot = start_slot;
        while let Some(next) = self.nodes.get(current).child(direction) {
            slot = Slot::Child(current, direction);
            current = next;
        }
        (current, slot)
    }

    /// The minimum (`Left`) or maximum (`Right`) node of the whole tree.
    pub(crate) fn extreme(&self, direction: Direction) -> Option<Handle> {
        let root = self.root?;
        Some(self.extreme_from(root, Slot::Root, direction).0)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: SmallVec<[(Handle, usize); 32]> = SmallVec::new();
        if let Some(root) = self.root {
            stack.push((root, 1));
        }

        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.get(handle);
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        height
    }

    /// Collects every handle in in-order (ascending key) sequence.
    pub(crate) fn in_order_handles(&self) -> Vec<Handle> {
        let mut handles = Vec::with_capacity(self.len);
        let mut stack = Stack::new();
        self.push_spine(self.root, Direction::Left, &mut stack);

        while let Some(handle) = stack.pop() {
            handles.push(handle);
            self.push_spine(self.nodes.get(handle).right(), Direction::Left, &mut stack);
        }

        handles
    }

    /// Moves every entry out in ascending key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let entries = self.in_order_handles().into_iter().map(|handle| self.nodes.take(handle).into_entry()).collect();

        self.nodes.clear();
        self.root = None;
        self.len = 0;

        entries
    }

    /// Rotates the subtree rooted at `handle` and returns the handle now at its top.
    ///
    /// `Direction::Left` promotes the right child; the promoted node's left subtree becomes the
    /// old root's right subtree and the old root becomes its left child. `Direction::Right` is
    /// the mirror image. When the child to promote is absent, `handle` is returned unchanged.
    ///
    /// The caller must store the returned handle in the slot that held `handle`.
    pub(crate) fn rotate(&mut self, handle: Handle, direction: Direction) -> Handle {
        let Some(promoted) = self.nodes.get(handle).child(direction.opposite()) else {
            return handle;
        };

        let inner = self.nodes.get(promoted).child(direction);
        self.nodes.get_mut(handle).set_child(direction.opposite(), inner);
        self.nodes.get_mut(promoted).set_child(direction, Some(handle));
        promoted
    }
}

impl<K: Ord, V> RawDictionary<K, V> {
    /// Descends from the root looking for `key`.
    ///
    /// Returns the matching node and the slot holding it, or the empty slot where `key` belongs.
    pub(crate) fn find<Q>(&self, key: &Q) -> Result<(Handle, Slot), Slot>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut slot = Slot::Root;
        let mut current = self.root;

        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let direction = match key.cmp(node.key().borrow()) {
                Ordering::Equal => return Ok((handle, slot)),
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
            };
            slot = Slot::Child(handle, direction);
            current = node.child(direction);
        }

        Err(slot)
    }

    /// Returns the handle of the node holding `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).ok().map(|(handle, _)| handle)
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.nodes.get(handle).value())
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.search(key)?);
        Some((node.key(), node.value()))
    }

    /// Inserts a key-value pair. An existing key keeps its node and has its value replaced;
    /// the old value is returned.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.find(&key) {
            Ok((handle, _)) => Some(core::mem::replace(self.nodes.get_mut(handle).value_mut(), value)),
            Err(slot) => {
                let handle = self.nodes.alloc(Node::new(key, value));
                self.set_slot(slot, Some(handle));
                self.len += 1;
                debug_assert_eq!(self.nodes.len(), self.len);
                None
            }
        }
    }

    /// Removes `key`, returning its entry. Absent keys leave the tree untouched.
    ///
    /// A node with at most one child is replaced in its slot by that child. A node with two
    /// children takes over the entry of its in-order successor (the minimum of its right
    /// subtree), and the successor, which has no left child, is unlinked instead.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (handle, slot) = self.find(key).ok()?;
        self.len -= 1;

        let node = self.nodes.get(handle);
        match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                let (successor, successor_slot) = self.extreme_from(right, Slot::Child(handle, Direction::Right), Direction::Left);
                trace!(?handle, ?successor, "removing node with two children");

                let successor_right = self.nodes.get(successor).right();
                self.set_slot(successor_slot, successor_right);
                let (key, value) = self.nodes.take(successor).into_entry();
                Some(self.nodes.get_mut(handle).replace_entry(key, value))
            }
            (left, right) => {
                trace!(?handle, leaf = left.is_none() && right.is_none(), "removing node with at most one child");
                self.set_slot(slot, left.or(right));
                Some(self.nodes.take(handle).into_entry())
            }
        }
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Rotates the subtree rooted at the node holding `key` and re-links the promoted node into
    /// the slot that held it. Returns `false` when `key` is absent or has no child to promote.
    pub(crate) fn rotate_at<Q>(&mut self, key: &Q, direction: Direction) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Ok((handle, slot)) = self.find(key) else {
            trace!(?direction, "rotation skipped, key absent");
            return false;
        };

        let promoted = self.rotate(handle, direction);
        if promoted == handle {
            trace!(?direction, ?handle, "rotation skipped, no child to promote");
            return false;
        }

        self.set_slot(slot, Some(promoted));
        debug_assert_eq!(self.slot(slot), Some(promoted));
        trace!(?direction, ?handle, ?promoted, ?slot, "rotated subtree");
        true
    }
}

impl<K: Clone, V: Clone> RawDictionary<K, V> {
    /// Copies `source` node by node into this (empty) tree, preserving its shape.
    fn copy_from(&mut self, source: &Self) {
        debug_assert!(self.nodes.is_empty(), "`RawDictionary::copy_from()` - target is not empty!");
        let Some(source_root) = source.root else {
            return;
        };

        let root = self.nodes.alloc(source.nodes.get(source_root).detached_clone());
        self.root = Some(root);

        // (source node, its copy) pairs whose children still need copying.
        let mut pending: SmallVec<[(Handle, Handle); 32]> = SmallVec::new();
        pending.push((source_root, root));

        while let Some((from, to)) = pending.pop() {
            for direction in [Direction::Left, Direction::Right] {
                if let Some(child) = source.nodes.get(from).child(direction) {
                    let copy = self.nodes.alloc(source.nodes.get(child).detached_clone());
                    self.nodes.get_mut(to).set_child(direction, Some(copy));
                    pending.push((child, copy));
                }
            }
        }

        self.len = source.len;
        debug!(len = self.len, "deep-copied dictionary");
    }
}

impl<K: Clone, V: Clone> Clone for RawDictionary<K, V> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.copy_from(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_from(source);
    }
}
