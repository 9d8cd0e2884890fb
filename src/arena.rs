//! Slot storage for tree nodes. Nodes refer to each other by [`NodeId`] instead of by pointer, so
//! a parent link is just another index and can never own (or free) anything.

use std::fmt;

/// A handle to a node stored in a [`Tree`][crate::Tree]. Handles are only meaningful for the tree
/// that produced them and may be reused by a later insert once their node has been deleted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The slot this handle points at.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<NodeId>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Stores `item`, reusing a vacant slot if there is one.
    pub(crate) fn alloc(&mut self, item: T) -> NodeId {
        match self.vacant.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none(), "vacant list holds live {id}");
                self.slots[id.0] = Some(item);
                id
            }
            None => {
                self.slots.push(Some(item));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub(crate) fn try_get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// ## Panics
    ///
    /// When `id` is vacant. A live node never links to a vacant slot, so reaching one means the
    /// tree is corrupt.
    pub(crate) fn get(&self, id: NodeId) -> &T {
        match self.try_get(id) {
            Some(item) => item,
            None => panic!("dangling node id {id}"),
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        match self.slots.get_mut(id.0).and_then(Option::as_mut) {
            Some(item) => item,
            None => panic!("dangling node id {id}"),
        }
    }

    /// Empties the slot at `id` and hands back what was in it.
    pub(crate) fn release(&mut self, id: NodeId) -> T {
        let item = self
            .slots
            .get_mut(id.0)
            .and_then(Option::take)
            .unwrap_or_else(|| panic!("released vacant node id {id}"));
        self.vacant.push(id);
        item
    }

    /// Number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    /// Drops the backing storage. Only valid once every slot has been released.
    pub(crate) fn reset(&mut self) {
        debug_assert_eq!(self.live(), 0, "reset with live nodes");
        self.slots.clear();
        self.vacant.clear();
    }
}
