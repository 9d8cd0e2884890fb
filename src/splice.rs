//! Node removal, split into planning and applying.
//!
//! [`Tree::plan_removal`] reads the tree and works out every link that has to change for a node
//! to disappear. [`Tree::apply`] then writes those changes without looking anything up. Within a
//! plan no field is written twice and nothing is read back, so the order of the changes doesn't
//! matter except that node releases come last.
//!
//! Which shape of removal is used depends on the node's children, checked in this order:
//!
//! 1. No children: unhook it from its parent (or the root link).
//! 2. A right child that can take the node's place: there is no left child, or the right child's
//!    own left slot is empty and the left child can move into it.
//! 3. The mirror image with the left child.
//! 4. Otherwise both children have an inner grandchild. The node keeps its slot and takes the value
//!    of its in-order successor, the leftmost node under the right child's left child. That node
//!    has no left child by construction, so it is removed with the same parent-relinking as above.
//!
//! ```text
//!        p                 p
//!        |                 |
//!        X                 R
//!       / \       ->       / \
//!      L   R             L   b
//!           \
//!            b
//!
//!        p                 p
//!        |                 |
//!        X                 s
//!       / \               / \
//!      L   R     ->      L   R
//!         / \               / \
//!        a   d             a   d
//!       /                 /
//!      s                 c
//!       \
//!        c
//! ```

use crate::arena::NodeId;
use crate::tree::Tree;
use crate::util::Side;

/// One write to the tree's structure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Change {
    /// Point the tree's root link somewhere else.
    Root(Option<NodeId>),
    /// Fill (or empty) one of `holder`'s child slots.
    Child {
        holder: NodeId,
        side: Side,
        child: Option<NodeId>,
    },
    /// Repoint `node`'s parent link.
    Parent {
        node: NodeId,
        parent: Option<NodeId>,
    },
    /// Overwrite the value held by `node`.
    Value { node: NodeId, value: u32 },
    /// Free `node`'s slot. Nothing may link to it anymore.
    Release(NodeId),
}

/// Which case of the removal algorithm a plan came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RemovalKind {
    Leaf,
    SpliceRight,
    SpliceLeft,
    Successor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Removal {
    // Only inspected by tests; applying a plan doesn't care which case produced it.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) kind: RemovalKind,
    pub(crate) changes: Vec<Change>,
}

impl Tree {
    /// Works out how to remove `id` from the tree.
    pub(crate) fn plan_removal(&self, id: NodeId) -> Removal {
        let node = self.node(id);
        let mut changes = Vec::new();

        let kind = match (node.left, node.right) {
            (None, None) => {
                self.relink(id, None, &mut changes);
                RemovalKind::Leaf
            }
            (None, Some(right)) => {
                self.splice(id, right, None, &mut changes);
                RemovalKind::SpliceRight
            }
            (Some(left), None) => {
                self.splice(id, left, None, &mut changes);
                RemovalKind::SpliceLeft
            }
            (Some(left), Some(right)) => {
                match (self.node(right).left, self.node(left).right) {
                    (None, _) => {
                        self.splice(id, right, Some((Side::Left, left)), &mut changes);
                        RemovalKind::SpliceRight
                    }
                    (Some(_), None) => {
                        self.splice(id, left, Some((Side::Right, right)), &mut changes);
                        RemovalKind::SpliceLeft
                    }
                    (Some(inner), Some(_)) => {
                        let successor = self.extreme(inner, Side::Left);
                        let successor_node = self.node(successor);
                        changes.push(Change::Value {
                            node: id,
                            value: successor_node.value,
                        });
                        self.relink(successor, successor_node.right, &mut changes);
                        changes.push(Change::Release(successor));
                        return Removal {
                            kind: RemovalKind::Successor,
                            changes,
                        };
                    }
                }
            }
        };

        changes.push(Change::Release(id));
        Removal { kind, changes }
    }

    /// Writes out a plan from [`plan_removal`][Tree::plan_removal].
    pub(crate) fn apply(&mut self, removal: Removal) {
        for change in removal.changes {
            match change {
                Change::Root(root) => self.root = root,
                Change::Child {
                    holder,
                    side,
                    child,
                } => *self.node_mut(holder).child_mut(side) = child,
                Change::Parent { node, parent } => self.node_mut(node).parent = parent,
                Change::Value { node, value } => self.node_mut(node).value = value,
                Change::Release(node) => {
                    self.nodes.release(node);
                }
            }
        }

        self.debug_check_root();
    }

    /// Moves `promoted` (a child of `id`) into `id`'s place. If `adopted` is given, `promoted`
    /// also takes `id`'s other child into its slot on that side, which must be empty.
    fn splice(
        &self,
        id: NodeId,
        promoted: NodeId,
        adopted: Option<(Side, NodeId)>,
        changes: &mut Vec<Change>,
    ) {
        self.relink(id, Some(promoted), changes);
        if let Some((side, adopted)) = adopted {
            debug_assert!(self.node(promoted).child(side).is_none());
            changes.push(Change::Child {
                holder: promoted,
                side,
                child: Some(adopted),
            });
            changes.push(Change::Parent {
                node: adopted,
                parent: Some(promoted),
            });
        }
    }

    /// Puts `replacement` wherever `id` currently hangs: in its parent's child slot, or in the
    /// root link if `id` is the root.
    fn relink(&self, id: NodeId, replacement: Option<NodeId>, changes: &mut Vec<Change>) {
        let parent = self.node(id).parent;
        match parent {
            Some(holder) => changes.push(Change::Child {
                holder,
                side: self.side_under(holder, id),
                child: replacement,
            }),
            None => changes.push(Change::Root(replacement)),
        }
        if let Some(replacement) = replacement {
            changes.push(Change::Parent {
                node: replacement,
                parent,
            });
        }
    }

    /// The slot of `holder` that `child` is in.
    fn side_under(&self, holder: NodeId, child: NodeId) -> Side {
        let holder_node = self.node(holder);
        if holder_node.left == Some(child) {
            Side::Left
        } else if holder_node.right == Some(child) {
            Side::Right
        } else {
            panic!("{child} names {holder} as its parent but isn't one of its children")
        }
    }
}
