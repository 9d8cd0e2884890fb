//! An unbalanced BST of `u32`s with parent links. Nodes live in an arena and link to each other by
//! [`NodeId`], so a parent link is a plain index rather than a second owner.
//!
//! # Examples
//!
//! ```
//! use arena_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(1));
//!
//! tree.insert(1);
//! assert!(tree.contains(1));
//!
//! // Inserting the same value again adds a second node.
//! tree.insert(1);
//! assert_eq!(tree.size(), 2);
//!
//! // Deleting removes one node at a time.
//! assert!(tree.delete(1));
//! assert!(tree.contains(1));
//! assert!(tree.delete(1));
//! assert!(!tree.delete(1));
//! assert!(tree.is_empty());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::ptr;

use crate::arena::{Arena, NodeId};
use crate::error::{Result, TreeError};
use crate::util::Side;
use crate::walk::Order;

/// A Binary Search Tree holding a multiset of `u32`s. Values smaller than a node go into its left
/// subtree, everything else (including equal values) into its right subtree. There is no
/// rebalancing so the shape depends entirely on insertion order.
#[derive(Clone, Default)]
pub struct Tree {
    pub(crate) nodes: Arena<Node>,
    pub(crate) root: Option<NodeId>,
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) value: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl Node {
    fn new(value: u32, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Inserts `value` as a new leaf. This always adds a node: inserting a value that's already
    /// present stores it a second time, in the right subtree of the existing copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.size(), 3);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 2, 2]);
    /// ```
    pub fn insert(&mut self, value: u32) {
        let Some(mut cur) = self.root else {
            self.root = Some(self.nodes.alloc(Node::new(value, None)));
            return;
        };

        loop {
            let node = self.node(cur);
            let side = Side::of(value, node.value);
            match node.child(side) {
                Some(next) => cur = next,
                None => {
                    let id = self.nodes.alloc(Node::new(value, Some(cur)));
                    *self.node_mut(cur).child_mut(side) = Some(id);
                    break;
                }
            }
        }

        self.debug_check_root();
    }

    /// Whether a node holding `value` is reachable by descending from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let tree: Tree = [3, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.contains(4));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, value: u32) -> bool {
        self.find(value).is_some()
    }

    /// Deletes one node holding `value` and reports whether there was one to delete.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree: Tree = [3, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.delete(3));
    /// assert!(!tree.delete(3));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn delete(&mut self, value: u32) -> bool {
        self.remove(value).is_ok()
    }

    /// Like [`delete`][Tree::delete] but reports a missing value as
    /// [`TreeError::NotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.remove(5), Ok(()));
    /// assert_eq!(tree.remove(5), Err(TreeError::NotFound(5)));
    /// ```
    pub fn remove(&mut self, value: u32) -> Result<()> {
        let id = self.find(value).ok_or(TreeError::NotFound(value))?;
        let removal = self.plan_removal(id);
        self.apply(removal);
        Ok(())
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node. Clearing an empty tree does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree: Tree = [3, 1, 4].into_iter().collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    ///
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        // Post-order so every node goes after both of its children.
        let doomed: Vec<NodeId> = self.walk(Order::Post).map(|n| n.id()).collect();
        for id in doomed {
            let node = self.nodes.release(id);
            debug_assert!(
                [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .all(|child| self.nodes.try_get(child).is_none()),
                "released {id} before its children"
            );
        }

        self.root = None;
        self.nodes.reset();
    }

    /// Counts the nodes in the tree. This walks the whole tree.
    pub fn size(&self) -> usize {
        self.walk(Order::Post).count()
    }

    /// The smallest value in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let tree: Tree = [3, 1, 4].into_iter().collect();
    /// assert_eq!(tree.min(), Some(1));
    /// assert_eq!(Tree::new().min(), None);
    /// ```
    pub fn min(&self) -> Option<u32> {
        self.root.map(|root| self.node(self.extreme(root, Side::Left)).value)
    }

    /// The largest value in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let tree: Tree = [3, 1, 4].into_iter().collect();
    /// assert_eq!(tree.max(), Some(4));
    /// ```
    pub fn max(&self) -> Option<u32> {
        self.root.map(|root| self.node(self.extreme(root, Side::Right)).value)
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// The node behind `id`, or `None` if that node has been deleted.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.nodes.try_get(id).map(|_| NodeRef::new(self, id))
    }

    /// Checks every structural invariant of the tree:
    ///
    /// 1. The root has no parent.
    /// 2. Every child's parent link points back at the node holding it.
    /// 3. Everything in a node's left subtree is smaller than it and everything in its right
    ///    subtree is at least as large.
    /// 4. Every stored node is reachable from the root exactly once.
    ///
    /// A tree only built through this crate's API always passes.
    pub fn check_invariants(&self) -> Result<()> {
        let live = self.nodes.live();
        let Some(root) = self.root else {
            return match live {
                0 => Ok(()),
                _ => Err(TreeError::Leaked { live, reachable: 0 }),
            };
        };
        let root_node = self.nodes.try_get(root).ok_or(TreeError::Dangling {
            holder: None,
            target: root,
        })?;
        if let Some(parent) = root_node.parent {
            return Err(TreeError::RootHasParent { root, parent });
        }

        /// A node to check along with the tightest bounds its ancestors put on it.
        struct Frame {
            id: NodeId,
            /// Inclusive, set by the nearest ancestor we went right from.
            lower: Option<(NodeId, u32)>,
            /// Exclusive, set by the nearest ancestor we went left from.
            upper: Option<(NodeId, u32)>,
        }

        let mut seen = HashSet::new();
        let mut stack = vec![Frame {
            id: root,
            lower: None,
            upper: None,
        }];
        while let Some(Frame { id, lower, upper }) = stack.pop() {
            if !seen.insert(id) {
                return Err(TreeError::Revisited(id));
            }

            let node = self.node(id);
            let out_of_place = match (lower, upper) {
                (Some((ancestor, bound)), _) if node.value < bound => Some((ancestor, bound)),
                (_, Some((ancestor, bound))) if node.value >= bound => Some((ancestor, bound)),
                _ => None,
            };
            if let Some((ancestor, bound)) = out_of_place {
                return Err(TreeError::OrderViolation {
                    node: id,
                    value: node.value,
                    ancestor,
                    bound,
                });
            }

            for side in [Side::Left, Side::Right] {
                let Some(child) = node.child(side) else {
                    continue;
                };
                let child_node = self.nodes.try_get(child).ok_or(TreeError::Dangling {
                    holder: Some(id),
                    target: child,
                })?;
                if child_node.parent != Some(id) {
                    return Err(TreeError::ParentMismatch {
                        holder: id,
                        child,
                        parent: child_node.parent,
                    });
                }

                let here = Some((id, node.value));
                let (lower, upper) = match side {
                    Side::Left => (lower, here),
                    Side::Right => (here, upper),
                };
                stack.push(Frame {
                    id: child,
                    lower,
                    upper,
                });
            }
        }

        match seen.len() {
            reachable if reachable == live => Ok(()),
            reachable => Err(TreeError::Leaked { live, reachable }),
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes.get_mut(id)
    }

    /// The first node holding `value` on the descent path from the root.
    pub(crate) fn find(&self, value: u32) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.node(id);
            if node.value == value {
                return Some(id);
            }
            cur = node.child(Side::of(value, node.value));
        }
        None
    }

    /// Follows `side` links down from `id` as far as they go.
    pub(crate) fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(next) = self.node(id).child(side) {
            id = next;
        }
        id
    }

    /// Every structural mutation must leave the root without a parent.
    pub(crate) fn debug_check_root(&self) {
        if cfg!(debug_assertions) {
            if let Some(root) = self.root {
                let parent = self.node(root).parent;
                assert!(parent.is_none(), "root {root} has parent {parent:?}");
            }
        }
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl FromIterator<u32> for Tree {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<u32> for Tree {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// A read-only view of one node in a [`Tree`].
#[derive(Copy, Clone)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a Tree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a Node {
        self.tree.node(self.id)
    }

    fn view(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.tree, id))
    }

    /// This node's handle.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The value stored in this node.
    pub fn value(&self) -> u32 {
        self.node().value
    }

    /// The node holding this one as a child. Only the root has none.
    pub fn parent(&self) -> Option<Self> {
        self.view(self.node().parent)
    }

    /// The root of the subtree of smaller values.
    pub fn left(&self) -> Option<Self> {
        self.view(self.node().left)
    }

    /// The root of the subtree of equal or larger values.
    pub fn right(&self) -> Option<Self> {
        self.view(self.node().right)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Whether this node is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.tree.root == Some(self.id)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}
