//! Depth-first traversal in pre-, in-, and post-order.
//!
//! All three orders share one walk. Each node is entered, revisited between its subtrees, and
//! exited; the [`Order`] only picks at which of those three points the node is yielded. The walk
//! keeps its own stack so list-shaped trees don't recurse on the call stack.

use crate::arena::NodeId;
use crate::tree::{NodeRef, Tree};

/// When a node is yielded relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Before both subtrees.
    Pre,
    /// After the left subtree and before the right one. Yields values in sorted order.
    In,
    /// After both subtrees.
    Post,
}

#[derive(Copy, Clone, Debug)]
enum Stage {
    Enter,
    Between,
    Exit,
}

/// A lazy depth-first walk over a [`Tree`]'s nodes. See [`Tree::walk`].
#[derive(Clone)]
pub struct Walk<'a> {
    tree: &'a Tree,
    order: Order,
    stack: Vec<(NodeId, Stage)>,
}

impl<'a> Walk<'a> {
    fn new(tree: &'a Tree, order: Order) -> Self {
        Self {
            tree,
            order,
            stack: tree.root.map(|root| (root, Stage::Enter)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, stage)) = self.stack.pop() {
            let node = self.tree.node(id);
            let visit = match stage {
                Stage::Enter => {
                    self.stack.push((id, Stage::Between));
                    if let Some(left) = node.left {
                        self.stack.push((left, Stage::Enter));
                    }
                    self.order == Order::Pre
                }
                Stage::Between => {
                    if self.order == Order::Post {
                        self.stack.push((id, Stage::Exit));
                    }
                    if let Some(right) = node.right {
                        self.stack.push((right, Stage::Enter));
                    }
                    self.order == Order::In
                }
                Stage::Exit => true,
            };

            if visit {
                return Some(NodeRef::new(self.tree, id));
            }
        }

        None
    }
}

/// The values of a [`Tree`] in sorted order. See [`Tree::iter`].
#[derive(Clone)]
pub struct Iter<'a>(Walk<'a>);

impl Iterator for Iter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|node| node.value())
    }
}

impl Tree {
    /// Walks the nodes of the tree depth-first, yielding each one at the point `order` says.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::{Order, Tree};
    ///
    /// let tree: Tree = [2, 1, 3].into_iter().collect();
    /// let values = |order| tree.walk(order).map(|node| node.value()).collect::<Vec<_>>();
    ///
    /// assert_eq!(values(Order::Pre), [2, 1, 3]);
    /// assert_eq!(values(Order::In), [1, 2, 3]);
    /// assert_eq!(values(Order::Post), [1, 3, 2]);
    /// ```
    pub fn walk(&self, order: Order) -> Walk<'_> {
        Walk::new(self, order)
    }

    /// Calls `visit` with every value in the tree, in the given order.
    pub fn visit(&self, order: Order, mut visit: impl FnMut(u32)) {
        for node in self.walk(order) {
            visit(node.value());
        }
    }

    /// The values in the tree, smallest first. Duplicates are yielded once per node.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.walk(Order::In))
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = u32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
