use crate::arena::NodeId;

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors reported by [`Tree`][crate::Tree] operations.
///
/// [`NotFound`][TreeError::NotFound] is the only error a well formed tree can produce. Every other
/// variant describes a broken structural invariant and is only returned by
/// [`Tree::check_invariants`][crate::Tree::check_invariants].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// No node with this value is reachable by descending from the root.
    #[error("value {0} is not in the tree")]
    NotFound(u32),
    /// The root has a parent link.
    #[error("root {root} has parent {parent}")]
    RootHasParent {
        /// The root node.
        root: NodeId,
        /// The parent it claims to have.
        parent: NodeId,
    },
    /// A child's parent link doesn't point back at the node that holds it.
    #[error(
        "{child} is a child of {holder} but its parent link is {}",
        describe(parent, "empty")
    )]
    ParentMismatch {
        /// The node holding `child` in one of its slots.
        holder: NodeId,
        /// The misattributed child.
        child: NodeId,
        /// What the child records as its parent.
        parent: Option<NodeId>,
    },
    /// A value sits on the wrong side of one of its ancestors.
    #[error("{node} holds {value} which is out of place under {ancestor} holding {bound}")]
    OrderViolation {
        /// The misplaced node.
        node: NodeId,
        /// Its value.
        value: u32,
        /// The ancestor whose ordering it breaks.
        ancestor: NodeId,
        /// The ancestor's value.
        bound: u32,
    },
    /// A node is reachable along more than one path from the root.
    #[error("{0} is reachable more than once")]
    Revisited(NodeId),
    /// A link points at a released slot.
    #[error("{} points at released node {target}", describe(holder, "the root link"))]
    Dangling {
        /// The node holding the link. `None` for the root link.
        holder: Option<NodeId>,
        /// The released slot.
        target: NodeId,
    },
    /// Nodes are stored that can't be reached from the root.
    #[error("{live} nodes are stored but only {reachable} are reachable from the root")]
    Leaked {
        /// Nodes held by the arena.
        live: usize,
        /// Nodes reachable from the root.
        reachable: usize,
    },
}

/// Names an optional link for an error message, using `missing` when there is no node.
fn describe(id: &Option<NodeId>, missing: &str) -> String {
    match id {
        Some(id) => id.to_string(),
        None => missing.to_string(),
    }
}

impl TreeError {
    /// Whether this error means the tree itself is corrupt rather than a lookup missing.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}
