//! This crate exposes an unbalanced Binary Search Tree of `u32`s whose nodes know their parents.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored values. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a value and has up to two child `Node`s. The invariants kept by this tree are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value greater than _or equal
//!    to_ its own value. Inserting a value twice stores it twice, so the tree is a multiset.
//! 3. Every `Node` except the root links back to the `Node` holding it, and the root links to
//!    nothing.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. Nothing rebalances the tree so inserting values in sorted order
//! makes the height equal to the number of values.
//!
//! ## Parent links
//!
//! Nodes are kept in an arena and refer to each other by [`NodeId`]. A parent link is just an id
//! so it never owns its target, and deleting a node can't free anything through it.
//!
//! # Examples
//!
//! ```
//! use arena_bst::{Order, Tree};
//!
//! let mut tree: Tree = [3, 0, 132, 180, 99].into_iter().collect();
//! assert_eq!(tree.size(), 5);
//!
//! tree.insert(132);
//! tree.insert(80);
//! assert_eq!(tree.size(), 7);
//!
//! assert!(tree.delete(99));
//! assert!(!tree.contains(99));
//! assert_eq!(tree.to_string(), "[0 3 80 132 132 180]");
//!
//! let root = tree.root().unwrap();
//! assert!(root.parent().is_none());
//! assert!(tree.walk(Order::Pre).skip(1).all(|node| node.parent().is_some()));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod error;
mod render;
mod splice;
mod tree;
mod util;
mod walk;


pub use arena::NodeId;
pub use error::{Result, TreeError};
pub use render::Pretty;
pub use tree::{NodeRef, Tree};
pub use walk::{Iter, Order, Walk};
