//! Text renderings of a [`Tree`]: a sorted list through [`Display`][fmt::Display], and a drawing
//! of the tree's shape through [`Tree::pretty`].

use std::fmt;

use crate::arena::NodeId;
use crate::tree::Tree;
use crate::util::Side;

/// Renders the values in order, e.g. `[1 2 2 5]`.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Draws the shape of a [`Tree`], one node per line. Returned by [`Tree::pretty`].
pub struct Pretty<'a>(&'a Tree);

impl Tree {
    /// A drawing of the tree's shape. Left children are marked `├─L`, right children `└─R`.
    /// Leaves get no child lines at all. Only a node with a single child shows its missing one
    /// as `nil`, and an empty tree draws as a lone `nil`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let tree: Tree = [3, 0, 132, 180, 99].into_iter().collect();
    ///
    /// assert_eq!(tree.to_string(), "[0 3 99 132 180]");
    /// assert_eq!(
    ///     tree.pretty().to_string(),
    ///     "3\n\
    ///      ├─L 0\n\
    ///      └─R 132\n\
    ///      \x20   ├─L 99\n\
    ///      \x20   └─R 180\n"
    /// );
    /// ```
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty(self)
    }
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Line {
            id: Option<NodeId>,
            /// Continuation bars for the ancestors above this line.
            indent: String,
            side: Option<Side>,
        }

        let Some(root) = self.0.root else {
            return writeln!(f, "nil");
        };

        let mut stack = vec![Line {
            id: Some(root),
            indent: String::new(),
            side: None,
        }];
        while let Some(Line { id, indent, side }) = stack.pop() {
            f.write_str(&indent)?;
            match side {
                Some(Side::Left) => f.write_str("├─L ")?,
                Some(Side::Right) => f.write_str("└─R ")?,
                None => {}
            }

            let Some(id) = id else {
                writeln!(f, "nil")?;
                continue;
            };
            let node = self.0.node(id);
            writeln!(f, "{}", node.value)?;
            if node.is_leaf() {
                continue;
            }

            // A left child still has its right sibling below it, so its subtree keeps the bar.
            let child_indent = match side {
                Some(Side::Left) => format!("{indent}│   "),
                Some(Side::Right) => format!("{indent}    "),
                None => indent,
            };
            stack.push(Line {
                id: node.right,
                indent: child_indent.clone(),
                side: Some(Side::Right),
            });
            stack.push(Line {
                id: node.left,
                indent: child_indent,
                side: Some(Side::Left),
            });
        }

        Ok(())
    }
}
