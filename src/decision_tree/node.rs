//! A node struct used in the decision tree algorithm.
use crate::Classifier;
use super::split_rule::*;

use std::fmt;
use std::mem;


/// Enumeration of branch and leaf nodes.
/// Each branch owns its two children,
/// so a tree is dropped as a whole.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A node that have two childrens.
    Branch {
        /// Threshold test; `amount <= threshold` goes left.
        splitter: Splitter,
        /// Subtree for `amount <= threshold`.
        left:     Box<Node>,
        /// Subtree for `amount > threshold`.
        right:    Box<Node>,
    },
    /// A node that have no child.
    Leaf {
        /// `true` if the transactions reaching this leaf are anomalies.
        prediction: bool,
    },
}


impl Node {
    pub(crate) fn branch(
        splitter: Splitter,
        left:     Box<Node>,
        right:    Box<Node>,
    ) -> Self
    {
        Self::Branch { splitter, left, right, }
    }


    pub(crate) fn leaf(prediction: bool) -> Self {
        Self::Leaf { prediction, }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        let mut leaves = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Branch { left, right, .. } => {
                    stack.push(left.as_ref());
                    stack.push(right.as_ref());
                },
                Self::Leaf { .. } => leaves += 1,
            }
        }
        leaves
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack = vec![(self, 0_usize)];
        while let Some((node, d)) = stack.pop() {
            match node {
                Self::Branch { left, right, .. } => {
                    stack.push((left.as_ref(), d + 1));
                    stack.push((right.as_ref(), d + 1));
                },
                Self::Leaf { .. } => depth = depth.max(d),
            }
        }
        depth
    }


    /// Moves the branch children of this node onto `stack`,
    /// leaving leaves in their place.
    fn detach_children(&mut self, stack: &mut Vec<Box<Node>>) {
        if let Self::Branch { left, right, .. } = self {
            for child in [left, right] {
                if !child.is_leaf() {
                    let placeholder = Box::new(Node::leaf(false));
                    stack.push(mem::replace(child, placeholder));
                }
            }
        }
    }


    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize)
        -> fmt::Result
    {
        let pad = "  ".repeat(indent);
        match self {
            Self::Branch { splitter, left, right } => {
                writeln!(f, "{pad}{splitter} ?")?;
                left.fmt_indented(f, indent + 1)?;
                right.fmt_indented(f, indent + 1)
            },
            Self::Leaf { prediction } => {
                let label = if *prediction { "anomaly" } else { "normal" };
                writeln!(f, "{pad}=> {label}")
            },
        }
    }
}


impl Classifier for Node {
    fn classify(&self, amount: f64) -> bool {
        let mut node = self;
        loop {
            match node {
                Self::Branch { splitter, left, right } => {
                    node = match splitter.split(amount) {
                        LeftRight::Left  => left.as_ref(),
                        LeftRight::Right => right.as_ref(),
                    };
                },
                Self::Leaf { prediction } => return *prediction,
            }
        }
    }
}


// Drops deep trees without one nested call per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}


impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
