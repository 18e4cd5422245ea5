//! Defines the decision tree classifier.
use crate::{Classifier, Sample};

use super::node::*;

use std::fmt;


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
/// The tree is immutable once grown,
/// so it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeClassifier {
    root: Node
}


impl From<Box<Node>> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Box<Node>) -> Self {
        Self { root: *root }
    }
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    #[inline]
    fn classify(&self, amount: f64) -> bool {
        self.root.classify(amount)
    }
}


impl DecisionTreeClassifier {
    /// Returns the root node of the tree.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the fraction of `sample` that this tree misclassifies.
    /// Returns `0` for an empty `sample`.
    pub fn training_error(&self, sample: &[Sample]) -> f64 {
        if sample.is_empty() { return 0f64; }

        let amounts = sample.iter()
            .map(|s| s.amount)
            .collect::<Vec<_>>();
        let n_miss = self.classify_all(&amounts)
            .into_iter()
            .zip(sample)
            .filter(|(p, s)| *p != s.label)
            .count();

        n_miss as f64 / sample.len() as f64
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
