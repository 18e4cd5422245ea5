#![warn(missing_docs)]

//!
//! A crate that flags anomalous transactions
//! with a decision tree on the transaction amount.
//!
//! The tree is grown greedily:
//! every node picks the threshold between two adjacent amounts
//! that minimizes the size-weighted binary entropy of its children,
//! and growing stops at pure nodes
//! or when no threshold lowers the entropy,
//! where the leaf predicts the majority label.
//!
//! ```
//! use anomaly_tree::{build, classify, toy_transactions};
//!
//! let mut sample = toy_transactions();
//! let tree = build(&mut sample).unwrap();
//!
//! assert!(!classify(&tree, 52.0));
//! assert!(classify(&tree, 1150.0));
//! ```

pub mod error;
pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod logging;
pub mod prelude;


pub use error::{Result, TreeError};

pub use sample::{Sample, SampleReader, toy_transactions};

pub use classifier::Classifier;

pub use decision_tree::{
    DecisionTree,
    DecisionTreeClassifier,
    Node,
    Splitter,
    LeftRight,
    safe_log2,
    binary_entropy,
};


/// Grows a decision tree on `sample`.
/// See [`DecisionTree::build`].
#[inline]
pub fn build(sample: &mut [Sample]) -> Result<DecisionTreeClassifier> {
    DecisionTree::new().build(sample)
}


/// Classifies a transaction of the given `amount` with `tree`.
/// Returns `true` for an anomaly.
#[inline]
pub fn classify<C>(tree: &C, amount: f64) -> bool
    where C: Classifier + ?Sized
{
    tree.classify(amount)
}
