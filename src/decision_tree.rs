/// Defines the decision tree trainer.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;

/// Defines the inner representations of `DecisionTreeClassifier`.
pub mod node;
/// Defines the threshold test stored in each branch.
pub mod split_rule;
mod criterion;


pub use dtree_classifier::DecisionTreeClassifier;
pub use dtree::DecisionTree;
pub use node::Node;
pub use split_rule::{LeftRight, Splitter};
pub use criterion::{safe_log2, binary_entropy};
