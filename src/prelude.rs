//! Exports the decision tree, the classifier trait, and sample types.
//!
pub use crate::decision_tree::{
    // Trainer
    DecisionTree,


    // Trained tree ------------------------------
    DecisionTreeClassifier,
    Node,
};


pub use crate::classifier::Classifier;


pub use crate::sample::{
    Sample,
    SampleReader,
    toy_transactions,
};


pub use crate::error::TreeError;
