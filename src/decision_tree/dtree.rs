use crate::error::{Result, TreeError};
use crate::Sample;

use super::{
    node::*,
    criterion::*,
    split_rule::*,
    dtree_classifier::DecisionTreeClassifier,
};



/// The Decision Tree algorithm on transaction amounts.
/// Given a set of labeled transactions,
/// [`DecisionTree`] grows a binary tree of threshold tests
/// that minimizes the entropic impurity at every node
/// and outputs it as a [`DecisionTreeClassifier`].
///
/// The tree is grown until every leaf is pure
/// or no threshold reduces the entropy any further,
/// in which case the leaf predicts the majority label.
///
/// # Example
/// ```
/// use anomaly_tree::{Classifier, DecisionTree, Sample};
///
/// let mut sample = vec![
///     Sample::normal(50.0),
///     Sample::normal(60.0),
///     Sample::anomaly(1000.0),
///     Sample::anomaly(1200.0),
/// ];
/// let f = DecisionTree::new().build(&mut sample).unwrap();
///
/// assert!(!f.classify(55.0));
/// assert!(f.classify(1100.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionTree;


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    #[inline]
    pub fn new() -> Self {
        Self
    }


    /// Grows a tree on `sample`.
    ///
    /// `sample` is sorted by amount in place while the tree is grown,
    /// so its order after this call is unspecified.
    /// Returns an error if `sample` is empty
    /// or contains a non-finite amount.
    pub fn build(&self, sample: &mut [Sample])
        -> Result<DecisionTreeClassifier>
    {
        if sample.is_empty() {
            return Err(TreeError::EmptySample);
        }
        if let Some((index, s)) = sample.iter()
            .enumerate()
            .find(|(_, s)| !s.amount.is_finite())
        {
            return Err(TreeError::NonFiniteAmount { index, amount: s.amount });
        }

        let n_sample = sample.len();
        let root = self.grow(sample);
        let classifier = DecisionTreeClassifier::from(root);

        tracing::info!(
            n_sample,
            leaves = classifier.leaves(),
            depth = classifier.depth(),
            "decision tree grown"
        );
        Ok(classifier)
    }


    /// Construct the tree for `sample`.
    /// `sample` is non-empty and every amount is finite.
    ///
    /// Nodes are grown depth-first from an explicit work stack,
    /// so the call stack does not grow with the depth of the tree.
    fn grow(&self, sample: &mut [Sample]) -> Box<Node> {
        let mut tasks = vec![Task::Grow(sample, 0)];
        let mut built: Vec<Box<Node>> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Grow(sample, depth) => {
                    match self.split_node(sample, depth) {
                        Grown::Leaf(prediction) => {
                            built.push(Box::new(Node::leaf(prediction)));
                        },
                        Grown::Branch(splitter, lsample, rsample) => {
                            // The left child is popped, and thus built, first.
                            tasks.push(Task::Join(splitter));
                            tasks.push(Task::Grow(rsample, depth + 1));
                            tasks.push(Task::Grow(lsample, depth + 1));
                        },
                    }
                },
                Task::Join(splitter) => {
                    let right = built.pop()
                        .expect("right subtree is built before its parent");
                    let left = built.pop()
                        .expect("left subtree is built before its parent");
                    built.push(Box::new(Node::branch(splitter, left, right)));
                },
            }
        }

        built.pop().expect("the root is built last")
    }


    /// Decides whether the node holding `sample` is a leaf
    /// or splits it into the left and right children.
    fn split_node<'a>(&self, sample: &'a mut [Sample], depth: usize)
        -> Grown<'a>
    {
        let count = LabelCount::of(sample);

        // All transactions share a label (this covers a single sample).
        if count.is_pure() {
            let prediction = sample[0].label;
            tracing::trace!(depth, n_sample = count.total, prediction, "pure leaf");
            return Grown::Leaf(prediction);
        }

        sample.sort_by(|a, b| a.amount.total_cmp(&b.amount));

        let base_entropy = count.entropy();
        let Some(split) = best_split(sample, base_entropy) else {
            let prediction = count.majority();
            tracing::trace!(
                depth,
                n_sample = count.total,
                prediction,
                "no split reduces entropy, majority leaf"
            );
            return Grown::Leaf(prediction);
        };

        tracing::debug!(
            depth,
            threshold = split.threshold,
            weighted_entropy = split.score,
            base_entropy,
            n_left = split.n_left,
            n_right = count.total - split.n_left,
            "split"
        );

        // `sample` is sorted, so the left child gets a prefix.
        let (lsample, rsample) = sample.split_at_mut(split.n_left);
        Grown::Branch(Splitter::new(split.threshold), lsample, rsample)
    }
}


/// Pending work while growing a tree.
enum Task<'a> {
    /// Grow the sub-tree for these samples at this depth.
    Grow(&'a mut [Sample], usize),
    /// Combine the two most recently built sub-trees.
    Join(Splitter),
}


/// The outcome of a single node.
enum Grown<'a> {
    Leaf(bool),
    Branch(Splitter, &'a mut [Sample], &'a mut [Sample]),
}
