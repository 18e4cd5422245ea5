//! The prediction side of the crate.
use rayon::prelude::*;


/// A trait that defines the behavior of an amount classifier.
/// You only need to implement `classify` method.
pub trait Classifier {
    /// Predicts whether a transaction of the given `amount` is anomalous.
    fn classify(&self, amount: f64) -> bool;


    /// Predicts the labels of `amounts`.
    /// Classification never mutates `self`,
    /// so the amounts are processed in parallel.
    fn classify_all(&self, amounts: &[f64]) -> Vec<bool>
        where Self: Sync
    {
        amounts.par_iter()
            .map(|&amount| self.classify(amount))
            .collect::<Vec<_>>()
    }
}
