//! This file defines the split rule for decision tree.
use std::fmt;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// `amount <= threshold`.
    Left,
    /// `amount > threshold`.
    Right,
}


/// A threshold test on the transaction amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splitter {
    pub(crate) threshold: f64,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(threshold: f64) -> Self {
        Self { threshold }
    }


    /// Returns the threshold of this rule.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// Defines the splitting.
    /// `NaN` never satisfies `amount <= threshold`,
    /// so it is always sent to the right.
    #[inline]
    pub fn split(&self, amount: f64) -> LeftRight {
        if amount <= self.threshold {
            LeftRight::Left
        } else {
            LeftRight::Right
        }
    }
}


impl fmt::Display for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "amount <= {thr:.2}", thr = self.threshold)
    }
}
