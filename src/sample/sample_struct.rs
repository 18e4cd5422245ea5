use serde::{Serialize, Deserialize};

use std::fmt;


/// A single labeled transaction.
/// `amount` is the only feature and `label == true` marks an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Transaction amount.
    pub amount: f64,
    /// Ground truth; `true` for anomalous (fraudulent) transactions.
    pub label: bool,
}


impl Sample {
    /// Construct a new sample.
    #[inline]
    pub fn new(amount: f64, label: bool) -> Self {
        Self { amount, label }
    }


    /// Shorthand for a sample labeled as anomalous.
    #[inline]
    pub fn anomaly(amount: f64) -> Self {
        Self::new(amount, true)
    }


    /// Shorthand for a sample labeled as normal.
    #[inline]
    pub fn normal(amount: f64) -> Self {
        Self::new(amount, false)
    }
}


impl From<(f64, bool)> for Sample {
    #[inline]
    fn from((amount, label): (f64, bool)) -> Self {
        Self::new(amount, label)
    }
}


impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.label { "anomaly" } else { "normal" };
        write!(f, "{amount:.2} ({kind})", amount = self.amount)
    }
}


/// Returns the eight-transaction toy dataset:
/// small amounts (50-65) are normal, amounts above 1000 are anomalies.
pub fn toy_transactions() -> Vec<Sample> {
    vec![
        Sample::normal(50.0),
        Sample::normal(60.0),
        Sample::anomaly(1000.0),
        Sample::anomaly(1200.0),
        Sample::normal(55.0),
        Sample::normal(65.0),
        Sample::anomaly(1100.0),
        Sample::normal(52.0),
    ]
}
