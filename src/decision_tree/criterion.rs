//! Entropic impurity and the search for the best threshold.
use crate::Sample;


/// Base-2 logarithm that returns `0` for non-positive inputs,
/// so that `0 * log2(0)` evaluates to `0`.
#[inline(always)]
pub fn safe_log2(x: f64) -> f64 {
    if x > 0f64 { x.log2() } else { 0f64 }
}


/// Binary entropy of a set whose anomaly rate is `p`.
/// Returns exactly `0.0` for `p = 0` and `p = 1`.
#[inline(always)]
pub fn binary_entropy(p: f64) -> f64 {
    let q = 1f64 - p;
    0f64 - (p * safe_log2(p) + q * safe_log2(q))
}


/// Number of samples and anomalies in a set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct LabelCount {
    pub(super) total: usize,
    pub(super) anomalies: usize,
}


impl LabelCount {
    pub(super) fn of(sample: &[Sample]) -> Self {
        let anomalies = sample.iter().filter(|s| s.label).count();
        Self { total: sample.len(), anomalies }
    }


    #[inline]
    fn push(&mut self, label: bool) {
        self.total += 1;
        self.anomalies += label as usize;
    }


    #[inline]
    fn pop(&mut self, label: bool) {
        self.total -= 1;
        self.anomalies -= label as usize;
    }


    #[inline]
    pub(super) fn is_pure(&self) -> bool {
        self.anomalies == 0 || self.anomalies == self.total
    }


    #[inline]
    pub(super) fn anomaly_rate(&self) -> f64 {
        self.anomalies as f64 / self.total as f64
    }


    #[inline]
    pub(super) fn entropy(&self) -> f64 {
        binary_entropy(self.anomaly_rate())
    }


    /// Majority label; ties go to `true`.
    #[inline]
    pub(super) fn majority(&self) -> bool {
        self.anomaly_rate() >= 0.5
    }
}


/// The best split found on a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Split {
    pub(super) threshold: f64,
    /// Size-weighted entropy of the two children.
    pub(super) score: f64,
    /// Number of samples sent to the left child.
    pub(super) n_left: usize,
}


/// Returns the threshold that minimizes the weighted entropy,
/// or `None` if no threshold beats `base_entropy` strictly.
///
/// `sample` must be sorted by amount in ascending order.
/// Since it is sorted, the samples `amount <= threshold`
/// form the prefix `sample[..n_left]`.
pub(super) fn best_split(sample: &[Sample], base_entropy: f64)
    -> Option<Split>
{
    let n_sample = sample.len() as f64;

    let mut left = LabelCount::default();
    let mut right = LabelCount::of(sample);

    let mut best: Option<Split> = None;
    let mut best_score = base_entropy;

    for (i, pair) in sample.windows(2).enumerate() {
        let (lo, hi) = (pair[0], pair[1]);
        left.push(lo.label);
        right.pop(lo.label);

        if lo.amount == hi.amount { continue; }

        let score = (
            left.total as f64 * left.entropy()
            + right.total as f64 * right.entropy()
        ) / n_sample;

        if score < best_score {
            best_score = score;
            best = Some(Split {
                threshold: midpoint(lo.amount, hi.amount),
                score,
                n_left: i + 1,
            });
        }
    }
    best
}


/// Midpoint of two distinct amounts `lo < hi`.
/// Falls back to `lo` when the midpoint is not representable
/// strictly below `hi`, so that `lo <= t < hi` always holds.
#[inline]
fn midpoint(lo: f64, hi: f64) -> f64 {
    let mut mid = (lo + hi) / 2f64;
    if !mid.is_finite() {
        mid = lo / 2f64 + hi / 2f64;
    }
    if lo <= mid && mid < hi { mid } else { lo }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn weighted_entropy(sample: &[Sample], threshold: f64) -> f64 {
        let (left, right): (Vec<Sample>, Vec<Sample>) = sample.iter()
            .partition(|s| s.amount <= threshold);
        let n = sample.len() as f64;
        let l = LabelCount::of(&left);
        let r = LabelCount::of(&right);

        (l.total as f64 * l.entropy() + r.total as f64 * r.entropy()) / n
    }

    #[test]
    fn safe_log2_is_zero_at_non_positive() {
        assert_eq!(safe_log2(0.0), 0.0);
        assert_eq!(safe_log2(-3.0), 0.0);
        assert_eq!(safe_log2(8.0), 3.0);
    }

    #[test]
    fn entropy_of_pure_sets_is_exactly_zero() {
        let zero = binary_entropy(0.0);
        let one = binary_entropy(1.0);
        assert_eq!(zero, 0.0);
        assert_eq!(one, 0.0);
        assert!(zero.is_sign_positive() && one.is_sign_positive());
        assert_eq!(binary_entropy(0.5), 1.0);
    }

    #[test]
    fn pure_label_count_has_zero_entropy() {
        let all_normal = vec![Sample::normal(1.0), Sample::normal(2.0)];
        let all_anomaly = vec![Sample::anomaly(1.0)];
        assert_eq!(LabelCount::of(&all_normal).entropy(), 0.0);
        assert_eq!(LabelCount::of(&all_anomaly).entropy(), 0.0);
    }

    #[test]
    fn majority_breaks_ties_towards_anomaly() {
        let count = LabelCount { total: 4, anomalies: 2 };
        assert!(count.majority());
        let count = LabelCount { total: 5, anomalies: 2 };
        assert!(!count.majority());
    }

    #[test]
    fn separable_clusters_split_in_the_gap() {
        let sample = vec![
            Sample::normal(50.0),
            Sample::normal(52.0),
            Sample::normal(55.0),
            Sample::anomaly(1000.0),
            Sample::anomaly(1100.0),
        ];
        let base = LabelCount::of(&sample).entropy();
        let split = best_split(&sample, base).unwrap();
        assert_eq!(split.threshold, 527.5);
        assert_eq!(split.n_left, 3);
        assert_eq!(split.score, 0.0);
    }

    #[test]
    fn duplicate_amounts_are_not_split() {
        let sample = vec![
            Sample::normal(10.0),
            Sample::anomaly(10.0),
            Sample::anomaly(10.0),
        ];
        let base = LabelCount::of(&sample).entropy();
        assert_eq!(best_split(&sample, base), None);
    }

    #[test]
    fn earliest_threshold_wins_ties() {
        // Splitting at 1.5 and at 3.5 give the same weighted entropy.
        let sample = vec![
            Sample::anomaly(1.0),
            Sample::normal(2.0),
            Sample::normal(3.0),
            Sample::anomaly(4.0),
        ];
        let base = LabelCount::of(&sample).entropy();
        let split = best_split(&sample, base).unwrap();
        assert_eq!(
            weighted_entropy(&sample, 1.5),
            weighted_entropy(&sample, 3.5)
        );
        assert_eq!(split.threshold, 1.5);
    }

    #[test]
    fn earliest_threshold_wins_rounding_sensitive_ties() {
        // Splitting at 2.5 and at 6.5 both give (7 log 7 - 8 - 3 log 3) / 10.
        let labels = [true, true, true, false, true, true, true, false, false, true];
        let sample = labels.iter()
            .enumerate()
            .map(|(i, &label)| Sample::new(i as f64, label))
            .collect::<Vec<_>>();
        let base = LabelCount::of(&sample).entropy();
        let split = best_split(&sample, base).unwrap();

        assert_eq!(split.threshold, 2.5);
        assert_eq!(split.n_left, 3);
        assert_eq!(split.score, weighted_entropy(&sample, 2.5));
        assert!(split.score <= weighted_entropy(&sample, 6.5));
    }

    #[test]
    fn midpoint_stays_below_upper_amount() {
        let lo: f64 = 1.0;
        let hi = f64::from_bits(lo.to_bits() + 1);
        let t = midpoint(lo, hi);
        assert!(lo <= t && t < hi);

        let t = midpoint(f64::MAX / 2.0 * 1.5, f64::MAX);
        assert!(t.is_finite() && t < f64::MAX);
    }

    #[test]
    fn sweep_matches_full_partition() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let n = rng.gen_range(2..40);
            let mut sample = (0..n)
                .map(|_| {
                    let amount = rng.gen_range(0..15) as f64 * 10.0;
                    Sample::new(amount, rng.gen_bool(0.4))
                })
                .collect::<Vec<_>>();
            sample.sort_by(|a, b| a.amount.total_cmp(&b.amount));

            let base = LabelCount::of(&sample).entropy();
            let candidates = sample.windows(2)
                .filter(|p| p[0].amount != p[1].amount)
                .map(|p| (p[0].amount + p[1].amount) / 2.0)
                .collect::<Vec<_>>();

            match best_split(&sample, base) {
                Some(split) => {
                    let expected = weighted_entropy(&sample, split.threshold);
                    assert_eq!(split.score, expected);
                    assert!(split.score < base);
                    for &t in &candidates {
                        let score = weighted_entropy(&sample, t);
                        assert!(split.score <= score);
                        // Earlier thresholds must be strictly worse.
                        if t < split.threshold {
                            assert!(split.score < score);
                        }
                    }
                    let n_left = sample.iter()
                        .filter(|s| s.amount <= split.threshold)
                        .count();
                    assert_eq!(n_left, split.n_left);
                },
                None => {
                    for &t in &candidates {
                        assert!(weighted_entropy(&sample, t) >= base);
                    }
                },
            }
        }
    }
}
