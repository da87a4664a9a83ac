//! Order statistics over bootstrap outcomes.

use std::fmt;

/// Lower percentile of the confidence interval.
pub const LOWER_PERCENTILE: f64 = 0.025;

/// Upper percentile of the confidence interval.
pub const UPPER_PERCENTILE: f64 = 0.975;

/// One point of the empirical cumulative distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CdfPoint {
    /// Outcome value
    pub value: f64,
    /// Cumulative probability in [0, 1]
    pub probability: f64,
}

/// Confidence bounds, mean and empirical CDF of a bootstrap distribution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceSummary {
    /// 2.5th percentile bound (nearest rank)
    pub lower: f64,
    /// 97.5th percentile bound (nearest rank)
    pub upper: f64,
    /// Arithmetic mean of the outcomes
    pub mean: f64,
    /// Empirical CDF over the sorted outcomes
    pub cdf: Vec<CdfPoint>,
    /// Number of outcomes in the distribution
    pub successful: usize,
    /// Number of bootstrap iterations attempted
    pub attempted: usize,
}

impl ConfidenceSummary {
    /// Builds the summary from unsorted outcomes.
    ///
    /// Outcomes are sorted stably in ascending order. Empty input gives
    /// zero bounds and mean and an empty CDF.
    ///
    /// # Examples
    ///
    /// ```
    /// use paleo_bootstrap::ConfidenceSummary;
    ///
    /// let summary = ConfidenceSummary::from_outcomes(vec![3.0, 1.0, 2.0], 3);
    /// assert_eq!(summary.lower, 1.0);
    /// assert_eq!(summary.upper, 3.0);
    /// assert_eq!(summary.mean, 2.0);
    /// assert_eq!(summary.describe(), "3 out of 3");
    /// ```
    pub fn from_outcomes(mut outcomes: Vec<f64>, attempted: usize) -> Self {
        outcomes.sort_by(f64::total_cmp);

        let n = outcomes.len();
        let mean = if n == 0 {
            0.0
        } else {
            outcomes.iter().sum::<f64>() / n as f64
        };

        Self {
            lower: nearest_rank(&outcomes, LOWER_PERCENTILE),
            upper: nearest_rank(&outcomes, UPPER_PERCENTILE),
            mean,
            cdf: empirical_cdf(&outcomes),
            successful: n,
            attempted,
        }
    }

    /// "`successful` out of `attempted`".
    pub fn describe(&self) -> String {
        format!("{} out of {}", self.successful, self.attempted)
    }
}

impl fmt::Display for ConfidenceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}] mean {:.2} ({})",
            self.lower,
            self.upper,
            self.mean,
            self.describe()
        )
    }
}

/// Nearest-rank percentile of sorted values: `sorted[floor(p·n)]`, clamped
/// to the last index. Returns 0 for empty input.
pub fn nearest_rank(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let index = ((p * sorted.len() as f64).floor() as usize).min(sorted.len() - 1);
    sorted[index]
}

/// Empirical CDF `(v_i, i / (n - 1))` of sorted values.
///
/// A single value maps to probability 1.
pub fn empirical_cdf(sorted: &[f64]) -> Vec<CdfPoint> {
    match sorted.len() {
        0 => Vec::new(),
        1 => vec![CdfPoint {
            value: sorted[0],
            probability: 1.0,
        }],
        n => sorted
            .iter()
            .enumerate()
            .map(|(i, &value)| CdfPoint {
                value,
                probability: i as f64 / (n - 1) as f64,
            })
            .collect(),
    }
}
