use crate::{max, mean, min, mode, Spread, StatsError};
use tracing::trace;

/// Every statistic of a sample, computed at once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    /// Population variance
    pub var: f64,
    /// Sample variance
    pub sample_var: f64,
    pub stddev: f64,
    pub sample_stddev: f64,
    pub mode: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn compute(values: &[f64]) -> Result<Self, StatsError> {
        trace!(count = values.len(), "Computing summary");
        let mean = mean(values)?;
        let count = values.len();
        let sum = crate::sum(values);
        let spread = Spread::around(values, mean);
        // N.B., this is _supposed to be_ len-1, not len. A single value has no spread.
        let (sample_var, sample_stddev) = if count < 2 {
            (0.0, 0.0)
        } else {
            (spread.variance(count - 1), spread.std_dev(count - 1))
        };
        Ok(Self {
            count,
            sum,
            mean,
            var: spread.variance(count),
            sample_var,
            stddev: spread.std_dev(count),
            sample_stddev,
            mode: mode(values)?,
            min: min(values)?,
            max: max(values)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_individual_functions() {
        let values = [1.0, 2.0, 3.0, 2.0, 4.0, 5.0, 2.0];
        let summary = Summary::compute(&values).unwrap();
        assert_eq!(summary.count, crate::count(&values));
        assert_eq!(summary.sum, crate::sum(&values));
        assert_eq!(summary.mean, crate::mean(&values).unwrap());
        assert_eq!(summary.var, crate::variance(&values).unwrap());
        assert_eq!(summary.sample_var, crate::sample_variance(&values).unwrap());
        assert_eq!(summary.stddev, crate::std_dev(&values).unwrap());
        assert_eq!(summary.sample_stddev, crate::sample_std_dev(&values).unwrap());
        assert_eq!(summary.mode, 2.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
    }

    #[test]
    fn single() {
        let summary = Summary::compute(&[5.0]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.var, 0.0);
        assert_eq!(summary.sample_var, 0.0);
        assert_eq!(summary.mode, 5.0);
    }

    #[test]
    fn extreme_deviations() {
        let summary = Summary::compute(&[1e200, -1e200]).unwrap();
        assert_eq!(summary.stddev, 1e200);
        assert!(summary.sample_stddev.is_finite());

        let summary = Summary::compute(&[1e-200, 2e-200]).unwrap();
        assert!(summary.stddev > 0.0);
        assert!(summary.sample_stddev > 0.0);
    }

    #[test]
    fn empty() {
        assert_eq!(Summary::compute(&[]), Err(StatsError::InvalidInput));
    }
}
