//! Elementary statistics over a borrowed sample of `f64`.
//!
//! Every function takes the sample as `&[f64]` and never mutates it. Functions that divide by the
//! sample length, or must return one of its elements, fail with [StatsError::InvalidInput] on an
//! empty sample.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod full;

pub use full::Summary;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The sample is empty
    InvalidInput,
}

impl Display for StatsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::InvalidInput => write!(f, "invalid input: the sample is empty"),
        }
    }
}

impl Error for StatsError {}

/// Number of values in the sample.
pub fn count(values: &[f64]) -> usize {
    values.len()
}

/// Sum accumulated left to right. `0.0` for an empty sample.
pub fn sum(values: &[f64]) -> f64 {
    let mut acc = 0.0;
    for x in values {
        acc += *x;
    }
    acc
}

pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::InvalidInput);
    }
    Ok(sum(values) / values.len() as f64)
}

/// Population variance, dividing by the sample length.
pub fn variance(values: &[f64]) -> Result<f64, StatsError> {
    let mean = mean(values)?;
    Ok(Spread::around(values, mean).variance(values.len()))
}

/// Sample variance, dividing by the sample length minus one. A single value has no spread.
pub fn sample_variance(values: &[f64]) -> Result<f64, StatsError> {
    let mean = mean(values)?;
    if values.len() < 2 {
        return Ok(0.0);
    }
    Ok(Spread::around(values, mean).variance(values.len() - 1))
}

/// Population standard deviation, computed in two passes: the mean first, then the squared
/// deviations from it.
pub fn std_dev(values: &[f64]) -> Result<f64, StatsError> {
    let mean = mean(values)?;
    Ok(Spread::around(values, mean).std_dev(values.len()))
}

pub fn sample_std_dev(values: &[f64]) -> Result<f64, StatsError> {
    let mean = mean(values)?;
    if values.len() < 2 {
        return Ok(0.0);
    }
    Ok(Spread::around(values, mean).std_dev(values.len() - 1))
}

/// Most frequent value, using exact equality between values.
///
/// When several values share the highest frequency, the one that reached it first while scanning
/// the sample from the start wins. `0.0` and `-0.0` are counted as the same value and the first
/// one seen is returned. NaNs only match NaNs with the same bit pattern.
pub fn mode(values: &[f64]) -> Result<f64, StatsError> {
    let mut frequencies: HashMap<u64, (f64, usize)> = HashMap::with_capacity(values.len());
    let mut best: Option<(f64, usize)> = None;
    for &x in values {
        let entry = frequencies.entry(mode_key(x)).or_insert((x, 0));
        entry.1 += 1;
        match best {
            Some((_, n)) if entry.1 <= n => {}
            _ => best = Some(*entry),
        }
    }
    best.map(|(x, _)| x).ok_or(StatsError::InvalidInput)
}

pub fn min(values: &[f64]) -> Result<f64, StatsError> {
    values
        .iter()
        .copied()
        .min_by(f64::total_cmp)
        .ok_or(StatsError::InvalidInput)
}

pub fn max(values: &[f64]) -> Result<f64, StatsError> {
    values
        .iter()
        .copied()
        .max_by(f64::total_cmp)
        .ok_or(StatsError::InvalidInput)
}

// Hash key for the mode frequency table. Both zeroes share a key since they compare equal.
fn mode_key(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else {
        x.to_bits()
    }
}

/// Deviations of a sample from its mean, scaled by the largest absolute deviation so squaring
/// can't underflow or overflow on finite input.
pub(crate) struct Spread {
    /// Largest `|x - mean|`, zero when every value is equal
    scale: f64,
    /// Sum of `((x - mean) / scale)²`
    acc: f64,
}

impl Spread {
    /// A sample of identical values has no spread at all, even when rounding in the mean would
    /// leave a tiny residue.
    pub(crate) fn around(values: &[f64], mean: f64) -> Self {
        let none = Self {
            scale: 0.0,
            acc: 0.0,
        };
        let Some(&first) = values.first() else {
            return none;
        };
        if values.iter().all(|x| *x == first) {
            return none;
        }
        let mut scale: f64 = 0.0;
        for s in values {
            scale = scale.max((*s - mean).abs());
        }
        if scale == 0.0 {
            return none;
        }
        let mut acc: f64 = 0.0;
        for s in values {
            let x = (*s - mean) / scale;
            acc += x * x;
        }
        Self { scale, acc }
    }

    pub(crate) fn variance(&self, denom: usize) -> f64 {
        if self.scale == 0.0 {
            return 0.0;
        }
        self.scale * self.scale * (self.acc / denom as f64)
    }

    // Scale applied after the square root
    pub(crate) fn std_dev(&self, denom: usize) -> f64 {
        if self.scale == 0.0 {
            return 0.0;
        }
        self.scale * (self.acc / denom as f64).sqrt()
    }
}
