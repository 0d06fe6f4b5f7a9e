//! Descriptive statistics and smoothing for input sequences.
//!
//! Small helpers used to inspect a sequence before plotting it; all operate
//! on plain slices and allocate only for their results.

use crate::error::{Error, Result};

/// Number of histogram levels used by [`shannon_entropy`].
const ENTROPY_LEVELS: usize = 65535;

/// Smallest value in `values`, or `None` when empty.
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// Largest value in `values`, or `None` when empty.
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Arithmetic mean, 0 for an empty sequence.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (`n - 1` denominator), 0 below two values.
pub fn std_deviation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let center = mean(values);
    let sum: f64 = values.iter().map(|v| (v - center) * (v - center)).sum();
    (sum / (values.len() - 1) as f64).sqrt()
}

/// Shannon entropy in bits of the value distribution, estimated over a
/// histogram of [`ENTROPY_LEVELS`] equal-width bins spanning the value range.
///
/// Constant sequences have zero entropy. Fails with
/// [`Error::InvalidLength`] on empty input.
pub fn shannon_entropy(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::InvalidLength {
            len: 0,
            reason: "entropy of an empty sequence is undefined",
        });
    }
    let lo = min(values).unwrap_or(0.0);
    let hi = max(values).unwrap_or(0.0);
    if lo == hi {
        return Ok(0.0);
    }

    let scale = ENTROPY_LEVELS as f64 / (hi - lo);
    let mut frequencies = vec![0u64; ENTROPY_LEVELS + 1];
    for value in values {
        let level = ((value - lo) * scale).floor() as usize;
        frequencies[level.min(ENTROPY_LEVELS)] += 1;
    }

    let total = values.len() as f64;
    let entropy = frequencies
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();
    Ok(entropy)
}

/// Smooth `values` by replacing each run of `granules` consecutive values
/// with the run's mean, leaving a trailing partial run untouched.
///
/// Fails with [`Error::InvalidLength`] when `granules` is zero or larger
/// than half the sequence.
pub fn granularity(values: &[f64], granules: usize) -> Result<Vec<f64>> {
    if granules == 0 || granules > values.len() / 2 {
        return Err(Error::InvalidLength {
            len: values.len(),
            reason: "granularity must be between 1 and half the sequence length",
        });
    }

    let mut smoothed = Vec::with_capacity(values.len());
    let mut chunks = values.chunks_exact(granules);
    for chunk in &mut chunks {
        let average = mean(chunk);
        smoothed.extend(std::iter::repeat_n(average, granules));
    }
    smoothed.extend_from_slice(chunks.remainder());
    Ok(smoothed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_moments() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(min(&values), Some(2.0));
        assert_eq!(max(&values), Some(9.0));
        assert_eq!(mean(&values), 5.0);
        // Sample std dev of the classic example set.
        assert!((std_deviation(&values) - 2.138_089_935).abs() < 1e-6);

        assert_eq!(min(&[]), None);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_deviation(&[1.0]), 0.0);
    }

    #[test]
    fn entropy_extremes() -> Result<()> {
        assert_eq!(shannon_entropy(&[5.0; 32])?, 0.0);

        // Two equally likely levels carry exactly one bit.
        let bits: Vec<f64> = (0..64).map(|i| f64::from(i % 2)).collect();
        assert!((shannon_entropy(&bits)? - 1.0).abs() < 1e-9);

        assert!(shannon_entropy(&[]).is_err());
        Ok(())
    }

    #[test]
    fn granularity_averages_blocks() -> Result<()> {
        let values = [1.0, 3.0, 5.0, 7.0, 10.0];
        assert_eq!(
            granularity(&values, 2)?,
            vec![2.0, 2.0, 6.0, 6.0, 10.0],
            "trailing remainder stays untouched"
        );

        assert!(granularity(&values, 0).is_err());
        assert!(granularity(&values, 3).is_err());
        Ok(())
    }
}
