//! Forward and inverse discrete Fourier transforms with a pinned convention.
//!
//! The wrapper owns a [`FftPlanner`] so plans are cached across calls of the
//! same length. The normalization convention is fixed regardless of any
//! library default: the forward pass is unnormalized and the inverse carries
//! the `1/N` factor, so `inverse(forward(x)) == x` up to rounding for every
//! supported input. Coefficient `k` of a length-`N` forward transform
//! corresponds to frequency `k * fs / N`.
//!
//! A `SpectralTransform` is cheap to create and not shared between threads;
//! concurrent pipeline runs each use their own.

use rustfft::{FftPlanner, num_complex::Complex};

use crate::error::{Error, Result};

/// Zero every coefficient whose frequency index fails `keep`.
///
/// The predicate sees raw bin indices `0..N`; callers working with real
/// signals are responsible for treating conjugate-mirrored bins `k` and
/// `N - k` consistently (see `pipeline::SpectralFilter`, which folds them).
pub fn filter(spectrum: &mut [Complex<f64>], keep: impl Fn(usize) -> bool) {
    for (k, coefficient) in spectrum.iter_mut().enumerate() {
        if !keep(k) {
            *coefficient = Complex::new(0.0, 0.0);
        }
    }
}

/// Discrete Fourier transform wrapper with cached plans.
pub struct SpectralTransform {
    /// Plan cache; rustfft handles arbitrary (mixed-radix) lengths, so no
    /// padding or truncation policy is ever needed.
    planner: FftPlanner<f64>,
}

impl SpectralTransform {
    /// Create a transform with an empty plan cache.
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Forward transform of a real sequence: `N` unnormalized complex
    /// coefficients. Fails with [`Error::InvalidLength`] on empty input.
    pub fn forward(&mut self, samples: &[f64]) -> Result<Vec<Complex<f64>>> {
        let buffer: Vec<Complex<f64>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
        self.forward_complex(buffer)
    }

    /// Forward transform of a complex sequence, in place on the given buffer.
    pub fn forward_complex(&mut self, mut buffer: Vec<Complex<f64>>) -> Result<Vec<Complex<f64>>> {
        if buffer.is_empty() {
            return Err(Error::InvalidLength {
                len: 0,
                reason: "the transform needs at least one sample",
            });
        }
        let fft = self.planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);
        Ok(buffer)
    }

    /// Inverse transform including the `1/N` normalization, so that
    /// `inverse(forward(x)) == x` up to floating-point rounding.
    pub fn inverse(&mut self, spectrum: &[Complex<f64>]) -> Result<Vec<Complex<f64>>> {
        if spectrum.is_empty() {
            return Err(Error::InvalidLength {
                len: 0,
                reason: "the transform needs at least one coefficient",
            });
        }
        let mut buffer = spectrum.to_vec();
        let ifft = self.planner.plan_fft_inverse(buffer.len());
        ifft.process(&mut buffer);
        let scale = 1.0 / buffer.len() as f64;
        for value in &mut buffer {
            *value *= scale;
        }
        Ok(buffer)
    }

    /// Inverse transform of the spectrum of a real signal, keeping only the
    /// real parts.
    pub fn inverse_real(&mut self, spectrum: &[Complex<f64>]) -> Result<Vec<f64>> {
        Ok(self.inverse(spectrum)?.into_iter().map(|c| c.re).collect())
    }

    /// Squared-magnitude spectrum arranged redundantly around the center bin:
    /// `out[N/2 - k]` and `out[N/2 + k]` both hold `|X_k|^2`, with the DC
    /// power at the center. With `log_scale`, positive entries are rescaled
    /// to `ln sqrt(power)`.
    ///
    /// The output has the same length as the input, which keeps it directly
    /// mappable onto the same curve as the source sequence.
    pub fn power_spectrum(&mut self, samples: &[f64], log_scale: bool) -> Result<Vec<f64>> {
        let spectrum = self.forward(samples)?;
        let n = samples.len();
        let half = n / 2;
        let mut out = vec![0.0f64; n];

        let rescale = |power: f64| -> f64 {
            if log_scale && power > 0.0 {
                power.sqrt().ln()
            } else {
                power
            }
        };

        out[half] = rescale(spectrum[0].norm_sqr());
        for k in 1..=half {
            let value = rescale(spectrum[k].norm_sqr());
            out[half - k] = value;
            if half + k < n {
                out[half + k] = value;
            }
        }
        Ok(out)
    }

    /// Resample a real sequence to `target_len` points in the frequency
    /// domain, keeping the lowest-frequency coefficients.
    ///
    /// Conjugate symmetry is preserved (a shared Nyquist bin is averaged or
    /// split), so real input yields real output; amplitudes are corrected by
    /// `target_len / N` to account for the changed transform length.
    pub fn resample(&mut self, samples: &[f64], target_len: usize) -> Result<Vec<f64>> {
        if target_len == 0 {
            return Err(Error::InvalidLength {
                len: 0,
                reason: "cannot resample to an empty sequence",
            });
        }
        let n = samples.len();
        if target_len == n {
            return Ok(samples.to_vec());
        }

        let spectrum = self.forward(samples)?;
        let mut kept = vec![Complex::new(0.0, 0.0); target_len];
        let shared = n.min(target_len);
        let half = shared / 2;

        kept[0] = spectrum[0];
        for k in 1..shared.div_ceil(2) {
            kept[k] = spectrum[k];
            kept[target_len - k] = spectrum[n - k];
        }
        if shared % 2 == 0 {
            // The Nyquist bin of the shorter length maps to two conjugate
            // bins of the longer one; combining or splitting it keeps the
            // output real.
            if target_len < n {
                kept[half] = (spectrum[half] + spectrum[n - half]) * 0.5;
            } else {
                kept[half] = spectrum[half] * 0.5;
                kept[target_len - half] = spectrum[half] * 0.5;
            }
        }

        let scale = target_len as f64 / n as f64;
        Ok(self
            .inverse(&kept)?
            .into_iter()
            .map(|c| c.re * scale)
            .collect())
    }
}

impl Default for SpectralTransform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Largest absolute difference between two sequences.
    fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b)
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut transform = SpectralTransform::new();
        assert_eq!(
            transform.forward(&[]),
            Err(Error::InvalidLength {
                len: 0,
                reason: "the transform needs at least one sample",
            })
        );
        assert!(transform.inverse(&[]).is_err());
    }

    #[test]
    fn impulse_has_flat_spectrum() -> Result<()> {
        let mut transform = SpectralTransform::new();
        let mut impulse = vec![0.0; 8];
        impulse[0] = 1.0;
        let spectrum = transform.forward(&impulse)?;
        for coefficient in &spectrum {
            assert!((coefficient.re - 1.0).abs() < 1e-12);
            assert!(coefficient.im.abs() < 1e-12);
        }
        Ok(())
    }

    #[test]
    fn forward_is_unnormalized() -> Result<()> {
        // A constant sequence concentrates everything in the DC bin, which
        // must carry the raw sum (no 1/N on the forward pass).
        let mut transform = SpectralTransform::new();
        let spectrum = transform.forward(&[2.0; 4])?;
        assert!((spectrum[0].re - 8.0).abs() < 1e-12);
        for coefficient in &spectrum[1..] {
            assert!(coefficient.norm() < 1e-12);
        }
        Ok(())
    }

    #[test]
    fn round_trip_representative_inputs() -> Result<()> {
        let mut transform = SpectralTransform::new();

        let zeros = vec![0.0; 16];
        let mut impulse = vec![0.0; 16];
        impulse[3] = 1.0;
        // Fixed irregular values standing in for a random length-16 input.
        let irregular = vec![
            0.73, -1.12, 2.4, 0.0, -0.5, 3.3, -2.7, 1.05, 0.11, -0.91, 1.9, -3.3, 0.42, 2.2,
            -0.08, 0.66,
        ];

        for sequence in [&zeros, &impulse, &irregular] {
            let spectrum = transform.forward(sequence)?;
            let restored = transform.inverse_real(&spectrum)?;
            assert!(max_abs_diff(sequence, &restored) < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn round_trip_non_power_of_two() -> Result<()> {
        let mut transform = SpectralTransform::new();
        let sequence: Vec<f64> = (0..12).map(|i| (i as f64).sin()).collect();
        let spectrum = transform.forward(&sequence)?;
        let restored = transform.inverse_real(&spectrum)?;
        assert!(max_abs_diff(&sequence, &restored) < 1e-9);
        Ok(())
    }

    #[test]
    fn filter_zeroes_rejected_bins() -> Result<()> {
        let mut transform = SpectralTransform::new();
        let sequence: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let mut spectrum = transform.forward(&sequence)?;
        filter(&mut spectrum, |k| k == 0);
        for coefficient in &spectrum[1..] {
            assert_eq!(*coefficient, Complex::new(0.0, 0.0));
        }
        // Only the DC bin survives: the inverse is the mean everywhere.
        let restored = transform.inverse_real(&spectrum)?;
        for value in restored {
            assert!((value - 3.5).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn power_spectrum_is_centered_and_symmetric() -> Result<()> {
        let mut transform = SpectralTransform::new();
        let sequence: Vec<f64> = (0..16).map(|i| (i as f64 * 0.7).cos()).collect();
        let power = transform.power_spectrum(&sequence, false)?;
        assert_eq!(power.len(), 16);
        for k in 1..8 {
            assert!((power[8 - k] - power[8 + k]).abs() < 1e-9);
        }
        let spectrum = transform.forward(&sequence)?;
        assert!((power[8] - spectrum[0].norm_sqr()).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn resample_preserves_constant_and_mean() -> Result<()> {
        let mut transform = SpectralTransform::new();

        let constant = vec![1.5; 32];
        let shorter = transform.resample(&constant, 16)?;
        assert_eq!(shorter.len(), 16);
        for value in &shorter {
            assert!((value - 1.5).abs() < 1e-9);
        }

        // Resampling to a single point leaves exactly the mean.
        let ramp: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let one = transform.resample(&ramp, 1)?;
        assert!((one[0] - 3.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn resample_up_then_down_recovers_band_limited_input() -> Result<()> {
        let mut transform = SpectralTransform::new();
        let tone: Vec<f64> = (0..16)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 16.0).sin())
            .collect();
        let up = transform.resample(&tone, 32)?;
        let down = transform.resample(&up, 16)?;
        assert!(max_abs_diff(&tone, &down) < 1e-9);
        Ok(())
    }
}
