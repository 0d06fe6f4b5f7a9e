//! Orchestration: optional spectral preprocessing, then curve mapping.

use crate::{
    curve::HilbertCurve,
    error::{Error, Result},
    grid::Grid,
    mapper::{self, CurveMapper},
    spectral::{self, SpectralTransform},
};

/// Frequency-domain filter applied before mapping.
///
/// Predicates operate on the *folded* frequency index `min(k, N - k)`, so a
/// conjugate-mirrored bin pair is always kept or dropped together and real
/// input stays real after the inverse transform.
#[derive(Debug, Clone, Copy)]
pub enum SpectralFilter {
    /// Keep frequencies at or below the cutoff (smoothing).
    LowPass(usize),
    /// Keep frequencies at or above the cutoff.
    HighPass(usize),
    /// Keep frequencies inside the inclusive band.
    Band {
        /// Lowest folded frequency kept.
        low: usize,
        /// Highest folded frequency kept.
        high: usize,
    },
    /// Keep frequencies the predicate accepts.
    Custom(fn(usize) -> bool),
}

impl SpectralFilter {
    /// Whether bin `k` of a length-`n` spectrum survives the filter.
    fn keeps(self, k: usize, n: usize) -> bool {
        let folded = k.min(n - k);
        match self {
            Self::LowPass(cutoff) => folded <= cutoff,
            Self::HighPass(cutoff) => folded >= cutoff,
            Self::Band { low, high } => (low..=high).contains(&folded),
            Self::Custom(predicate) => predicate(folded),
        }
    }
}

/// What to do when the input sequence holds more values than the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Fail with [`Error::Overflow`]. The default: losing data requires an
    /// explicit opt-in.
    #[default]
    Reject,
    /// Keep evenly spaced samples, dropping the rest.
    Decimate,
    /// Low-pass resample in the frequency domain to exactly fit the grid.
    SpectralReduce,
}

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct PlotConfig {
    /// Curve order; the output grid is `2^order x 2^order`.
    pub order: u32,
    /// Optional frequency-domain filter applied before mapping.
    pub spectral_filter: Option<SpectralFilter>,
    /// How sequences longer than `4^order` are handled.
    pub overflow: OverflowPolicy,
}

impl PlotConfig {
    /// Configuration with no spectral filter and the reject overflow policy.
    pub fn new(order: u32) -> Self {
        Self {
            order,
            spectral_filter: None,
            overflow: OverflowPolicy::default(),
        }
    }
}

/// Runs sequences through the optional spectral stage and onto a grid.
///
/// Owns a [`SpectralTransform`] so FFT plans are reused across runs. A
/// pipeline has no other state: for a fixed configuration and input the
/// output grid is bit-reproducible, and independent pipelines may run on
/// separate threads with no synchronization.
#[derive(Default)]
pub struct PlotPipeline {
    /// Transform stage, with its plan cache.
    spectral: SpectralTransform,
}

impl PlotPipeline {
    /// Create a pipeline with an empty plan cache.
    pub fn new() -> Self {
        Self {
            spectral: SpectralTransform::new(),
        }
    }

    /// Produce the grid for `samples` under `config`.
    ///
    /// Stages: optional forward transform, filter and inverse; overflow
    /// handling per policy; placement along the curve (padding short
    /// sequences with zeros). No side effects beyond the returned grid.
    pub fn run(&mut self, config: &PlotConfig, samples: &[f64]) -> Result<Grid<f64>> {
        let curve = HilbertCurve::new(config.order)?;
        let curve_mapper = CurveMapper::new(curve);

        let mut sequence: Vec<f64>;
        if let Some(spectral_filter) = config.spectral_filter {
            let n = samples.len();
            let mut spectrum = self.spectral.forward(samples)?;
            spectral::filter(&mut spectrum, |k| spectral_filter.keeps(k, n));
            sequence = self.spectral.inverse_real(&spectrum)?;
        } else {
            sequence = samples.to_vec();
        }

        let capacity = curve.length();
        if sequence.len() as u64 > capacity {
            sequence = match config.overflow {
                OverflowPolicy::Reject => {
                    return Err(Error::Overflow {
                        order: curve.order(),
                        len: sequence.len(),
                        capacity,
                    });
                }
                OverflowPolicy::Decimate => mapper::decimate(&sequence, capacity as usize),
                OverflowPolicy::SpectralReduce => {
                    self.spectral.resample(&sequence, capacity as usize)?
                }
            };
        }

        curve_mapper.map_to_grid(&sequence)
    }
}
