//! Hilbert space-filling curves and Hilbert plots of linear data.
//!
//! A Hilbert plot projects a long 1D sequence (a byte stream, a time series,
//! a spectrum) onto a 2D grid by walking a Hilbert curve, so values that are
//! close in the sequence end up close on the grid. This crate provides:
//!
//! - [`curve::HilbertCurve`] — the exact bijection between curve indices and
//!   grid coordinates, for any order up to [`curve::MAX_ORDER`].
//! - [`spectral::SpectralTransform`] — FFT preprocessing (filtering,
//!   power spectra, frequency-domain resampling) with a pinned
//!   unnormalized-forward / `1/N`-inverse convention.
//! - [`mapper::CurveMapper`] — placement of a sequence onto a dense
//!   [`grid::Grid`], with explicit handling of length mismatches.
//! - [`pipeline::PlotPipeline`] — the orchestration of the above into a
//!   single deterministic `run`.
//! - [`plot::HilbertPlot`] — a finished plot with value-range bookkeeping,
//!   ready for an external renderer.
//!
//! Rendering, color mapping and file encoding are deliberately out of scope;
//! the hand-off artifact is a [`grid::Grid`] of plain values.
//!
//! # Example
//!
//! ```
//! use hilbertplot::{pipeline::{PlotConfig, PlotPipeline}, error::Result};
//!
//! fn main() -> Result<()> {
//!     let samples: Vec<f64> = (0..256).map(|i| (f64::from(i) * 0.1).sin()).collect();
//!     let mut pipeline = PlotPipeline::new();
//!     let grid = pipeline.run(&PlotConfig::new(4), &samples)?;
//!     assert_eq!(grid.side(), 16);
//!     Ok(())
//! }
//! ```

/// Bijective curve index ↔ grid coordinate mapping.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// Dense square grid container.
pub mod grid;
/// Sequence-to-grid projection along a curve.
pub mod mapper;
/// Pipeline orchestration of transform and mapping stages.
pub mod pipeline;
/// Finished plots with value-range bookkeeping.
pub mod plot;
/// Discrete Fourier transform wrapper.
pub mod spectral;
/// Sequence statistics and smoothing.
pub mod stats;

pub use crate::{
    curve::{Coord, HilbertCurve},
    error::{Error, Result},
    grid::Grid,
    mapper::CurveMapper,
    pipeline::{OverflowPolicy, PlotConfig, PlotPipeline, SpectralFilter},
    plot::HilbertPlot,
    spectral::SpectralTransform,
};
