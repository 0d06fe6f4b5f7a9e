//! A mapped grid bundled with its curve and value range.
//!
//! `HilbertPlot` is the object handed across the renderer boundary: it keeps
//! the curve, the filled grid and the observed value range together so an
//! external renderer can ask for raw or `[0, 1]`-normalized intensities
//! without re-deriving anything. No color mapping happens here.

use crate::{
    curve::{HilbertCurve, MAX_ORDER},
    error::Result,
    grid::Grid,
    mapper::CurveMapper,
};

/// A data sequence placed on a Hilbert curve, with its value range.
#[derive(Debug, Clone, PartialEq)]
pub struct HilbertPlot {
    /// The curve the data was placed along.
    curve: HilbertCurve,
    /// The filled grid; unset cells hold the zero sentinel.
    grid: Grid<f64>,
    /// Smallest cell value.
    min: f64,
    /// Largest cell value.
    max: f64,
}

/// The curve order whose cell count loses the least data for a sequence of
/// `len` values: padding cost below, truncation cost above, whichever is
/// smaller.
pub fn best_order(len: usize) -> u32 {
    let mut order = 0u32;
    while order < MAX_ORDER && (1u64 << (2 * order)) < len as u64 {
        order += 1;
    }
    if order == 0 {
        return 0;
    }
    // Lengths past the largest grid leave no padding option, only truncation.
    let padding = (1u64 << (2 * order)).saturating_sub(len as u64);
    let truncation = len as u64 - (1u64 << (2 * (order - 1)));
    if truncation < padding { order - 1 } else { order }
}

impl HilbertPlot {
    /// Place `data` on a curve of the given `order`.
    ///
    /// Shorter sequences are padded with zeros; longer ones fail with an
    /// overflow error, as in [`CurveMapper::map_to_grid`].
    pub fn new(order: u32, data: &[f64]) -> Result<Self> {
        let curve = HilbertCurve::new(order)?;
        let grid = CurveMapper::new(curve).map_to_grid(data)?;
        let (min, max) = value_range(grid.cells());
        Ok(Self {
            curve,
            grid,
            min,
            max,
        })
    }

    /// Place `data` on the curve chosen by [`best_order`], truncating the
    /// excess when the chosen grid is smaller than the sequence.
    pub fn from_sequence(data: &[f64]) -> Result<Self> {
        let order = best_order(data.len());
        let capacity = 1usize << (2 * order);
        Self::new(order, &data[..data.len().min(capacity)])
    }

    /// The curve the plot is built on.
    pub fn curve(&self) -> &HilbertCurve {
        &self.curve
    }

    /// The underlying grid, read-only.
    pub fn grid(&self) -> &Grid<f64> {
        &self.grid
    }

    /// Smallest value on the grid.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value on the grid.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The curve index of cell `(x, y)`.
    pub fn index_of(&self, x: u32, y: u32) -> Result<u64> {
        self.curve.index((x, y).into())
    }

    /// The value at curve position `index`.
    pub fn value_at(&self, index: u64) -> Result<f64> {
        let coord = self.curve.point(index)?;
        Ok(self.grid[coord])
    }

    /// The value at cell `(x, y)`.
    pub fn value_at_cell(&self, x: u32, y: u32) -> Result<f64> {
        self.grid.value_at(x, y).copied()
    }

    /// The value at curve position `index`, scaled into `[0, 1]` by the
    /// grid's value range. A flat grid normalizes to 0.
    pub fn value_normalized_at(&self, index: u64) -> Result<f64> {
        Ok(self.normalize(self.value_at(index)?))
    }

    /// Replace the value at curve position `index`, keeping min/max current.
    pub fn replace_value_at(&mut self, index: u64, value: f64) -> Result<()> {
        let coord = self.curve.point(index)?;
        self.grid[coord] = value;
        (self.min, self.max) = value_range(self.grid.cells());
        Ok(())
    }

    /// A grid of `[0, 1]` intensities ready for an external renderer to
    /// colorize; this crate stops at intensities.
    pub fn intensity_grid(&self) -> Grid<f64> {
        let cells = self.grid.cells().iter().map(|&v| self.normalize(v)).collect();
        Grid::from_raw(self.grid.side(), cells)
    }

    /// Scale `value` into `[0, 1]` by the stored range.
    fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min {
            0.0
        } else {
            (value - self.min) / (self.max - self.min)
        }
    }
}

/// Minimum and maximum of `values`, `(0, 0)` when empty.
fn value_range(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    values.iter().fold((f64::MAX, f64::MIN), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}
