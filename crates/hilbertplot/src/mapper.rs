//! Projection of 1D sample sequences onto 2D grids along a Hilbert curve.

use crate::{
    curve::HilbertCurve,
    error::{Error, Result},
    grid::Grid,
};

/// Pick `target_len` evenly spaced samples from `sequence`.
///
/// Uses pure integer scaling (`source = i * len / target_len`) so the choice
/// of surviving samples is deterministic and free of float rounding. Returns
/// the sequence unchanged when it is already short enough.
pub fn decimate<T: Clone>(sequence: &[T], target_len: usize) -> Vec<T> {
    if sequence.len() <= target_len {
        return sequence.to_vec();
    }
    let len = sequence.len() as u128;
    (0..target_len)
        .map(|i| sequence[((i as u128) * len / (target_len as u128)) as usize].clone())
        .collect()
}

/// Places sequence values on the grid cells a curve traversal visits.
///
/// Cell `(x, y)` of the produced grid holds the value at the curve index `i`
/// with `point(i) == (x, y)`, so values adjacent in the sequence stay
/// adjacent on the grid.
#[derive(Debug, Clone, Copy)]
pub struct CurveMapper {
    /// The curve defining the traversal order.
    curve: HilbertCurve,
}

impl CurveMapper {
    /// Create a mapper over `curve`.
    pub fn new(curve: HilbertCurve) -> Self {
        Self { curve }
    }

    /// The curve this mapper follows.
    pub fn curve(&self) -> &HilbertCurve {
        &self.curve
    }

    /// Map `sequence` onto a `2^order x 2^order` grid.
    ///
    /// Sequences shorter than the `4^order` cell count leave the remaining
    /// cells at the sentinel `T::default()` (zero for numeric samples).
    /// Longer sequences fail with [`Error::Overflow`]; reducing them is an
    /// explicit caller decision, never an implicit default (see
    /// [`crate::pipeline::OverflowPolicy`]).
    pub fn map_to_grid<T>(&self, sequence: &[T]) -> Result<Grid<T>>
    where
        T: Clone + Default,
    {
        let capacity = self.curve.length();
        if sequence.len() as u64 > capacity {
            return Err(Error::Overflow {
                order: self.curve.order(),
                len: sequence.len(),
                capacity,
            });
        }

        let mut grid = Grid::filled(self.curve.side(), T::default());
        for (value, coord) in sequence.iter().zip(self.curve.traverse()) {
            grid[coord] = value.clone();
        }
        Ok(grid)
    }

    /// Read a grid back into a sequence in curve order.
    ///
    /// Exact inverse of the direct-placement case of [`Self::map_to_grid`]:
    /// mapping a `4^order`-element sequence to a grid and back returns the
    /// original sequence. Fails with [`Error::SizeMismatch`] when the grid
    /// side does not match the curve.
    pub fn map_from_grid<T: Clone>(&self, grid: &Grid<T>) -> Result<Vec<T>> {
        if grid.side() != self.curve.side() {
            return Err(Error::SizeMismatch {
                expected: self.curve.side() as usize,
                got: grid.side() as usize,
            });
        }
        Ok(self.curve.traverse().map(|coord| grid[coord].clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Coord;

    #[test]
    fn direct_placement_round_trip() -> Result<()> {
        let mapper = CurveMapper::new(HilbertCurve::new(2)?);
        let sequence: Vec<f64> = (0..16).map(f64::from).collect();
        let grid = mapper.map_to_grid(&sequence)?;
        assert_eq!(mapper.map_from_grid(&grid)?, sequence);
        Ok(())
    }

    #[test]
    fn placement_follows_the_curve() -> Result<()> {
        let curve = HilbertCurve::new(2)?;
        let mapper = CurveMapper::new(curve);
        let sequence: Vec<f64> = (0..16).map(f64::from).collect();
        let grid = mapper.map_to_grid(&sequence)?;

        // Index 5 sits where the quadrant walk puts it, adjacent to index 6.
        let fifth = curve.point(5)?;
        assert_eq!(fifth, Coord::new(3, 0));
        assert_eq!(grid[fifth], 5.0);
        let sixth = curve.point(6)?;
        assert_eq!(fifth.manhattan(&sixth), 1);
        assert_eq!(grid[sixth], 6.0);
        Ok(())
    }

    #[test]
    fn short_sequences_pad_with_the_sentinel() -> Result<()> {
        let curve = HilbertCurve::new(2)?;
        let mapper = CurveMapper::new(curve);
        let grid = mapper.map_to_grid(&[1.0, 2.0, 3.0])?;

        let mut filled = 0;
        for i in 0..curve.length() {
            let value = grid[curve.point(i)?];
            if i < 3 {
                assert_eq!(value, (i + 1) as f64);
                filled += 1;
            } else {
                assert_eq!(value, 0.0, "unset cells hold the default sentinel");
            }
        }
        assert_eq!(filled, 3);
        Ok(())
    }

    #[test]
    fn long_sequences_are_rejected() -> Result<()> {
        let mapper = CurveMapper::new(HilbertCurve::new(1)?);
        let err = mapper.map_to_grid(&[0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            Error::Overflow {
                order: 1,
                len: 5,
                capacity: 4
            }
        );
        Ok(())
    }

    #[test]
    fn grid_side_must_match_curve() -> Result<()> {
        let mapper = CurveMapper::new(HilbertCurve::new(2)?);
        let other = Grid::filled(8, 0.0f64);
        assert_eq!(
            mapper.map_from_grid(&other),
            Err(Error::SizeMismatch {
                expected: 4,
                got: 8
            })
        );
        Ok(())
    }

    #[test]
    fn decimation_keeps_endpoints_spacing() {
        let sequence: Vec<u32> = (0..10).collect();
        assert_eq!(decimate(&sequence, 5), vec![0, 2, 4, 6, 8]);
        assert_eq!(decimate(&sequence, 10), sequence);
        assert_eq!(decimate(&sequence, 20), sequence);
        assert_eq!(decimate(&sequence, 1), vec![0]);
    }
}
