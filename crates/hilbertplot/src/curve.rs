//! Bijective mapping between linear curve indices and 2D grid coordinates.
//!
//! The Hilbert curve of order `n` visits every cell of a `2^n x 2^n` grid
//! exactly once, and consecutive indices always land on grid-adjacent cells.
//! Both directions are computed with an iterative loop over bit pairs of the
//! index, carrying a rotation/reflection state, so there is no recursion and
//! no floating point anywhere: results are bit-for-bit reproducible.

use crate::error::{Error, Result};

/// Largest supported curve order. At order 31 the curve has `4^31 = 2^62`
/// cells, the most that fit a `u64` index with room for checked arithmetic.
pub const MAX_ORDER: u32 = 31;

/// A cell position on the `2^n x 2^n` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column, in `[0, 2^order)`.
    pub x: u32,
    /// Row, in `[0, 2^order)`.
    pub y: u32,
}

impl Coord {
    /// Construct a coordinate pair.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance to `other` (maximum per-axis difference).
    ///
    /// Consecutive curve indices map to coordinates at Chebyshev distance 1.
    pub fn chebyshev(&self, other: &Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }

    /// Manhattan distance to `other` (sum of per-axis differences).
    pub fn manhattan(&self, other: &Self) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }
}

impl From<(u32, u32)> for Coord {
    fn from(pair: (u32, u32)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

/// Rotate the 2-bit quadrant label used by the traversal state machine.
#[inline]
fn rot2(label: u64) -> u64 {
    match label & 3 {
        0 => 0,
        1 => 2,
        2 => 1,
        _ => 3,
    }
}

/// Gray code limited to the low two bits.
#[inline]
fn gray2(word: u64) -> u64 {
    (word ^ (word >> 1)) & 3
}

/// A 2D Hilbert curve of a fixed order.
///
/// Construction validates the order once; `point` and `index` then form an
/// exact bijection over `[0, 4^order)` and `[0, 2^order)^2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HilbertCurve {
    /// The order of the curve. The higher this is, the more cells the curve
    /// packs into the unit square.
    order: u32,
}

impl HilbertCurve {
    /// Construct a curve of the given `order`.
    ///
    /// Fails with [`Error::UnsupportedOrder`] when `order` exceeds
    /// [`MAX_ORDER`].
    pub fn new(order: u32) -> Result<Self> {
        if order > MAX_ORDER {
            return Err(Error::UnsupportedOrder {
                order,
                max: MAX_ORDER,
            });
        }
        Ok(Self { order })
    }

    /// The order of the curve.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Side length of the grid the curve fills, `2^order`.
    pub fn side(&self) -> u32 {
        1u32 << self.order
    }

    /// Total number of cells on the curve, `4^order`.
    pub fn length(&self) -> u64 {
        1u64 << (2 * self.order)
    }

    /// Map a curve `index` to its grid coordinate.
    ///
    /// Fails with a domain error when `index` is outside `[0, 4^order)`.
    pub fn point(&self, index: u64) -> Result<Coord> {
        if index >= self.length() {
            return Err(Error::IndexOutOfRange {
                order: self.order,
                index,
                capacity: self.length(),
            });
        }
        Ok(self.point_unchecked(index))
    }

    /// The quadrant walk behind [`Self::point`]; callers guarantee
    /// `index < 4^order`.
    fn point_unchecked(&self, index: u64) -> Coord {
        let width = 2 * self.order;
        let mut entry = 0u64;
        let mut direction = 0u8;
        let mut x = 0u32;
        let mut y = 0u32;
        for step in 0..self.order {
            // Two index bits select the quadrant at this level.
            let word = (index >> (width - step * 2 - 2)) & 3;

            let label = match direction {
                0 => rot2(gray2(word)) ^ entry,
                _ => gray2(word) ^ entry,
            };

            let bit = 1u32 << (self.order - step - 1);
            if label & 2 != 0 {
                x |= bit;
            }
            if label & 1 != 0 {
                y |= bit;
            }

            if word == 3 {
                entry = 3 - entry;
            }
            if word == 0 || word == 3 {
                direction ^= 1;
            }
        }
        Coord::new(x, y)
    }

    /// Map a grid coordinate to its curve index.
    ///
    /// Fails with a domain error when either component of `coord` is outside
    /// `[0, 2^order)`.
    pub fn index(&self, coord: Coord) -> Result<u64> {
        let side = self.side();
        if coord.x >= side || coord.y >= side {
            return Err(Error::CoordOutOfRange {
                order: self.order,
                x: coord.x,
                y: coord.y,
                side,
            });
        }

        let mut index = 0u64;
        let mut entry = 0u64;
        let mut direction = 0u8;
        for step in 0..self.order {
            let offset = self.order - step - 1;
            let y_bit = u64::from((coord.y >> offset) & 1);
            let x_bit = u64::from((coord.x >> offset) & 1);
            let label = (y_bit | (x_bit << 1)) ^ entry;
            let word = match direction {
                0 => gray2(rot2(label)),
                _ => gray2(label),
            };
            if word == 3 {
                entry = 3 - entry;
            }
            index = (index << 2) | word;
            if word == 0 || word == 3 {
                direction ^= 1;
            }
        }
        Ok(index)
    }

    /// Iterate the curve in traversal order, yielding every coordinate once.
    pub fn traverse(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length()).map(|i| self.point_unchecked(i))
    }
}
