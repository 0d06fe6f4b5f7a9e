//! Dense square grid produced by mapping a sequence onto a curve.

use std::ops::{Index, IndexMut};

use crate::{
    curve::Coord,
    error::{Error, Result},
};

/// A dense row-major `side x side` container of samples.
///
/// A grid is the sole output artifact of a pipeline invocation. It is owned
/// by whoever produced it and handed to an external renderer read-only; the
/// crate performs no pixel or color work on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    /// Side length of the square grid.
    side: u32,
    /// Cell storage, row-major: cell `(x, y)` lives at `y * side + x`.
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(side: u32, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            side,
            cells: vec![value; (side as usize) * (side as usize)],
        }
    }

    /// Create a grid from a row-major cell vector; callers guarantee
    /// `cells.len() == side * side`.
    pub(crate) fn from_raw(side: u32, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), (side as usize) * (side as usize));
        Self { side, cells }
    }

    /// Side length of the grid.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Number of cells, `side * side`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells (side 0).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat row-major offset of `(x, y)`, when in bounds.
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.side && y < self.side {
            Some((y as usize) * (self.side as usize) + (x as usize))
        } else {
            None
        }
    }

    /// The cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `(x, y)`, or `None` when out of bounds.
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut T> {
        self.offset(x, y).map(move |i| &mut self.cells[i])
    }

    /// The cell at `(x, y)`, failing with a domain error when out of bounds.
    pub fn value_at(&self, x: u32, y: u32) -> Result<&T> {
        self.get(x, y).ok_or(Error::CoordOutOfRange {
            order: self.side.trailing_zeros(),
            x,
            y,
            side: self.side,
        })
    }

    /// Replace the cell at `(x, y)`, failing when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        let side = self.side;
        match self.get_mut(x, y) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Error::CoordOutOfRange {
                order: side.trailing_zeros(),
                x,
                y,
                side,
            }),
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Consume the grid, returning the row-major cell vector.
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        self.get(coord.x, coord.y).expect("coordinate out of bounds")
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        self.get_mut(coord.x, coord.y)
            .expect("coordinate out of bounds")
    }
}
