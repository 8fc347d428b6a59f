//! Defines the field that ships are placed on.

use std::{borrow::Borrow, ops::Index};

use enumflags2::BitFlags;

use crate::board::{Coordinate, Direction, GridError, SquareDimensions};

/// State of a single cell in the field.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    /// No ship segment here.
    Empty,
    /// A segment of a committed ship.
    Occupied,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// Square field of cells. Cells only ever go from [`Cell::Empty`] to
/// [`Cell::Occupied`]; nothing is ever removed.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Dimensions of this field.
    dim: SquareDimensions,
    /// Cells that make up this field.
    cells: Box<[Cell]>,
}

impl Grid {
    /// Create an empty field with the given side length. Panics if `size` is 0.
    pub fn new(size: usize) -> Self {
        Self::with_dimensions(SquareDimensions::new(size))
    }

    /// Create an empty field with the given side length.
    pub fn try_new(size: usize) -> Result<Self, GridError> {
        SquareDimensions::try_new(size).map(Self::with_dimensions)
    }

    /// Create an empty field with the given [`SquareDimensions`].
    pub fn with_dimensions(dim: SquareDimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Cell::default()).collect();
        Self { dim, cells }
    }

    /// Side length of the field.
    pub fn size(&self) -> usize {
        self.dim.size()
    }

    /// Get the [`SquareDimensions`] of this field.
    pub fn dimensions(&self) -> &SquareDimensions {
        &self.dim
    }

    /// Whether the cell holds a ship segment. The coordinate must be in bounds.
    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self[coord] == Cell::Occupied
    }

    /// Mark the cell as holding a ship segment. The coordinate must be in bounds and
    /// the cell must still be empty.
    pub fn occupy(&mut self, coord: Coordinate) {
        let idx = self.dim.linearize(&coord);
        debug_assert_eq!(self.cells[idx], Cell::Empty, "{} occupied twice", coord);
        self.cells[idx] = Cell::Occupied;
    }

    /// Directions from `coord` that lead to an occupied, in-bounds neighbor.
    pub fn occupied_neighbors(&self, coord: Coordinate) -> BitFlags<Direction> {
        let mut occupied = BitFlags::empty();
        for (dir, neighbor) in self.dim.neighbors(coord) {
            if self.is_occupied(neighbor) {
                occupied.insert(dir);
            }
        }
        occupied
    }

    /// Iterate the coordinates of every occupied cell.
    pub fn occupied(&self) -> impl '_ + Iterator<Item = Coordinate> {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Occupied)
            .map(move |(idx, _)| dim.un_linearize(idx))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Occupied).count()
    }

    /// Get an iterator over the rows of the field. The iterator's item is another
    /// iterator that iterates over the cells of a single row.
    pub fn iter_rows(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Cell>> {
        self.dim
            .iter_coordinates()
            .map(move |row| row.map(move |coord| self[coord]))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        let idx = self.dim.linearize(coord.borrow());
        &self.cells[idx]
    }
}
