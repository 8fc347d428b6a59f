//! Dimensions of the square field: bounds, linear indexing and neighbor stepping.
use std::borrow::Borrow;

#[cfg(feature = "rng_gen")]
use once_cell::sync::Lazy;
#[cfg(feature = "rng_gen")]
use rand::{distributions::Uniform, Rng};

use crate::board::{Coordinate, Direction, GridError};

/// Smallest field size picked by [`SquareDimensions::random`].
pub const MIN_RANDOM_SIZE: usize = 10;

/// Number of distinct sizes [`SquareDimensions::random`] picks from, starting at
/// [`MIN_RANDOM_SIZE`].
pub const RANDOM_SIZE_SPREAD: usize = 10;

/// Range of field sizes used when the size is left up to chance.
#[cfg(feature = "rng_gen")]
static SIZE_RANGE: Lazy<Uniform<usize>> =
    Lazy::new(|| Uniform::new(MIN_RANDOM_SIZE, MIN_RANDOM_SIZE + RANDOM_SIZE_SPREAD));

/// Dimensions of an `N x N` field.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SquareDimensions {
    size: usize,
}

impl SquareDimensions {
    /// Create new [`SquareDimensions`] with the given side length.
    /// Panics if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`SquareDimensions`] with the given side length.
    /// Returns an error if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn try_new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            Err(GridError::ZeroSize)
        } else {
            size.checked_mul(size)
                .map(|_| Self { size })
                .ok_or(GridError::TooLarge(size))
        }
    }

    /// Pick dimensions with a random side length in
    /// `[MIN_RANDOM_SIZE, MIN_RANDOM_SIZE + RANDOM_SIZE_SPREAD)`.
    #[cfg(feature = "rng_gen")]
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            size: rng.sample(&*SIZE_RANGE),
        }
    }

    /// Side length of the field.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells in the field. Used to allocate storage for the grid.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Returns true if the coordinate lies inside the field.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Panics if the coordinate is out of range.
    pub fn linearize(&self, coord: &Coordinate) -> usize {
        match self.try_linearize(coord) {
            Some(v) => v,
            None => panic!("{:?} is out of bounds for {:?}", coord, self),
        }
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of range.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.x * self.size + coord.y)
    }

    /// Get back a coordinate from a linear index. Panics if `idx >= total_size()`.
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(idx < self.total_size(), "index {} out of bounds", idx);
        Coordinate::new(idx / self.size, idx % self.size)
    }

    /// Take one step from `coord` in the given direction. Returns `None` if the step
    /// would leave the field; the field does not wrap.
    pub fn step(&self, coord: Coordinate, dir: Direction) -> Option<Coordinate> {
        let (dx, dy) = dir.delta();
        let x = offset(coord.x, dx)?;
        let y = offset(coord.y, dy)?;
        self.check_bounds(Coordinate::new(x, y))
    }

    /// Iterate the in-bounds neighbors of the given coordinate, together with the
    /// direction leading to each of them.
    pub fn neighbors(&self, coord: Coordinate) -> Neighbors {
        Neighbors::start(self, coord)
    }

    /// Get an iterator over rows of the field. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |x| (0..size).map(move |y| Coordinate { x, y }))
    }

    /// Check if the given [`Coordinate`] is in bounds. If so, return it, otherwise
    /// return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.x < self.size && c.y < self.size {
            Some(coord)
        } else {
            None
        }
    }
}

/// Apply a signed unit offset to an index, failing on underflow.
#[inline]
fn offset(value: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        value.checked_sub(delta.unsigned_abs())
    } else {
        value.checked_add(delta as usize)
    }
}

/// Iterator over the in-bounds neighbors of a coordinate, in [`Direction::ALL`] order.
pub struct Neighbors {
    dim: SquareDimensions,
    coord: Coordinate,
    next_dir: usize,
}

impl Neighbors {
    fn start(dim: &SquareDimensions, coord: Coordinate) -> Self {
        Self {
            dim: *dim,
            coord,
            // Out of bounds coordinates have no neighbors, skip directly to the end.
            next_dir: if dim.contains(&coord) {
                0
            } else {
                Direction::ALL.len()
            },
        }
    }
}

impl Iterator for Neighbors {
    type Item = (Direction, Coordinate);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&dir) = Direction::ALL.get(self.next_dir) {
            self.next_dir += 1;
            if let Some(neighbor) = self.dim.step(self.coord, dir) {
                return Some((dir, neighbor));
            }
        }
        None
    }
}
