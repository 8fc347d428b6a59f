//! Types that make up the field: coordinates, directions between cells, and the grid
//! of cells itself. Nothing in here knows how ships are placed.

pub use self::{
    coordinate::Coordinate,
    dimensions::{Neighbors, SquareDimensions, MIN_RANDOM_SIZE, RANDOM_SIZE_SPREAD},
    direction::Direction,
    errors::GridError,
    grid::{Cell, Grid},
};

mod coordinate;
mod dimensions;
mod direction;
mod errors;
mod grid;
