//! Random placement of battleships on a square field, one ship at a time.
//!
//! Ships are straight lines (horizontal, vertical or diagonal) of one to four cells and
//! never touch each other, not even at the corners.
//!
//! ```
//! # #[cfg(feature = "rng_gen")] {
//! use battlefield::{board::Grid, placement::{Placer, RngSampler}, ships::ShipKind};
//!
//! let mut grid = Grid::new(10);
//! let mut sampler = RngSampler::new(rand::thread_rng());
//! let ship = Placer::default()
//!     .place_ship(&mut grid, ShipKind::Cruiser, &mut sampler)
//!     .expect("an empty field has room for a cruiser");
//! assert_eq!(ship.cells().len(), 3);
//! # }
//! ```

pub mod board;
pub mod placement;
pub mod render;
pub mod ships;
