//! Random placement of ships that never touch each other, not even diagonally.
//!
//! A placement attempt starts from a random origin and grows the ship one cell at a
//! time. The second cell fixes the growth axis; every later cell continues along that
//! axis. Every accepted cell must be empty and have no occupied neighbor, except for the
//! neighbor it was grown from. Attempts are retried from fresh origins until one
//! succeeds or the retry budget runs out.

use log::{debug, trace};
#[cfg(feature = "rng_gen")]
use rand::{seq::SliceRandom, Rng};

use crate::{
    board::{Coordinate, Direction, Grid},
    ships::{Ship, ShipKind},
};

pub use self::errors::PlaceError;

mod errors;

/// Retry budget used by [`Placer::default`].
pub const DEFAULT_ATTEMPTS: usize = 200;

/// Source of the random choices made while placing ships.
pub trait Sampler {
    /// Pick an origin cell in a field with the given side length. Should be uniformly
    /// distributed over `[0, size)` on both axes.
    fn origin(&mut self, size: usize) -> Coordinate;

    /// Put the candidate growth directions for one attempt in the order they should be
    /// tried.
    fn order(&mut self, directions: &mut [Direction]);
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn origin(&mut self, size: usize) -> Coordinate {
        (**self).origin(size)
    }

    fn order(&mut self, directions: &mut [Direction]) {
        (**self).order(directions)
    }
}

/// [`Sampler`] backed by a random number generator. Candidate directions are shuffled
/// for every attempt.
#[cfg(feature = "rng_gen")]
#[derive(Debug)]
pub struct RngSampler<R>(R);

#[cfg(feature = "rng_gen")]
impl<R: Rng> RngSampler<R> {
    /// Wrap the given generator.
    pub fn new(rng: R) -> Self {
        RngSampler(rng)
    }
}

#[cfg(feature = "rng_gen")]
impl<R: Rng> Sampler for RngSampler<R> {
    fn origin(&mut self, size: usize) -> Coordinate {
        Coordinate::new(self.0.gen_range(0, size), self.0.gen_range(0, size))
    }

    fn order(&mut self, directions: &mut [Direction]) {
        directions.shuffle(&mut self.0);
    }
}

/// Places ships on a [`Grid`] with a bounded number of attempts per ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placer {
    attempts: usize,
}

impl Placer {
    /// Create a [`Placer`] that makes at most `attempts` attempts per ship. Panics if
    /// `attempts` is 0.
    pub fn new(attempts: usize) -> Self {
        assert!(attempts > 0, "retry budget must be nonzero");
        Self { attempts }
    }

    /// The retry budget per ship.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Find a position for a ship of the given kind and commit it to the grid. Each
    /// attempt samples a new origin. If every attempt fails, the grid is left untouched
    /// and [`PlaceError::Exhausted`] is returned.
    pub fn place_ship<S: Sampler + ?Sized>(
        &self,
        grid: &mut Grid,
        kind: ShipKind,
        sampler: &mut S,
    ) -> Result<Ship, PlaceError> {
        for attempt in 1..=self.attempts {
            let origin = sampler.origin(grid.size());
            match try_place_at(grid, origin, kind, sampler) {
                Some(ship) => {
                    commit(grid, &ship);
                    debug!("placed {} on attempt {}", ship, attempt);
                    return Ok(ship);
                }
                None => trace!("attempt {} for {} from {} failed", attempt, kind, origin),
            }
        }
        debug!(
            "giving up on {} after {} attempts on a {}x{} field",
            kind,
            self.attempts,
            grid.size(),
            grid.size()
        );
        Err(PlaceError::Exhausted {
            kind,
            attempts: self.attempts,
        })
    }
}

impl Default for Placer {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPTS)
    }
}

/// Make a single attempt to grow a ship of the given kind from `origin`. Never
/// modifies the grid; returns the complete ship if one fits, `None` otherwise.
pub fn try_place_at<S: Sampler + ?Sized>(
    grid: &Grid,
    origin: Coordinate,
    kind: ShipKind,
    sampler: &mut S,
) -> Option<Ship> {
    if !grid.dimensions().contains(&origin) || !is_isolated(grid, origin, None) {
        return None;
    }
    let mut ship = Ship::seed(kind, origin);
    if ship.is_complete() {
        return Some(ship);
    }

    let (axis, second) = discover_axis(grid, origin, sampler)?;
    debug!("{} from {} grows {:?}", kind, origin, axis);
    ship.extend(axis, second);

    while !ship.is_complete() {
        // Straight on only: no wrapping around the edge and no turning.
        let next = grid.dimensions().step(ship.last(), axis)?;
        if !is_isolated(grid, next, Some(axis.opposite())) {
            return None;
        }
        ship.extend(axis, next);
    }
    Some(ship)
}

/// Find the first neighbor of the seed, in the order chosen by the sampler, where the
/// second cell of a ship could go.
fn discover_axis<S: Sampler + ?Sized>(
    grid: &Grid,
    seed: Coordinate,
    sampler: &mut S,
) -> Option<(Direction, Coordinate)> {
    let mut candidates = Direction::ALL;
    sampler.order(&mut candidates);
    candidates
        .iter()
        .filter_map(|&dir| grid.dimensions().step(seed, dir).map(|next| (dir, next)))
        .find(|&(dir, next)| is_isolated(grid, next, Some(dir.opposite())))
}

/// Isolation check: `coord` must be empty and all of its in-bounds neighbors must be
/// empty, except for the neighbor in direction `skip`, which is the previous cell of
/// the ship being grown.
pub fn is_isolated(grid: &Grid, coord: Coordinate, skip: Option<Direction>) -> bool {
    if grid.is_occupied(coord) {
        return false;
    }
    let mut occupied = grid.occupied_neighbors(coord);
    if let Some(skip) = skip {
        occupied.remove(skip);
    }
    occupied.is_empty()
}

/// Write every cell of a complete ship into the grid.
fn commit(grid: &mut Grid, ship: &Ship) {
    debug_assert!(ship.is_valid(), "committing malformed ship {}", ship);
    for &coord in ship.cells() {
        grid.occupy(coord);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sampler that always starts from the same origin and tries directions in a
    /// fixed order.
    struct Fixed {
        origin: Coordinate,
        order: Vec<Direction>,
    }

    impl Fixed {
        fn new(x: usize, y: usize, order: &[Direction]) -> Self {
            Self {
                origin: Coordinate::new(x, y),
                order: order.to_vec(),
            }
        }
    }

    impl Sampler for Fixed {
        fn origin(&mut self, _size: usize) -> Coordinate {
            self.origin
        }

        fn order(&mut self, directions: &mut [Direction]) {
            let order = &self.order;
            directions.sort_by_key(|dir| {
                order
                    .iter()
                    .position(|o| o == dir)
                    .unwrap_or(order.len())
            });
        }
    }

    #[test]
    fn destroyer_from_origin_grows_east() {
        let mut grid = Grid::new(5);
        let mut sampler = Fixed::new(0, 0, &Direction::ALL);
        let ship = Placer::default()
            .place_ship(&mut grid, ShipKind::Destroyer, &mut sampler)
            .unwrap();
        assert_eq!(ship.cells(), &[Coordinate::new(0, 0), Coordinate::new(1, 0)]);
        assert_eq!(ship.axis(), Some(Direction::East));
        assert_eq!(
            grid.occupied().collect::<Vec<_>>(),
            vec![Coordinate::new(0, 0), Coordinate::new(1, 0)]
        );
    }

    #[test]
    fn out_of_bounds_candidates_are_skipped() {
        let grid = Grid::new(4);
        let mut sampler = Fixed::new(
            0,
            0,
            &[Direction::West, Direction::South, Direction::North],
        );
        let ship = try_place_at(&grid, Coordinate::new(0, 0), ShipKind::Carrier, &mut sampler)
            .unwrap();
        assert_eq!(ship.axis(), Some(Direction::North));
        assert_eq!(ship.last(), Coordinate::new(0, 3));
    }

    #[test]
    fn extension_does_not_turn_at_the_edge() {
        let grid = Grid::new(4);
        // East is tried first and fits two cells but not three.
        let mut sampler = Fixed::new(0, 0, &[Direction::East, Direction::North]);
        assert_eq!(
            try_place_at(&grid, Coordinate::new(2, 0), ShipKind::Cruiser, &mut sampler),
            None
        );
    }

    #[test]
    fn seed_next_to_a_ship_fails() {
        let mut grid = Grid::new(5);
        grid.occupy(Coordinate::new(2, 2));
        let mut sampler = Fixed::new(0, 0, &Direction::ALL);
        for (_, neighbor) in grid.dimensions().neighbors(Coordinate::new(2, 2)) {
            assert_eq!(
                try_place_at(&grid, neighbor, ShipKind::Submarine, &mut sampler),
                None
            );
        }
        assert_eq!(
            try_place_at(&grid, Coordinate::new(2, 2), ShipKind::Submarine, &mut sampler),
            None
        );
        assert!(try_place_at(&grid, Coordinate::new(0, 0), ShipKind::Submarine, &mut sampler)
            .is_some());
    }

    #[test]
    fn extension_blocked_by_a_ship_fails_the_attempt() {
        let mut grid = Grid::new(6);
        grid.occupy(Coordinate::new(4, 0));
        let mut sampler = Fixed::new(0, 0, &[Direction::East]);
        // (1,0) and (2,0) are clear, (3,0) is next to the ship at (4,0).
        assert_eq!(
            try_place_at(&grid, Coordinate::new(0, 0), ShipKind::Carrier, &mut sampler),
            None
        );
        let ship =
            try_place_at(&grid, Coordinate::new(0, 0), ShipKind::Destroyer, &mut sampler).unwrap();
        assert_eq!(ship.last(), Coordinate::new(1, 0));
    }

    #[test]
    fn discovery_falls_back_to_a_later_direction() {
        let mut grid = Grid::new(6);
        grid.occupy(Coordinate::new(5, 2));
        // East from (3,2) lands on (4,2), which touches the ship at (5,2).
        let mut sampler = Fixed::new(0, 0, &[Direction::East, Direction::West]);
        let ship =
            try_place_at(&grid, Coordinate::new(3, 2), ShipKind::Destroyer, &mut sampler).unwrap();
        assert_eq!(ship.axis(), Some(Direction::West));
        assert_eq!(ship.last(), Coordinate::new(2, 2));
    }

    #[test]
    fn exhaustion_leaves_grid_untouched() {
        let mut grid = Grid::new(3);
        grid.occupy(Coordinate::new(1, 1));
        let mut sampler = Fixed::new(0, 0, &Direction::ALL);
        let err = Placer::new(10)
            .place_ship(&mut grid, ShipKind::Submarine, &mut sampler)
            .unwrap_err();
        assert_eq!(
            err,
            PlaceError::Exhausted {
                kind: ShipKind::Submarine,
                attempts: 10
            }
        );
        assert_eq!(err.kind(), ShipKind::Submarine);
        assert_eq!(err.attempts(), 10);
        assert_eq!(grid.occupied().collect::<Vec<_>>(), vec![Coordinate::new(1, 1)]);
    }

    #[test]
    fn single_cell_field_only_fits_a_submarine() {
        for &kind in &[ShipKind::Destroyer, ShipKind::Cruiser, ShipKind::Carrier] {
            let mut grid = Grid::new(1);
            let mut sampler = Fixed::new(0, 0, &Direction::ALL);
            assert!(Placer::new(5).place_ship(&mut grid, kind, &mut sampler).is_err());
            assert_eq!(grid.occupied_count(), 0);
        }
        let mut grid = Grid::new(1);
        let mut sampler = Fixed::new(0, 0, &Direction::ALL);
        assert!(Placer::new(5)
            .place_ship(&mut grid, ShipKind::Submarine, &mut sampler)
            .is_ok());
        assert!(grid.is_occupied(Coordinate::new(0, 0)));
    }

    #[test]
    fn isolation_ignores_only_the_skipped_direction() {
        let mut grid = Grid::new(3);
        grid.occupy(Coordinate::new(0, 1));
        let center = Coordinate::new(1, 1);
        assert!(!is_isolated(&grid, center, None));
        assert!(is_isolated(&grid, center, Some(Direction::West)));
        assert!(!is_isolated(&grid, center, Some(Direction::East)));
        assert!(!is_isolated(&grid, Coordinate::new(0, 1), Some(Direction::West)));
    }

    #[test]
    #[should_panic]
    fn zero_budget_is_rejected() {
        Placer::new(0);
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn rng_sampler_stays_in_bounds() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut sampler = RngSampler::new(StdRng::seed_from_u64(3));
        for _ in 0..200 {
            let origin = sampler.origin(7);
            assert!(origin.x < 7 && origin.y < 7);
        }
        let mut dirs = Direction::ALL;
        sampler.order(&mut dirs);
        let mut sorted = dirs.to_vec();
        sorted.sort_by_key(|d| *d as u8);
        let mut expected = Direction::ALL.to_vec();
        expected.sort_by_key(|d| *d as u8);
        assert_eq!(sorted, expected);
    }
}
