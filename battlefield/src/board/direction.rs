//! Compass directions between neighboring cells.
use enumflags2::BitFlags;

use crate::board::Coordinate;

/// One of the eight compass directions from a cell to a neighboring cell.
///
/// Each direction is a distinct bit so that sets of directions, such as the set of
/// occupied neighbors of a cell, can be held in a `BitFlags<Direction>`.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// `y + 1`.
    North = 0b0000_0001,
    /// `y - 1`.
    South = 0b0000_0010,
    /// `x + 1`.
    East = 0b0000_0100,
    /// `x - 1`.
    West = 0b0000_1000,
    /// `x + 1`, `y + 1`.
    NorthEast = 0b0001_0000,
    /// `x - 1`, `y + 1`.
    NorthWest = 0b0010_0000,
    /// `x + 1`, `y - 1`.
    SouthEast = 0b0100_0000,
    /// `x - 1`, `y - 1`.
    SouthWest = 0b1000_0000,
}

impl Direction {
    /// All eight directions, starting East and turning counter-clockwise.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Get the direction pointing the opposite way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    /// Offset `(dx, dy)` of one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
        }
    }

    /// Find the direction of a single step from `from` to `to`. Returns `None` if the
    /// two coordinates are not neighbors.
    pub fn between(from: &Coordinate, to: &Coordinate) -> Option<Self> {
        let dx = to.x as isize - from.x as isize;
        let dy = to.y as isize - from.y as isize;
        Self::ALL.iter().copied().find(|dir| dir.delta() == (dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for &dir in Direction::ALL.iter() {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn opposite_negates_delta() {
        for &dir in Direction::ALL.iter() {
            let (dx, dy) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dx, -dy));
        }
    }

    #[test]
    fn all_directions_cover_every_flag() {
        let mut flags = BitFlags::<Direction>::empty();
        for &dir in Direction::ALL.iter() {
            assert!(!flags.contains(dir));
            flags.insert(dir);
        }
        assert_eq!(flags, BitFlags::<Direction>::all());
        assert_eq!(flags.bits(), 0xff);
    }

    #[test]
    fn exactly_four_diagonals() {
        let diagonals = Direction::ALL
            .iter()
            .filter(|d| {
                let (dx, dy) = d.delta();
                dx != 0 && dy != 0
            })
            .count();
        assert_eq!(diagonals, 4);
    }

    #[test]
    fn between_neighbors() {
        let origin = Coordinate::new(5, 5);
        assert_eq!(
            Direction::between(&origin, &Coordinate::new(6, 4)),
            Some(Direction::SouthEast)
        );
        assert_eq!(
            Direction::between(&origin, &Coordinate::new(5, 6)),
            Some(Direction::North)
        );
        assert_eq!(Direction::between(&origin, &origin), None);
        assert_eq!(Direction::between(&origin, &Coordinate::new(7, 5)), None);
    }
}
