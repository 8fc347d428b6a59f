use std::fmt;

/// The coordinates of a [`Cell`][crate::board::Cell] in the field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// First index into the field. The renderer draws one row per `x`.
    pub x: usize,
    /// Second index into the field.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns true if `other` is one of the eight cells surrounding this one.
    /// A coordinate never touches itself.
    pub fn touches(&self, other: &Coordinate) -> bool {
        let dx = self.x.max(other.x) - self.x.min(other.x);
        let dy = self.y.max(other.y) - self.y.min(other.y);
        dx <= 1 && dy <= 1 && self != other
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
