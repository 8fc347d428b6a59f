//! Types used for defining ships and their shapes.
use std::fmt;

use crate::board::{Coordinate, Direction};

pub use self::linear::{is_straight_line, line_axis};

mod linear;

/// Kind of ship. Every kind is a straight line of a fixed length.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ShipKind {
    /// Submarine: length 1.
    Submarine,
    /// Destroyer: length 2.
    Destroyer,
    /// Cruiser: length 3.
    Cruiser,
    /// Carrier: length 4.
    Carrier,
}

impl ShipKind {
    /// Every kind of ship, shortest first.
    pub const ALL: [ShipKind; 4] = [
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::Cruiser,
        ShipKind::Carrier,
    ];

    /// Get the length of this ship kind.
    pub fn len(self) -> usize {
        match self {
            ShipKind::Submarine => 1,
            ShipKind::Destroyer => 2,
            ShipKind::Cruiser => 3,
            ShipKind::Carrier => 4,
        }
    }

    /// Lowercase name of this ship kind.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Submarine => "submarine",
            ShipKind::Destroyer => "destroyer",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Carrier => "carrier",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A ship, either still being grown during a placement attempt or already committed
/// to a [`Grid`][crate::board::Grid].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// Kind of the ship, which fixes its length.
    kind: ShipKind,

    /// Cells of the ship in the order they were grown, starting at the origin.
    cells: Vec<Coordinate>,

    /// Direction the ship grows along. Unknown until the second cell is accepted.
    axis: Option<Direction>,
}

impl Ship {
    /// Start growing a ship of the given kind from its first cell.
    pub(crate) fn seed(kind: ShipKind, origin: Coordinate) -> Self {
        let mut cells = Vec::with_capacity(kind.len());
        cells.push(origin);
        Self {
            kind,
            cells,
            axis: None,
        }
    }

    /// Accept the next cell, reached from the last cell by stepping along `dir`. The
    /// first extension fixes the growth axis.
    pub(crate) fn extend(&mut self, dir: Direction, coord: Coordinate) {
        debug_assert!(!self.is_complete(), "{} grown past its length", self.kind);
        debug_assert!(self.axis.map_or(true, |axis| axis == dir));
        self.axis = Some(dir);
        self.cells.push(coord);
    }

    /// Kind of this ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Cells accepted so far, starting with the origin.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Direction the ship extends in from its origin. `None` for a ship of one cell.
    pub fn axis(&self) -> Option<Direction> {
        self.axis
    }

    /// Most recently accepted cell.
    pub fn last(&self) -> Coordinate {
        // A ship always holds at least its origin.
        self.cells[self.cells.len() - 1]
    }

    /// Returns true once the ship holds as many cells as its kind requires.
    pub fn is_complete(&self) -> bool {
        self.cells.len() == self.kind.len()
    }

    /// Returns true if the ship is complete and its cells form one straight line.
    pub fn is_valid(&self) -> bool {
        self.is_complete() && is_straight_line(&self.cells) && line_axis(&self.cells) == self.axis
    }

    /// Returns true if any cell of this ship is on or next to any cell of `other`.
    pub fn touches(&self, other: &Ship) -> bool {
        self.cells
            .iter()
            .any(|a| other.cells.iter().any(|b| a == b || a.touches(b)))
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at", self.kind)?;
        for coord in &self.cells {
            write!(f, " {}", coord)?;
        }
        Ok(())
    }
}
