//! Text rendering of the field as a bordered matrix.
use std::fmt;

use crate::board::{Cell, Grid};

/// Glyph drawn for occupied cells by default.
pub const OCCUPIED_GLYPH: char = '*';

/// Glyph drawn for empty cells by default.
pub const EMPTY_GLYPH: char = ' ';

/// Display helper that draws a [`Grid`] as a bordered text matrix, one line per row:
///
/// ```text
/// ---------
/// | * |   |
/// ---------
/// |   |   |
/// ---------
/// ```
#[derive(Debug, Copy, Clone)]
pub struct FieldView<'a> {
    grid: &'a Grid,
    occupied: char,
    empty: char,
}

impl<'a> FieldView<'a> {
    /// Draw the grid with the default glyphs.
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            occupied: OCCUPIED_GLYPH,
            empty: EMPTY_GLYPH,
        }
    }

    /// Use different glyphs for occupied and empty cells.
    pub fn with_glyphs(mut self, occupied: char, empty: char) -> Self {
        self.occupied = occupied;
        self.empty = empty;
        self
    }

    fn horizontal_bar(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Each cell is four characters wide, plus the closing border.
        for _ in 0..self.grid.size() * 4 + 1 {
            f.write_str("-")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for FieldView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.iter_rows() {
            self.horizontal_bar(f)?;
            f.write_str("|")?;
            for cell in row {
                let glyph = match cell {
                    Cell::Occupied => self.occupied,
                    Cell::Empty => self.empty,
                };
                write!(f, " {} |", glyph)?;
            }
            writeln!(f)?;
        }
        self.horizontal_bar(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coordinate;

    #[test]
    fn draws_bordered_matrix() {
        let mut grid = Grid::new(2);
        grid.occupy(Coordinate::new(0, 0));
        let expected = "---------\n\
                        | * |   |\n\
                        ---------\n\
                        |   |   |\n\
                        ---------\n";
        assert_eq!(FieldView::new(&grid).to_string(), expected);
    }

    #[test]
    fn rows_follow_the_first_coordinate() {
        let mut grid = Grid::new(3);
        grid.occupy(Coordinate::new(2, 0));
        let text = FieldView::new(&grid).with_glyphs('#', '.').to_string();
        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with('|')).collect();
        assert_eq!(rows, vec!["| . | . | . |", "| . | . | . |", "| # | . | . |"]);
    }

    #[test]
    fn single_cell_field() {
        let grid = Grid::new(1);
        assert_eq!(FieldView::new(&grid).to_string(), "-----\n|   |\n-----\n");
    }
}
