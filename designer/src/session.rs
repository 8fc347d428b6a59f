//! The interactive designer loop.
use std::{
    fmt,
    io::{self, BufRead, Write},
};

use log::info;

use battlefield::{
    board::Grid,
    placement::{PlaceError, Placer, Sampler},
    render::FieldView,
    ships::{Ship, ShipKind},
};

use crate::{
    command::{Command, HELP},
    input::InputReader,
};

/// ANSI sequence that clears the screen and moves the cursor to the top left.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Message shown when a ship could not be placed.
const GIVE_UP: &str = "Cannot generate valid position for your vessel.";

/// How the designer reacts to its surroundings.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Options {
    /// Keep running after a ship could not be placed instead of exiting.
    pub keep_going: bool,
    /// Clear the terminal before redrawing the field.
    pub clear: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            keep_going: false,
            clear: true,
        }
    }
}

/// Why the designer loop stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Exit {
    /// The quit command was given.
    Quit,
    /// Input ran out.
    EndOfInput,
    /// A ship could not be placed.
    GaveUp(PlaceError),
}

/// Count of the ships placed so far, by kind.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Fleet([usize; 4]);

impl Fleet {
    /// Record a newly placed ship.
    pub fn add(&mut self, kind: ShipKind) {
        self.0[Self::index(kind)] += 1;
    }

    /// Number of ships of the given kind.
    pub fn count(&self, kind: ShipKind) -> usize {
        self.0[Self::index(kind)]
    }

    /// Total number of ships.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    fn index(kind: ShipKind) -> usize {
        match kind {
            ShipKind::Submarine => 0,
            ShipKind::Destroyer => 1,
            ShipKind::Cruiser => 2,
            ShipKind::Carrier => 3,
        }
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Ships placed:")?;
        if self.total() == 0 {
            return f.write_str(" none");
        }
        let mut sep = " ";
        for &kind in ShipKind::ALL.iter() {
            match self.count(kind) {
                0 => continue,
                1 => write!(f, "{}1 {}", sep, kind)?,
                n => write!(f, "{}{} {}s", sep, n, kind)?,
            }
            sep = ", ";
        }
        Ok(())
    }
}

/// A designer session: one field, populated one ship at a time.
pub struct Session<S> {
    grid: Grid,
    placer: Placer,
    sampler: S,
    fleet: Fleet,
    options: Options,
}

impl<S: Sampler> Session<S> {
    pub fn new(grid: Grid, placer: Placer, sampler: S, options: Options) -> Self {
        Self {
            grid,
            placer,
            sampler,
            fleet: Fleet::default(),
            options,
        }
    }

    /// Ships placed so far.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Place one ship of the given kind at a random location.
    pub fn place(&mut self, kind: ShipKind) -> Result<Ship, PlaceError> {
        let ship = self
            .placer
            .place_ship(&mut self.grid, kind, &mut self.sampler)?;
        self.fleet.add(kind);
        info!("placed {}", ship);
        Ok(ship)
    }

    /// Draw the field followed by the fleet summary.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", FieldView::new(&self.grid))?;
        writeln!(out, "{}", self.fleet)
    }

    /// Run the command loop until the player quits, input runs out, or a ship can't be
    /// placed and the session isn't set to keep going.
    pub fn run<B: BufRead, W: Write>(
        &mut self,
        input: &mut InputReader<B>,
        out: &mut W,
    ) -> io::Result<Exit> {
        loop {
            let line = match input.read_input_lower("Please, enter your command: ", out)? {
                Some(line) => line,
                None => return Ok(Exit::EndOfInput),
            };
            if line.is_empty() {
                continue;
            }
            let failure = match Command::parse(line) {
                Some(Command::Quit) => return Ok(Exit::Quit),
                Some(Command::Help) => {
                    writeln!(out, "{}", HELP)?;
                    continue;
                }
                Some(Command::Place(kind)) => self.place(kind).err(),
                None => {
                    writeln!(out, "Command {} is unknown, please, choose valid one.", line)?;
                    continue;
                }
            };
            if let Some(err) = failure {
                if !self.options.keep_going {
                    writeln!(out, "{}", GIVE_UP)?;
                    return Ok(Exit::GaveUp(err));
                }
            }
            if self.options.clear {
                out.write_all(CLEAR_SCREEN.as_bytes())?;
            }
            self.draw(out)?;
            if let Some(err) = failure {
                writeln!(out, "{} ({}). The field is unchanged.", GIVE_UP, err)?;
            }
        }
    }
}
