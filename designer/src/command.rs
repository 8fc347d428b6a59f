//! Commands typed at the designer prompt.
use once_cell::sync::Lazy;
use regex::Regex;

use battlefield::ships::ShipKind;

/// Listing printed at startup and by the help command.
pub const HELP: &str = r#"Commands:
"1 + ENTER" - places a submarine at a random location.
"2 + ENTER" - places a destroyer at a random location.
"3 + ENTER" - places a cruiser at a random location.
"4 + ENTER" - places a carrier at a random location.
"h + ENTER" - prints the commands list.
"q + ENTER" - exits the program.
"#;

/// A command understood by the designer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Place one ship of the given kind at a random location.
    Place(ShipKind),
    /// Print the list of commands.
    Help,
    /// Leave the program.
    Quit,
}

impl Command {
    /// Parse a line of input. Expects the input to be trimmed and lowercase already.
    /// Returns `None` for anything that isn't a command.
    pub fn parse(input: &str) -> Option<Command> {
        /// Matcher for an optional verb followed by a ship.
        static PLACE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)(?:(?:place|put|add)\s+)?
        (?P<ship>\w+)$",
            )
            .unwrap()
        });

        match input {
            "h" | "help" | "?" => Some(Command::Help),
            "q" | "quit" | "exit" => Some(Command::Quit),
            other => {
                let captures = PLACE.captures(other)?;
                let kind = match captures.name("ship")?.as_str() {
                    "1" | "ss" | "sub" | "submarine" => ShipKind::Submarine,
                    "2" | "dd" | "destroyer" => ShipKind::Destroyer,
                    "3" | "ca" | "cl" | "cruiser" => ShipKind::Cruiser,
                    "4" | "cv" | "carrier" => ShipKind::Carrier,
                    _ => return None,
                };
                Some(Command::Place(kind))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_commands() {
        assert_eq!(Command::parse("1"), Some(Command::Place(ShipKind::Submarine)));
        assert_eq!(Command::parse("2"), Some(Command::Place(ShipKind::Destroyer)));
        assert_eq!(Command::parse("3"), Some(Command::Place(ShipKind::Cruiser)));
        assert_eq!(Command::parse("4"), Some(Command::Place(ShipKind::Carrier)));
        assert_eq!(Command::parse("h"), Some(Command::Help));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
    }

    #[test]
    fn named_ships() {
        assert_eq!(
            Command::parse("place carrier"),
            Some(Command::Place(ShipKind::Carrier))
        );
        assert_eq!(Command::parse("put  cl"), Some(Command::Place(ShipKind::Cruiser)));
        assert_eq!(Command::parse("sub"), Some(Command::Place(ShipKind::Submarine)));
    }

    #[test]
    fn unknown_input() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("5"), None);
        assert_eq!(Command::parse("place"), None);
        assert_eq!(Command::parse("place battleship"), None);
        assert_eq!(Command::parse("1 2"), None);
    }

    #[test]
    fn help_lists_every_ship() {
        for kind in ShipKind::ALL.iter() {
            assert!(HELP.contains(kind.name()));
        }
    }
}
