//! Console command parsing.

use rookery_core::Coord;

use crate::error::ConsoleError;

/// A runtime setting changed with `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOption {
    /// Print the board after every applied move.
    AutoShow(bool),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- reset to the starting position.
    New,
    /// `select <sq>` -- highlight the legal destinations of a piece.
    Select(Coord),
    /// `click <sq>` -- select a piece, or move the selected piece to a highlighted square.
    Click(Coord),
    /// `move <from> <to>`, `move <from><to>` or a bare `e2e4`.
    Move {
        /// Source square.
        from: Coord,
        /// Destination square.
        to: Coord,
    },
    /// `show` -- print the board.
    Show,
    /// `captured` -- print both captured lists.
    Captured,
    /// `turn` -- print the side to move.
    Turn,
    /// `check` -- report whether the side to move is in check.
    Check,
    /// `set <name> <value>` -- change a console option.
    Set(ConsoleOption),
    /// `quit` -- leave the console.
    Quit,
    /// Unrecognized input (ignored).
    Unknown(String),
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New),
        "show" => Ok(Command::Show),
        "captured" => Ok(Command::Captured),
        "turn" => Ok(Command::Turn),
        "check" => Ok(Command::Check),
        "quit" => Ok(Command::Quit),
        "select" => Ok(Command::Select(parse_square(tokens.get(1), "select")?)),
        "click" => Ok(Command::Click(parse_square(tokens.get(1), "click")?)),
        "move" => parse_move(&tokens[1..]),
        "set" => parse_set(&tokens[1..]),
        other => match split_move(other) {
            Some((from, to)) => Ok(Command::Move { from, to }),
            None => Ok(Command::Unknown(other.to_string())),
        },
    }
}

/// Parse the `move` command arguments: either two squares or one joined pair.
fn parse_move(tokens: &[&str]) -> Result<Command, ConsoleError> {
    match tokens {
        [joined] if joined.len() == 4 && joined.is_ascii() => {
            let from = Coord::from_algebraic(&joined[..2])?;
            let to = Coord::from_algebraic(&joined[2..])?;
            Ok(Command::Move { from, to })
        }
        [_] => Err(ConsoleError::MissingSquare {
            command: "move".to_string(),
        }),
        _ => {
            let from = parse_square(tokens.first(), "move")?;
            let to = parse_square(tokens.get(1), "move")?;
            Ok(Command::Move { from, to })
        }
    }
}

/// Parse the `set` command arguments.
fn parse_set(tokens: &[&str]) -> Result<Command, ConsoleError> {
    let name = tokens.first().copied().unwrap_or_default();
    let value = tokens.get(1).copied().unwrap_or_default();
    match name {
        "autoshow" => Ok(Command::Set(ConsoleOption::AutoShow(parse_switch(name, value)?))),
        _ => Err(ConsoleError::UnknownOption {
            name: name.to_string(),
        }),
    }
}

fn parse_switch(name: &str, value: &str) -> Result<bool, ConsoleError> {
    match value {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(ConsoleError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Parse a required square argument.
fn parse_square(token: Option<&&str>, command: &str) -> Result<Coord, ConsoleError> {
    let token = token.ok_or_else(|| ConsoleError::MissingSquare {
        command: command.to_string(),
    })?;
    Ok(Coord::from_algebraic(token)?)
}

/// Recognize a bare coordinate pair such as `e2e4`.
fn split_move(token: &str) -> Option<(Coord, Coord)> {
    if token.len() != 4 || !token.is_ascii() {
        return None;
    }
    let from = Coord::from_algebraic(&token[..2]).ok()?;
    let to = Coord::from_algebraic(&token[2..]).ok()?;
    Some((from, to))
}
