//! Error types for coordinates, move commands, and board validation.

use crate::color::Color;
use crate::coord::Coord;

/// Errors produced when building a [`Coord`] from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    /// A component lies outside `0..8`.
    #[error("({x}, {y}) is outside the 8x8 board")]
    OutOfBounds {
        /// Column that was requested.
        x: i16,
        /// Row that was requested.
        y: i16,
    },
    /// The text is not a square name like `e4`.
    #[error("invalid square name: \"{found}\"")]
    InvalidName {
        /// The rejected text.
        found: String,
    },
}

/// Reasons a move command is not applied.
///
/// A rejected command never mutates the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// A coordinate of the command lies off the board.
    #[error("out of bounds: {0}")]
    OutOfBounds(#[from] CoordError),
    /// There is no piece on the source square.
    #[error("no piece on {from}")]
    EmptySourceSquare {
        /// The empty source square.
        from: Coord,
    },
    /// The piece cannot legally reach the destination.
    #[error("illegal move {from}{to}")]
    IllegalMove {
        /// Source square.
        from: Coord,
        /// Rejected destination.
        to: Coord,
    },
    /// The piece on the source square belongs to the side not on move.
    #[error("{side_to_move} to move")]
    NotYourTurn {
        /// The side whose turn it is.
        side_to_move: Color,
    },
}

/// Structural inconsistencies found by [`Board::validate`](crate::board::Board::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// An occupant's back-reference names a different square.
    #[error("piece on {held_by} believes it stands on {claimed:?}")]
    StaleBackReference {
        /// Square that holds the piece.
        held_by: Coord,
        /// Square recorded in the piece.
        claimed: Option<Coord>,
    },
    /// A captured piece still records a square.
    #[error("captured {color} piece still claims {square}")]
    CapturedPieceOnBoard {
        /// Color list the piece sits in.
        color: Color,
        /// Square it still claims.
        square: Coord,
    },
    /// A captured list holds a piece of the other color.
    #[error("captured {expected} list holds a {found} piece")]
    WrongCapturedColor {
        /// Color the list is keyed by.
        expected: Color,
        /// Color of the misfiled piece.
        found: Color,
    },
    /// A side does not have exactly one king on the board.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
}
