//! Core chess rules: board state, move legality, and move execution.

mod board;
mod castle;
mod color;
mod coord;
mod error;
mod make_move;
mod piece;
mod piece_kind;
mod probe;
mod square;

pub use board::{Board, PrettyBoard};
pub use castle::CastleSide;
pub use color::Color;
pub use coord::Coord;
pub use error::{BoardError, CoordError, MoveError};
pub use make_move::MoveOutcome;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use probe::Probe;
pub use square::{Shade, Square, SquareRef};
