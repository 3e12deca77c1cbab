//! Move execution.

use std::fmt;

use tracing::debug;

use crate::board::Board;
use crate::castle::CastleSide;
use crate::coord::Coord;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// What an applied move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Square the piece left.
    pub from: Coord,
    /// Square the piece landed on.
    pub to: Coord,
    /// The moved piece, as it stands after the move.
    pub piece: Piece,
    /// The captured piece, now in its color's lost list.
    pub captured: Option<Piece>,
    /// Set when the move was a castle; the rook has been relocated too.
    pub castle: Option<CastleSide>,
    /// Square giving check to the side now on move, if any.
    ///
    /// Only filled in by [`Board::play`].
    pub checker: Option<Coord>,
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl Board {
    /// Move the piece on `from` to `to` if the rules allow it.
    ///
    /// This is the square-level entry point: it does not check whose turn it
    /// is and does not flip the side to move. On rejection the board is left
    /// untouched. On success a captured occupant of `to` goes to the lost list
    /// of its color, the mover lands on `to` marked as moved, and a castling
    /// king brings its rook alongside.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<MoveOutcome, MoveError> {
        let square = self.square(from);
        let Some(&piece) = square.piece() else {
            debug!(%from, "move rejected: empty source square");
            return Err(MoveError::EmptySourceSquare { from });
        };
        if !square.can_move_to(to) {
            debug!(%from, %to, ?piece, "move rejected: illegal");
            return Err(MoveError::IllegalMove { from, to });
        }
        let castle = if piece.kind() == PieceKind::King && from.x().abs_diff(to.x()) > 1 {
            CastleSide::from_king_target(to.x())
        } else {
            None
        };

        let mut mover = piece;
        mover.mark_moved();
        mover.set_square(Some(to));
        self.square_data_mut(from).take_piece();

        let captured = self.square_data_mut(to).take_piece().map(|mut victim| {
            victim.set_square(None);
            victim
        });
        if let Some(victim) = captured {
            debug!(%to, ?victim, "capture");
            self.add_lost_piece(victim);
        }
        self.set_piece(to, mover);

        if let Some(side) = castle {
            self.relocate_castling_rook(from.y(), side);
        }

        debug!(%from, %to, ?piece, "move applied");
        Ok(MoveOutcome {
            from,
            to,
            piece: mover,
            captured,
            castle,
            checker: None,
        })
    }

    /// Play a move for the side to move, then hand the turn to the other side.
    ///
    /// Fails with [`MoveError::NotYourTurn`] if the piece on `from` belongs to
    /// the side not on move. Highlights are cleared after a successful move.
    pub fn play(&mut self, from: Coord, to: Coord) -> Result<MoveOutcome, MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::EmptySourceSquare { from })?;
        if piece.color() != self.side_to_move() {
            debug!(%from, side_to_move = %self.side_to_move(), "move rejected: not your turn");
            return Err(MoveError::NotYourTurn {
                side_to_move: self.side_to_move(),
            });
        }

        let mut outcome = self.move_piece(from, to)?;
        self.clear_highlights();
        let next = self.side_to_move().flip();
        self.set_side_to_move(next);
        outcome.checker = self.checker(next);
        if let Some(checker) = outcome.checker {
            debug!(side = %next, %checker, "check");
        }
        Ok(outcome)
    }

    /// Like [`play`](Self::play), taking raw grid coordinates.
    ///
    /// Coordinates are bounds-checked before any lookup.
    pub fn play_xy(
        &mut self,
        from: (u8, u8),
        to: (u8, u8),
    ) -> Result<MoveOutcome, MoveError> {
        let from = Coord::new(from.0, from.1)?;
        let to = Coord::new(to.0, to.1)?;
        self.play(from, to)
    }

    /// Move the rook that accompanies a castling king on row `y`.
    fn relocate_castling_rook(&mut self, y: u8, side: CastleSide) {
        let rook_from = Coord::new_unchecked(side.rook_origin(), y);
        let rook_to = Coord::new_unchecked(side.rook_target(), y);
        if let Some(mut rook) = self.square_data_mut(rook_from).take_piece() {
            rook.mark_moved();
            self.set_piece(rook_to, rook);
            debug!(%rook_from, %rook_to, %side, "castling rook relocated");
        }
    }
}
