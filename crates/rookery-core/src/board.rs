//! The board: the 8x8 grid, captured pieces, side to move, and highlighting.

use std::fmt;

use crate::castle::CastleSide;
use crate::color::Color;
use crate::coord::Coord;
use crate::error::{BoardError, CoordError};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::{Square, SquareRef};

/// Complete game state.
///
/// Owns all 64 [`Square`]s. A piece lives either in exactly one square or in
/// exactly one of the two captured lists.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order, indexed by [`Coord::index`].
    squares: [Square; 64],
    /// Captured pieces, one list per color, in capture order.
    lost: [Vec<Piece>; Color::COUNT],
    /// Which side moves next.
    side_to_move: Color,
}

impl Board {
    /// Return a board with the standard starting position, White to move.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row();
            let pawns = color.pawn_row();
            for (x, kind) in PieceKind::BACK_ROW.into_iter().enumerate() {
                board.place(Coord::new_unchecked(x as u8, back), kind, color);
                board.place(Coord::new_unchecked(x as u8, pawns), PieceKind::Pawn, color);
            }
        }
        board
    }

    /// Return a board with no pieces, White to move.
    pub fn empty() -> Board {
        Board {
            squares: std::array::from_fn(|i| {
                Square::new(Coord::new_unchecked((i % 8) as u8, (i / 8) as u8))
            }),
            lost: [Vec::new(), Vec::new()],
            side_to_move: Color::White,
        }
    }

    /// Put a fresh, unmoved piece on `at`, replacing whatever stood there.
    pub fn place(&mut self, at: Coord, kind: PieceKind, color: Color) {
        self.set_piece(at, Piece::new(kind, color));
    }

    /// Bounds-checked lookup of the cell at `(x, y)`.
    pub fn cell(&self, x: u8, y: u8) -> Result<&Square, CoordError> {
        let coord = Coord::new(x, y)?;
        Ok(self.square_data(coord))
    }

    /// Return the cell at `at`.
    #[inline]
    pub fn square_data(&self, at: Coord) -> &Square {
        &self.squares[at.index()]
    }

    #[inline]
    pub(crate) fn square_data_mut(&mut self, at: Coord) -> &mut Square {
        &mut self.squares[at.index()]
    }

    /// Return the rule-query view of the cell at `at`.
    #[inline]
    pub fn square(&self, at: Coord) -> SquareRef<'_> {
        SquareRef::new(self, at)
    }

    /// Return the piece on `at`, if any.
    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        self.squares[at.index()].piece()
    }

    /// Iterate over all cells, row by row from a8.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Return the captured pieces of `color`, in capture order.
    #[inline]
    pub fn lost_pieces(&self, color: Color) -> &[Piece] {
        &self.lost[color.index()]
    }

    /// Attach `piece` to the cell at `at` and point its back-reference there.
    ///
    /// The previous occupant, if any, is dropped without being recorded as
    /// captured; callers that capture go through
    /// [`add_lost_piece`](Self::add_lost_piece) first.
    pub fn set_piece(&mut self, at: Coord, piece: Piece) {
        self.square_data_mut(at).set_piece(piece);
    }

    /// Record `piece` as captured, in the list of its own color.
    pub fn add_lost_piece(&mut self, mut piece: Piece) {
        piece.set_square(None);
        self.lost[piece.color().index()].push(piece);
    }

    /// Return the square of `color`'s king, if it has one on the board.
    pub fn king_square(&self, color: Color) -> Option<Coord> {
        self.squares
            .iter()
            .find(|sq| {
                sq.piece()
                    .is_some_and(|p| p.kind() == PieceKind::King && p.color() == color)
            })
            .map(Square::coord)
    }

    /// Return the first square giving check to `color`'s king.
    pub fn checker(&self, color: Color) -> Option<Coord> {
        let king = self.king_square(color)?;
        self.square(king).is_attacking()
    }

    /// Return `true` if `color`'s king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.checker(color).is_some()
    }

    /// Return `true` if `color` could castle toward `side` right now.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        let target = Coord::new_unchecked(side.king_target(), king.y());
        self.square(king).is_castling(target)
    }

    /// Every square the piece on `from` may move to, ignoring turn order.
    ///
    /// Does not touch the highlight flags.
    pub fn legal_destinations(&self, from: Coord) -> Vec<Coord> {
        self.square(from).legal_destinations()
    }

    /// Highlight the legal destinations of the piece on `from` and return them.
    ///
    /// All previous highlights are cleared first. Nothing is highlighted when
    /// `from` is empty or holds a piece of the side not on move.
    pub fn select(&mut self, from: Coord) -> Vec<Coord> {
        self.clear_highlights();
        let movable = self
            .piece_at(from)
            .is_some_and(|p| p.color() == self.side_to_move);
        if !movable {
            return Vec::new();
        }
        let destinations = self.legal_destinations(from);
        for &to in &destinations {
            self.square_data_mut(to).set_available(true);
        }
        destinations
    }

    /// Clear every highlight flag.
    pub fn clear_highlights(&mut self) {
        for sq in &mut self.squares {
            sq.set_available(false);
        }
    }

    /// Return the currently highlighted squares.
    pub fn highlighted(&self) -> Vec<Coord> {
        self.squares
            .iter()
            .filter(|sq| sq.is_available())
            .map(Square::coord)
            .collect()
    }

    /// Validate the structural invariants of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for sq in &self.squares {
            if let Some(piece) = sq.piece()
                && piece.square() != Some(sq.coord())
            {
                return Err(BoardError::StaleBackReference {
                    held_by: sq.coord(),
                    claimed: piece.square(),
                });
            }
        }

        for color in Color::ALL {
            for piece in self.lost_pieces(color) {
                if piece.color() != color {
                    return Err(BoardError::WrongCapturedColor {
                        expected: color,
                        found: piece.color(),
                    });
                }
                if let Some(square) = piece.square() {
                    return Err(BoardError::CapturedPieceOnBoard { color, square });
                }
            }

            let king_count = self
                .squares
                .iter()
                .filter_map(Square::piece)
                .filter(|p| p.kind() == PieceKind::King && p.color() == color)
                .count() as u32;
            if king_count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color,
                    count: king_count,
                });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board({} to move)", self.side_to_move)?;
        write!(f, "{}", self.pretty())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
///
/// Rank 8 is printed first. Highlighted empty cells show `*`; highlighted
/// occupied cells wrap the piece letter in brackets.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.squares.chunks(8) {
            let rank = 8 - row[0].coord().y();
            write!(f, "{rank} ")?;
            for sq in row {
                match (sq.piece(), sq.is_available()) {
                    (Some(p), true) => write!(f, "[{}]", p.letter())?,
                    (Some(p), false) => write!(f, " {} ", p.letter())?,
                    (None, true) => write!(f, " * ")?,
                    (None, false) => write!(f, " . ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a  b  c  d  e  f  g  h")
    }
}
