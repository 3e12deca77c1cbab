//! Grid cells and the board-relative legality queries evaluated from them.

use std::fmt;

use crate::board::Board;
use crate::castle::CastleSide;
use crate::coord::Coord;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::probe::Probe;

/// Shading of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// Shade of the cell at `coord`: light when `x + y` is even.
    #[inline]
    pub const fn of(coord: Coord) -> Shade {
        if (coord.x() + coord.y()) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shade::Light => write!(f, "light"),
            Shade::Dark => write!(f, "dark"),
        }
    }
}

/// One of the 64 cells of the board.
///
/// Coordinate and shade are fixed at construction; only the occupant and the
/// `available` highlight flag change during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    coord: Coord,
    shade: Shade,
    piece: Option<Piece>,
    available: bool,
}

impl Square {
    pub(crate) fn new(coord: Coord) -> Square {
        Square {
            coord,
            shade: Shade::of(coord),
            piece: None,
            available: false,
        }
    }

    /// Return the coordinate of this cell.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Return the shade of this cell.
    #[inline]
    pub fn shade(&self) -> Shade {
        self.shade
    }

    /// Return the occupant, if any.
    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    /// Return `true` if no piece stands here.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Return `true` if this cell is highlighted as a legal destination.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.available
    }

    #[inline]
    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Attach `piece`, pointing its back-reference here. Any previous occupant
    /// is overwritten.
    #[inline]
    pub(crate) fn set_piece(&mut self, mut piece: Piece) {
        piece.set_square(Some(self.coord));
        self.piece = Some(piece);
    }

    /// Detach and return the occupant.
    #[inline]
    pub(crate) fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}

/// A cell viewed together with the board that owns it.
///
/// All rule queries that need to look beyond a single cell live here. They
/// never check whose turn it is; turn ownership belongs to [`Board::play`] and
/// [`Board::select`].
#[derive(Clone, Copy)]
pub struct SquareRef<'a> {
    board: &'a Board,
    coord: Coord,
}

impl<'a> SquareRef<'a> {
    pub(crate) fn new(board: &'a Board, coord: Coord) -> SquareRef<'a> {
        SquareRef { board, coord }
    }

    /// Return the coordinate of this cell.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Return the underlying cell.
    #[inline]
    pub fn square(&self) -> &'a Square {
        self.board.square_data(self.coord)
    }

    /// Return the occupant, if any.
    #[inline]
    pub fn piece(&self) -> Option<&'a Piece> {
        self.board.piece_at(self.coord)
    }

    /// Return `true` if no piece stands here.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece().is_none()
    }

    /// Return `true` if both cells are occupied by opposing sides.
    ///
    /// An empty cell has no enemies, whatever stands on `other`.
    pub fn is_enemy(&self, other: Coord) -> bool {
        match (self.piece(), self.board.piece_at(other)) {
            (Some(mine), Some(theirs)) => mine.is_enemy_of(theirs),
            _ => false,
        }
    }

    /// See [`Probe::is_empty_vertical`].
    pub fn is_empty_vertical(&self, target: Coord) -> bool {
        Probe::new(self.board).is_empty_vertical(self.coord, target)
    }

    /// See [`Probe::is_empty_horizontal`].
    pub fn is_empty_horizontal(&self, target: Coord) -> bool {
        Probe::new(self.board).is_empty_horizontal(self.coord, target)
    }

    /// See [`Probe::is_empty_diagonal`].
    pub fn is_empty_diagonal(&self, target: Coord) -> bool {
        Probe::new(self.board).is_empty_diagonal(self.coord, target)
    }

    /// Return `true` if any piece hostile to this cell's occupant threatens `target`.
    pub fn is_under_attack(&self, target: Coord) -> bool {
        self.is_under_attack_with(target, &Probe::new(self.board))
    }

    fn is_under_attack_with(&self, target: Coord, probe: &Probe<'_>) -> bool {
        let Some(actor) = self.piece() else {
            return false;
        };
        Coord::all().any(|from| {
            probe
                .occupant(from)
                .is_some_and(|p| p.is_enemy_of(actor) && p.controls(from, target, probe))
        })
    }

    /// Return `true` if another piece of the same side would recapture on this
    /// cell, judged as if the cell were empty.
    pub fn is_protected(&self) -> bool {
        self.is_protected_with(Probe::new(self.board))
    }

    fn is_protected_with(&self, probe: Probe<'_>) -> bool {
        let Some(guarded) = self.piece() else {
            return false;
        };
        let hollow = probe.vacate(self.coord);
        Coord::all().filter(|&from| from != self.coord).any(|from| {
            hollow
                .occupant(from)
                .is_some_and(|p| !p.is_enemy_of(guarded) && p.controls(from, self.coord, &hollow))
        })
    }

    /// Return the first cell whose occupant threatens this one, scanning from a8.
    ///
    /// For a king this is the check test.
    pub fn is_attacking(&self) -> Option<Coord> {
        let target = self.piece()?;
        let hollow = Probe::new(self.board).vacate(self.coord);
        Coord::all().find(|&from| {
            hollow
                .occupant(from)
                .is_some_and(|p| p.is_enemy_of(target) && p.controls(from, self.coord, &hollow))
        })
    }

    /// Return `true` if moving this cell's king to `target` is a legal castle.
    pub fn is_castling(&self, target: Coord) -> bool {
        self.castling_side(target).is_some()
    }

    /// Return which side the king castles toward when moving to `target`, if legal.
    pub fn castling_side(&self, target: Coord) -> Option<CastleSide> {
        let king = self.piece()?;
        if king.kind() != PieceKind::King || king.has_moved() {
            return None;
        }
        let y = self.coord.y();
        if target.y() != y || self.coord.x().abs_diff(target.x()) != 2 {
            return None;
        }
        let side = CastleSide::from_king_target(target.x())?;

        let rook_square = Coord::new_unchecked(side.rook_origin(), y);
        let rook_ready = self.board.piece_at(rook_square).is_some_and(|rook| {
            rook.kind() == PieceKind::Rook
                && !rook.has_moved()
                && !self.board.square(rook_square).is_enemy(self.coord)
        });
        if !rook_ready || self.is_attacking().is_some() {
            return None;
        }

        let path_empty = side
            .empty_columns()
            .iter()
            .all(|&x| self.board.piece_at(Coord::new_unchecked(x, y)).is_none());
        let path_safe = side
            .safe_columns()
            .iter()
            .all(|&x| !self.is_under_attack(Coord::new_unchecked(x, y)));

        (path_empty && path_safe).then_some(side)
    }

    /// Full legality of moving this cell's occupant to `target`, apart from turn order.
    ///
    /// Kings add their safety rules and castling on top of the piece geometry.
    pub fn can_move_to(&self, target: Coord) -> bool {
        let Some(piece) = self.piece() else {
            return false;
        };
        let probe = Probe::new(self.board);
        match piece.kind() {
            PieceKind::King => self.king_can_step(piece, target, &probe) || self.is_castling(target),
            _ => piece.can_reach(self.coord, target, &probe),
        }
    }

    fn king_can_step(&self, king: &Piece, target: Coord, probe: &Probe<'_>) -> bool {
        if !king.can_reach(self.coord, target, probe) {
            return false;
        }
        // The king no longer shields the squares behind it once it steps away.
        let without_king = probe.vacate(self.coord);
        let landing = self.board.square(target);
        let lands_safely = landing.is_empty()
            || (self.is_enemy(target) && !landing.is_protected_with(without_king));
        lands_safely && !self.is_under_attack_with(target, &without_king)
    }

    /// Every coordinate this cell's occupant may legally move to, ignoring turn order.
    pub fn legal_destinations(&self) -> Vec<Coord> {
        if self.is_empty() {
            return Vec::new();
        }
        Coord::all()
            .filter(|&to| to != self.coord && self.can_move_to(to))
            .collect()
    }
}

impl fmt::Debug for SquareRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SquareRef({}, {:?})", self.coord, self.piece())
    }
}
