//! Colored chess pieces and their movement geometry.

use std::fmt;

use crate::color::Color;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;
use crate::probe::Probe;

/// A chess piece together with the state the rules need about it.
///
/// `square` is a back-reference to the grid cell holding the piece. The board
/// keeps it in sync on every placement, and clears it when the piece is
/// captured.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    has_moved: bool,
    square: Option<Coord>,
}

impl Piece {
    /// Create a piece that has not moved yet and is not on the board.
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
            square: None,
        }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Return the color.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Return `true` once the piece has completed a move.
    ///
    /// Only pawns (double step), kings and rooks (castling) consult it.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Return the square holding this piece, or `None` once captured.
    #[inline]
    pub const fn square(&self) -> Option<Coord> {
        self.square
    }

    #[inline]
    pub(crate) fn set_square(&mut self, square: Option<Coord>) {
        self.square = square;
    }

    #[inline]
    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    /// Asset identifier a presentation layer can map to an image, e.g. `"white-king"`.
    pub fn asset(&self) -> String {
        format!("{}-{}", self.color, self.kind.name())
    }

    /// Return `true` if `other` belongs to the opposing side.
    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// Letter used in text renderings: uppercase for White, lowercase for Black.
    pub fn letter(&self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    /// Geometric reachability of `to` from `from`, ignoring check.
    ///
    /// Every kind refuses to land on a piece of its own color or on a king.
    /// Occupancy is read through `probe`, so hollowed squares count as empty.
    pub fn can_reach(&self, from: Coord, to: Coord, probe: &Probe<'_>) -> bool {
        if from == to {
            return false;
        }
        if let Some(target) = probe.occupant(to)
            && (target.color == self.color || target.kind == PieceKind::King)
        {
            return false;
        }

        let (dx, dy) = from.delta(to);
        match self.kind {
            PieceKind::Pawn => self.pawn_can_reach(from, to, probe),
            PieceKind::Knight => matches!((dx.abs(), dy.abs()), (1, 2) | (2, 1)),
            PieceKind::Bishop => probe.is_empty_diagonal(from, to),
            PieceKind::Rook => {
                probe.is_empty_vertical(from, to) || probe.is_empty_horizontal(from, to)
            }
            PieceKind::Queen => {
                probe.is_empty_vertical(from, to)
                    || probe.is_empty_horizontal(from, to)
                    || probe.is_empty_diagonal(from, to)
            }
            PieceKind::King => from.distance(to) == 1,
        }
    }

    fn pawn_can_reach(&self, from: Coord, to: Coord, probe: &Probe<'_>) -> bool {
        let forward = self.color.forward();
        let (dx, dy) = from.delta(to);

        if dx == 0 && dy == forward {
            return probe.is_empty(to);
        }

        if dx == 0 && dy == 2 * forward {
            let on_start_row = from.y() == self.color.pawn_row();
            let path_clear = from
                .offset(0, forward)
                .is_some_and(|step| probe.is_empty(step))
                && probe.is_empty(to);
            return !self.has_moved && on_start_row && path_clear;
        }

        if dx.abs() == 1 && dy == forward {
            return probe
                .occupant(to)
                .is_some_and(|target| self.is_enemy_of(target));
        }

        false
    }

    /// Return `true` if this piece, standing on `from`, threatens `to`.
    ///
    /// Differs from [`can_reach`](Self::can_reach) for two kinds: a king
    /// threatens all eight neighbours and a pawn threatens only its two
    /// forward diagonals, whatever stands there.
    pub fn controls(&self, from: Coord, to: Coord, probe: &Probe<'_>) -> bool {
        let (dx, dy) = from.delta(to);
        match self.kind {
            PieceKind::King => from.distance(to) == 1,
            PieceKind::Pawn => dx.abs() == 1 && dy == self.color.forward(),
            _ => self.can_reach(from, to, probe),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind.letter().to_ascii_uppercase();
        match self.square {
            Some(sq) => write!(f, "{color_prefix}{kind_char}@{sq}"),
            None => write!(f, "{color_prefix}{kind_char}"),
        }
    }
}
