//! Read-only occupancy view with optional hollowed squares.
//!
//! Attack and protection checks ask "could this piece reach that square if it
//! were empty". A [`Probe`] answers occupancy questions for the real board
//! while treating up to two coordinates as vacated, so those checks never
//! mutate the grid.

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::Piece;

const MAX_VACATED: usize = 2;

/// Occupancy view over a [`Board`], with some squares hypothetically emptied.
#[derive(Clone, Copy)]
pub struct Probe<'a> {
    board: &'a Board,
    vacated: [Option<Coord>; MAX_VACATED],
}

impl<'a> Probe<'a> {
    /// View the board exactly as it is.
    pub fn new(board: &'a Board) -> Probe<'a> {
        Probe {
            board,
            vacated: [None; MAX_VACATED],
        }
    }

    /// Return a copy of this probe that also treats `at` as empty.
    ///
    /// # Panics
    ///
    /// Debug-asserts that no more than two squares are vacated.
    pub fn vacate(mut self, at: Coord) -> Probe<'a> {
        match self.vacated.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => *slot = Some(at),
            None => debug_assert!(false, "probe already vacates {MAX_VACATED} squares"),
        }
        self
    }

    /// The underlying board.
    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Return `true` if `at` is treated as empty by this probe.
    #[inline]
    pub fn is_vacated(&self, at: Coord) -> bool {
        self.vacated.contains(&Some(at))
    }

    /// The piece standing on `at`, unless the square is vacated.
    #[inline]
    pub fn occupant(&self, at: Coord) -> Option<&'a Piece> {
        if self.is_vacated(at) {
            return None;
        }
        self.board.piece_at(at)
    }

    /// Return `true` if nothing stands on `at`.
    #[inline]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.occupant(at).is_none()
    }

    /// Return `true` if `from` and `to` share a file and every square strictly
    /// between them is empty.
    pub fn is_empty_vertical(&self, from: Coord, to: Coord) -> bool {
        if from.x() != to.x() {
            return false;
        }
        let (lo, hi) = (from.y().min(to.y()), from.y().max(to.y()));
        ((lo + 1)..hi).all(|y| self.is_empty(Coord::new_unchecked(from.x(), y)))
    }

    /// Return `true` if `from` and `to` share a rank and every square strictly
    /// between them is empty.
    pub fn is_empty_horizontal(&self, from: Coord, to: Coord) -> bool {
        if from.y() != to.y() {
            return false;
        }
        let (lo, hi) = (from.x().min(to.x()), from.x().max(to.x()));
        ((lo + 1)..hi).all(|x| self.is_empty(Coord::new_unchecked(x, from.y())))
    }

    /// Return `true` if `from` and `to` share a diagonal and every square
    /// strictly between them is empty.
    pub fn is_empty_diagonal(&self, from: Coord, to: Coord) -> bool {
        let (dx, dy) = from.delta(to);
        if dx.abs() != dy.abs() {
            return false;
        }
        let (sx, sy) = (dx.signum(), dy.signum());
        (1..dx.abs()).all(|i| match from.offset(sx * i, sy * i) {
            Some(between) => self.is_empty(between),
            None => false,
        })
    }
}
