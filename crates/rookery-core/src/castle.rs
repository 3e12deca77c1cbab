//! Castling geometry.

use std::fmt;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Classify a king destination column, if it is a castling target.
    #[inline]
    pub const fn from_king_target(x: u8) -> Option<CastleSide> {
        match x {
            6 => Some(CastleSide::KingSide),
            2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook starts from.
    #[inline]
    pub const fn rook_origin(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the rook lands on, next to the king.
    #[inline]
    pub const fn rook_target(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Columns between king and rook that must be empty.
    pub const fn empty_columns(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Columns the king crosses or lands on, which must not be attacked.
    ///
    /// On the queen side the rook also crosses b, which only needs to be empty.
    pub const fn safe_columns(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[2, 3],
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::KingSide => write!(f, "kingside"),
            CastleSide::QueenSide => write!(f, "queenside"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CastleSide;

    #[test]
    fn king_target_roundtrip() {
        for side in CastleSide::ALL {
            assert_eq!(CastleSide::from_king_target(side.king_target()), Some(side));
        }
        assert_eq!(CastleSide::from_king_target(4), None);
        assert_eq!(CastleSide::from_king_target(7), None);
    }

    #[test]
    fn rook_lands_beside_king() {
        for side in CastleSide::ALL {
            assert_eq!(side.king_target().abs_diff(side.rook_target()), 1);
        }
    }

    #[test]
    fn safe_columns_are_a_subset_of_empty_columns() {
        for side in CastleSide::ALL {
            for col in side.safe_columns() {
                assert!(side.empty_columns().contains(col));
            }
        }
        assert_eq!(CastleSide::QueenSide.empty_columns().len(), 3);
        assert_eq!(CastleSide::KingSide.empty_columns().len(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", CastleSide::KingSide), "kingside");
        assert_eq!(format!("{}", CastleSide::QueenSide), "queenside");
    }
}
