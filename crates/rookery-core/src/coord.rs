//! Grid coordinates.

use std::fmt;
use std::str::FromStr;

use crate::error::CoordError;

/// A position on the 8x8 grid.
///
/// `x` runs over files a..h (0..7). `y` runs top to bottom: y = 0 is Black's
/// back rank (rank 8) and y = 7 is White's back rank (rank 1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Grid width and height.
    pub const SIZE: u8 = 8;

    /// Create a coordinate, rejecting anything outside the grid.
    pub fn new(x: u8, y: u8) -> Result<Coord, CoordError> {
        if x >= Self::SIZE || y >= Self::SIZE {
            return Err(CoordError::OutOfBounds {
                x: x as i16,
                y: y as i16,
            });
        }
        Ok(Coord { x, y })
    }

    /// Create a coordinate without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both components are below 8.
    #[inline]
    pub(crate) const fn new_unchecked(x: u8, y: u8) -> Coord {
        debug_assert!(x < 8 && y < 8);
        Coord { x, y }
    }

    /// Parse an algebraic square name such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Result<Coord, CoordError> {
        let invalid = || CoordError::InvalidName {
            found: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Coord {
            x: file - b'a',
            y: b'8' - rank,
        })
    }

    /// Column index (0 = file a).
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row index (0 = rank 8).
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Flat index in row-major order, 0..63.
    #[inline]
    pub const fn index(self) -> usize {
        self.y as usize * 8 + self.x as usize
    }

    /// Return the coordinate shifted by `(dx, dy)`, or `None` if it leaves the grid.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Coord> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Coord::new_unchecked(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Signed column and row difference from `self` to `other`.
    #[inline]
    pub fn delta(self, other: Coord) -> (i8, i8) {
        (
            other.x as i8 - self.x as i8,
            other.y as i8 - self.y as i8,
        )
    }

    /// Chebyshev (king-step) distance.
    #[inline]
    pub fn distance(self, other: Coord) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Iterate over all 64 coordinates row by row, starting at a8.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0u8..8).flat_map(|y| (0u8..8).map(move |x| Coord { x, y }))
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Coord, CoordError> {
        Coord::from_algebraic(s)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.x) as char;
        write!(f, "{file}{}", 8 - self.y)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Coord;
    use crate::error::CoordError;

    #[test]
    fn algebraic_orientation() {
        let e1 = Coord::from_algebraic("e1").unwrap();
        assert_eq!((e1.x(), e1.y()), (4, 7));
        let a8 = Coord::from_algebraic("a8").unwrap();
        assert_eq!((a8.x(), a8.y()), (0, 0));
        let h1 = Coord::from_algebraic("H1").unwrap();
        assert_eq!((h1.x(), h1.y()), (7, 7));
    }

    #[test]
    fn display_matches_parse() {
        for c in Coord::all() {
            let name = c.to_string();
            assert_eq!(name.parse::<Coord>().unwrap(), c);
        }
        assert_eq!(format!("{:?}", Coord::new(4, 4).unwrap()), "Coord(e4)");
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        assert_eq!(
            Coord::new(8, 0),
            Err(CoordError::OutOfBounds { x: 8, y: 0 })
        );
        assert!(Coord::new(0, 200).is_err());
        assert!(Coord::new(7, 7).is_ok());
    }

    #[test]
    fn invalid_names() {
        for bad in ["", "e", "e9", "i1", "e10", "4e"] {
            assert!(Coord::from_algebraic(bad).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn offset_stays_on_grid() {
        let a8 = Coord::new(0, 0).unwrap();
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(1, 1), Some(Coord::new(1, 1).unwrap()));
        let h1 = Coord::new(7, 7).unwrap();
        assert_eq!(h1.offset(0, 1), None);
    }

    #[test]
    fn distance_and_delta() {
        let e1 = Coord::from_algebraic("e1").unwrap();
        let g1 = Coord::from_algebraic("g1").unwrap();
        let f2 = Coord::from_algebraic("f2").unwrap();
        assert_eq!(e1.delta(g1), (2, 0));
        assert_eq!(e1.distance(g1), 2);
        assert_eq!(e1.distance(f2), 1);
    }

    #[test]
    fn all_is_row_major() {
        let all: Vec<Coord> = Coord::all().collect();
        assert_eq!(all.len(), 64);
        for (i, c) in all.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }
}
