//! Board coordinates: files, ranks and their pairing.

use std::fmt;

use thiserror::Error;

use crate::Direction;

/// Errors that can occur when constructing a coordinate from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("invalid coordinate '{0}': expected a file a-h followed by a rank 1-8")]
    InvalidCoordinate(String),
}

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from a character ('a'-'h').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// Returns the file `delta` columns away, or `None` if that falls off
    /// the board.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let index = self as u8 as i16 + delta as i16;
        if index < 0 || index > 7 {
            return None;
        }
        File::from_index(index as u8)
    }

    /// Returns true if the two files are next to each other.
    #[inline]
    pub const fn is_adjacent(self, other: File) -> bool {
        (self as u8 as i8 - other as u8 as i8).abs() == 1
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Rank::R1),
            '2' => Some(Rank::R2),
            '3' => Some(Rank::R3),
            '4' => Some(Rank::R4),
            '5' => Some(Rank::R5),
            '6' => Some(Rank::R6),
            '7' => Some(Rank::R7),
            '8' => Some(Rank::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }

    /// Returns the rank `delta` rows away, or `None` if that falls off
    /// the board.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let index = self as u8 as i16 + delta as i16;
        if index < 0 || index > 7 {
            return None;
        }
        Rank::from_index(index as u8)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the board, addressed by file and rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    file: File,
    rank: Rank,
}

impl Coordinate {
    /// Creates a coordinate from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Coordinate { file, rank }
    }

    /// Parses a coordinate from algebraic notation (e.g. "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, CoordinateError> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (File::from_char(f), Rank::from_char(r)),
            _ => return Err(CoordinateError::InvalidCoordinate(s.to_string())),
        };
        match (file, rank) {
            (Some(file), Some(rank)) => Ok(Coordinate::new(file, rank)),
            _ => Err(CoordinateError::InvalidCoordinate(s.to_string())),
        }
    }

    /// Returns the file of this coordinate.
    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    /// Returns the rank of this coordinate.
    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns the flat 0-63 index, rank-major from a1.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank.index() * 8 + self.file.index()) as usize
    }

    /// Returns the neighbouring coordinate one step in `direction`, or
    /// `None` if the step leaves the board on either axis.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Coordinate> {
        let file = self.file.offset(direction.file_delta())?;
        let rank = self.rank.offset(direction.rank_delta())?;
        Some(Coordinate::new(file, rank))
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}{})", self.file, self.rank)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn file_offset_bounds() {
        assert_eq!(File::A.offset(1), Some(File::B));
        assert_eq!(File::A.offset(-1), None);
        assert_eq!(File::H.offset(1), None);
        assert_eq!(File::C.offset(0), Some(File::C));
    }

    #[test]
    fn rank_offset_bounds() {
        assert_eq!(Rank::R1.offset(1), Some(Rank::R2));
        assert_eq!(Rank::R1.offset(-1), None);
        assert_eq!(Rank::R8.offset(1), None);
        assert_eq!(Rank::R4.offset(2), Some(Rank::R6));
    }

    #[test]
    fn adjacent_files() {
        assert!(File::E.is_adjacent(File::F));
        assert!(File::E.is_adjacent(File::D));
        assert!(!File::E.is_adjacent(File::E));
        assert!(!File::A.is_adjacent(File::C));
    }

    #[test]
    fn from_algebraic() {
        let e4 = Coordinate::from_algebraic("e4").unwrap();
        assert_eq!(e4.file(), File::E);
        assert_eq!(e4.rank(), Rank::R4);

        assert!(Coordinate::from_algebraic("i1").is_err());
        assert!(Coordinate::from_algebraic("a9").is_err());
        assert!(Coordinate::from_algebraic("e").is_err());
        assert!(Coordinate::from_algebraic("e44").is_err());
        assert!(Coordinate::from_algebraic("").is_err());
    }

    #[test]
    fn round_trip_rendering() {
        for file in File::ALL {
            for rank in Rank::ALL {
                let coord = Coordinate::new(file, rank);
                let text = coord.to_string();
                assert_eq!(Coordinate::from_algebraic(&text), Ok(coord));
            }
        }
    }

    #[test]
    fn step_off_board() {
        let a1 = Coordinate::new(File::A, Rank::R1);
        assert_eq!(a1.step(Direction::South), None);
        assert_eq!(a1.step(Direction::West), None);
        assert_eq!(a1.step(Direction::SouthWest), None);
        assert_eq!(
            a1.step(Direction::NorthEast),
            Some(Coordinate::new(File::B, Rank::R2))
        );
    }

    proptest! {
        // Stepping out and back returns the original square whenever the
        // outward step stays on the board; a boundary step yields None, not
        // a wrapped coordinate.
        #[test]
        fn step_then_opposite_round_trips(
            file_index in 0u8..8,
            rank_index in 0u8..8,
            direction_index in 0usize..8,
        ) {
            let coord = Coordinate::new(
                File::from_index(file_index).unwrap(),
                Rank::from_index(rank_index).unwrap(),
            );
            let direction = Direction::ALL[direction_index];
            if let Some(stepped) = coord.step(direction) {
                prop_assert_eq!(stepped.step(direction.opposite()), Some(coord));
            }
        }
    }
}
