//! Compass directions and piece movement patterns.

/// One of the eight compass directions on the board.
///
/// North points from White's side toward Black's, i.e. toward higher ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// All directions in clockwise order starting from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Returns the opposite direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// Returns the file change for one step in this direction.
    #[inline]
    pub const fn file_delta(self) -> i8 {
        match self {
            Direction::North | Direction::South => 0,
            Direction::NorthEast | Direction::East | Direction::SouthEast => 1,
            Direction::SouthWest | Direction::West | Direction::NorthWest => -1,
        }
    }

    /// Returns the rank change for one step in this direction.
    #[inline]
    pub const fn rank_delta(self) -> i8 {
        match self {
            Direction::North | Direction::NorthEast | Direction::NorthWest => 1,
            Direction::South | Direction::SouthEast | Direction::SouthWest => -1,
            Direction::East | Direction::West => 0,
        }
    }

    /// Returns true if this is a purely diagonal direction.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.file_delta() != 0 && self.rank_delta() != 0
    }
}

/// A movement shape a piece may use from its current square.
///
/// Patterns describe geometry only. Whether a reached square is actually
/// playable (occupancy, capture legality, pawn restrictions) is decided by
/// the legality resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovePattern {
    /// A single step in one direction (king, pawn push, pawn capture).
    Step(Direction),
    /// Two consecutive steps, both squares must be free (pawn double-step).
    DoubleStep(Direction, Direction),
    /// A fixed three-step leap where only the final square is a candidate
    /// destination; intermediate squares are jumped over (knight).
    Shape(Direction, Direction, Direction),
    /// Repeated steps in one direction until blocked or off the board
    /// (bishop, rook, queen).
    Continuous(Direction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn deltas_negate_under_opposite() {
        for d in Direction::ALL {
            assert_eq!(d.file_delta(), -d.opposite().file_delta());
            assert_eq!(d.rank_delta(), -d.opposite().rank_delta());
        }
    }

    #[test]
    fn diagonals() {
        assert!(Direction::NorthEast.is_diagonal());
        assert!(Direction::SouthWest.is_diagonal());
        assert!(!Direction::North.is_diagonal());
        assert!(!Direction::East.is_diagonal());
    }
}
