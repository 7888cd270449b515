//! Pieces and their movement geometry.

use crate::Direction::{East, North, NorthEast, NorthWest, South, SouthEast, SouthWest, West};
use crate::MovePattern::{Continuous, DoubleStep, Shape, Step};
use crate::{Color, MovePattern};

const KING_PATTERNS: [MovePattern; 8] = [
    Step(North),
    Step(NorthEast),
    Step(East),
    Step(SouthEast),
    Step(South),
    Step(SouthWest),
    Step(West),
    Step(NorthWest),
];

const QUEEN_PATTERNS: [MovePattern; 8] = [
    Continuous(North),
    Continuous(NorthEast),
    Continuous(East),
    Continuous(SouthEast),
    Continuous(South),
    Continuous(SouthWest),
    Continuous(West),
    Continuous(NorthWest),
];

const ROOK_PATTERNS: [MovePattern; 4] = [
    Continuous(North),
    Continuous(East),
    Continuous(South),
    Continuous(West),
];

const BISHOP_PATTERNS: [MovePattern; 4] = [
    Continuous(NorthEast),
    Continuous(SouthEast),
    Continuous(SouthWest),
    Continuous(NorthWest),
];

const KNIGHT_PATTERNS: [MovePattern; 8] = [
    Shape(North, North, East),
    Shape(North, North, West),
    Shape(East, East, North),
    Shape(East, East, South),
    Shape(South, South, East),
    Shape(South, South, West),
    Shape(West, West, North),
    Shape(West, West, South),
];

// Pawn geometry is the one state-dependent case: the double-step is only
// available while the pawn is unmoved, and "forward" is mirrored for Black.
// The diagonal steps are capture-only; the resolver enforces that.
const WHITE_PAWN_UNMOVED: [MovePattern; 4] = [
    Step(North),
    DoubleStep(North, North),
    Step(NorthEast),
    Step(NorthWest),
];

const WHITE_PAWN_MOVED: [MovePattern; 3] = [Step(North), Step(NorthEast), Step(NorthWest)];

const BLACK_PAWN_UNMOVED: [MovePattern; 4] = [
    Step(South),
    DoubleStep(South, South),
    Step(SouthEast),
    Step(SouthWest),
];

const BLACK_PAWN_MOVED: [MovePattern; 3] = [Step(South), Step(SouthEast), Step(SouthWest)];

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the index of this piece kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parses a SAN piece letter. Pawns have no letter in SAN, so 'P' is
    /// not accepted here.
    #[inline]
    pub const fn from_san_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns the SAN letter for this piece kind, or `None` for pawns.
    #[inline]
    pub const fn to_san_char(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    /// Returns the board letter for this piece with the given color,
    /// uppercase for White and lowercase for Black.
    pub const fn to_board_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Returns true if this piece slides along continuous directions
    /// (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: its kind, owner, and whether it has moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            kind,
            color,
            moved: false,
        }
    }

    /// Returns the movement patterns available to this piece in its
    /// current state.
    pub const fn patterns(&self) -> &'static [MovePattern] {
        match (self.kind, self.color, self.moved) {
            (PieceKind::Pawn, Color::White, false) => &WHITE_PAWN_UNMOVED,
            (PieceKind::Pawn, Color::White, true) => &WHITE_PAWN_MOVED,
            (PieceKind::Pawn, Color::Black, false) => &BLACK_PAWN_UNMOVED,
            (PieceKind::Pawn, Color::Black, true) => &BLACK_PAWN_MOVED,
            (PieceKind::Knight, ..) => &KNIGHT_PATTERNS,
            (PieceKind::Bishop, ..) => &BISHOP_PATTERNS,
            (PieceKind::Rook, ..) => &ROOK_PATTERNS,
            (PieceKind::Queen, ..) => &QUEEN_PATTERNS,
            (PieceKind::King, ..) => &KING_PATTERNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn san_letters() {
        assert_eq!(PieceKind::from_san_char('N'), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_san_char('Q'), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_san_char('P'), None);
        assert_eq!(PieceKind::from_san_char('x'), None);

        assert_eq!(PieceKind::Pawn.to_san_char(), None);
        assert_eq!(PieceKind::King.to_san_char(), Some('K'));
    }

    #[test]
    fn board_chars() {
        assert_eq!(PieceKind::Pawn.to_board_char(Color::White), 'P');
        assert_eq!(PieceKind::Pawn.to_board_char(Color::Black), 'p');
        assert_eq!(PieceKind::Knight.to_board_char(Color::Black), 'n');
    }

    #[test]
    fn is_slider() {
        assert!(!PieceKind::Pawn.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(PieceKind::Bishop.is_slider());
        assert!(PieceKind::Rook.is_slider());
        assert!(PieceKind::Queen.is_slider());
        assert!(!PieceKind::King.is_slider());
    }

    #[test]
    fn pawn_double_step_requires_unmoved() {
        let fresh = Piece::new(Color::White, PieceKind::Pawn);
        assert!(fresh
            .patterns()
            .iter()
            .any(|p| matches!(p, MovePattern::DoubleStep(..))));

        let moved = Piece {
            moved: true,
            ..fresh
        };
        assert!(!moved
            .patterns()
            .iter()
            .any(|p| matches!(p, MovePattern::DoubleStep(..))));
    }

    #[test]
    fn pawn_forward_is_mirrored_for_black() {
        let white = Piece::new(Color::White, PieceKind::Pawn);
        let black = Piece::new(Color::Black, PieceKind::Pawn);
        assert!(white
            .patterns()
            .contains(&MovePattern::Step(Direction::North)));
        assert!(black
            .patterns()
            .contains(&MovePattern::Step(Direction::South)));
    }

    #[test]
    fn pattern_table_sizes() {
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).patterns().len(), 8);
        assert_eq!(Piece::new(Color::White, PieceKind::Bishop).patterns().len(), 4);
        assert_eq!(Piece::new(Color::White, PieceKind::Rook).patterns().len(), 4);
        assert_eq!(Piece::new(Color::White, PieceKind::Queen).patterns().len(), 8);
        assert_eq!(Piece::new(Color::White, PieceKind::King).patterns().len(), 8);
    }

    #[test]
    fn sliders_use_continuous_patterns_only() {
        for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
            let piece = Piece::new(Color::White, kind);
            assert!(piece
                .patterns()
                .iter()
                .all(|p| matches!(p, MovePattern::Continuous(_))));
        }
    }

    #[test]
    fn knight_shapes_end_a_knight_move_away() {
        for pattern in Piece::new(Color::Black, PieceKind::Knight).patterns() {
            let MovePattern::Shape(a, b, c) = *pattern else {
                panic!("knight table must contain shapes only");
            };
            let file = a.file_delta() + b.file_delta() + c.file_delta();
            let rank = a.rank_delta() + b.rank_delta() + c.rank_delta();
            assert_eq!(file.abs() + rank.abs(), 3);
            assert!(file.abs() == 1 || file.abs() == 2);
        }
    }
}
