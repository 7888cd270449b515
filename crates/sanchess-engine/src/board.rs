//! Board representation.
//!
//! One owning value holds the whole 8x8 occupancy; every mutation goes
//! through [`Board::place`] and [`Board::take`], so a square is never
//! reachable through two handles at once.

use std::fmt;

use sanchess_core::{Color, Coordinate, Direction, File, MovePattern, Piece, PieceKind, Rank};

/// An 8x8 board mapping coordinates to optional pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates a board with the standard starting position: 16 pieces per
    /// side, none of them marked as moved.
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            board.place(
                Coordinate::new(file, Rank::R1),
                Piece::new(Color::White, kind),
            );
            board.place(
                Coordinate::new(file, Rank::R2),
                Piece::new(Color::White, PieceKind::Pawn),
            );
            board.place(
                Coordinate::new(file, Rank::R7),
                Piece::new(Color::Black, PieceKind::Pawn),
            );
            board.place(
                Coordinate::new(file, Rank::R8),
                Piece::new(Color::Black, kind),
            );
        }
        board
    }

    /// Returns the piece at the given coordinate, if any.
    #[inline]
    pub fn piece_at(&self, coord: Coordinate) -> Option<Piece> {
        self.squares[coord.index()]
    }

    /// Places a piece, returning whatever previously occupied the square.
    #[inline]
    pub fn place(&mut self, coord: Coordinate, piece: Piece) -> Option<Piece> {
        self.squares[coord.index()].replace(piece)
    }

    /// Removes and returns the piece at the given coordinate.
    #[inline]
    pub fn take(&mut self, coord: Coordinate) -> Option<Piece> {
        self.squares[coord.index()].take()
    }

    /// Iterates over all occupied squares.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|piece| (coordinate_at(index), piece)))
    }

    /// Iterates over all pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.iter().filter(move |(_, piece)| piece.color == color)
    }

    /// Counts the pieces of a given color and kind.
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind == kind)
            .count()
    }

    /// Returns a read-only snapshot of the occupancy, rank-major with
    /// `[0][0]` = a1. Display collaborators render from this.
    pub fn occupancy(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (coord, piece) in self.iter() {
            grid[coord.rank().index() as usize][coord.file().index() as usize] = Some(piece);
        }
        grid
    }

    /// Returns true if any piece of `by` could capture on `target` under
    /// its movement geometry. Pawn straight pushes never attack; pawn
    /// diagonals attack whether or not the square is occupied.
    pub fn is_attacked(&self, target: Coordinate, by: Color) -> bool {
        self.pieces_of(by)
            .any(|(from, piece)| self.attacks(from, piece, target))
    }

    fn attacks(&self, from: Coordinate, piece: Piece, target: Coordinate) -> bool {
        piece.patterns().iter().any(|pattern| match *pattern {
            MovePattern::Step(direction) => {
                (piece.kind != PieceKind::Pawn || direction.is_diagonal())
                    && from.step(direction) == Some(target)
            }
            // A double-step can never capture.
            MovePattern::DoubleStep(..) => false,
            MovePattern::Shape(a, b, c) => {
                let landing = from
                    .step(a)
                    .and_then(|coord| coord.step(b))
                    .and_then(|coord| coord.step(c));
                landing == Some(target)
            }
            MovePattern::Continuous(direction) => self.ray_reaches(from, direction, target),
        })
    }

    /// Walks `direction` from `from` and reports whether `target` is
    /// reached before any blocking piece. The target square itself may be
    /// occupied; squares short of it may not.
    pub(crate) fn ray_reaches(
        &self,
        from: Coordinate,
        direction: Direction,
        target: Coordinate,
    ) -> bool {
        let mut current = from;
        while let Some(next) = current.step(direction) {
            if next == target {
                return true;
            }
            if self.piece_at(next).is_some() {
                return false;
            }
            current = next;
        }
        false
    }
}

fn coordinate_at(index: usize) -> Coordinate {
    let file = match File::from_index((index % 8) as u8) {
        Some(f) => f,
        None => unreachable!(),
    };
    let rank = match Rank::from_index((index / 8) as u8) {
        Some(r) => r,
        None => unreachable!(),
    };
    Coordinate::new(file, rank)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.occupancy();
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{} ", rank)?;
            for file in File::ALL {
                let cell = grid[rank.index() as usize][file.index() as usize];
                let c = match cell {
                    Some(piece) => piece.kind.to_board_char(piece.color),
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(s: &str) -> Coordinate {
        Coordinate::from_algebraic(s).unwrap()
    }

    #[test]
    fn starting_position_counts() {
        let board = Board::starting_position();
        for color in [Color::White, Color::Black] {
            assert_eq!(board.count(color, PieceKind::Pawn), 8);
            assert_eq!(board.count(color, PieceKind::Knight), 2);
            assert_eq!(board.count(color, PieceKind::Bishop), 2);
            assert_eq!(board.count(color, PieceKind::Rook), 2);
            assert_eq!(board.count(color, PieceKind::Queen), 1);
            assert_eq!(board.count(color, PieceKind::King), 1);
        }
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        let e1 = board.piece_at(coord("e1")).unwrap();
        assert_eq!(e1.kind, PieceKind::King);
        assert_eq!(e1.color, Color::White);
        assert!(!e1.moved);

        let d8 = board.piece_at(coord("d8")).unwrap();
        assert_eq!(d8.kind, PieceKind::Queen);
        assert_eq!(d8.color, Color::Black);

        assert!(board.piece_at(coord("e4")).is_none());
    }

    #[test]
    fn place_and_take() {
        let mut board = Board::empty();
        let rook = Piece::new(Color::White, PieceKind::Rook);
        assert_eq!(board.place(coord("a1"), rook), None);
        assert_eq!(board.piece_at(coord("a1")), Some(rook));
        assert_eq!(board.take(coord("a1")), Some(rook));
        assert_eq!(board.piece_at(coord("a1")), None);
    }

    #[test]
    fn ray_stops_at_blockers() {
        let mut board = Board::empty();
        board.place(coord("a1"), Piece::new(Color::White, PieceKind::Rook));
        board.place(coord("a4"), Piece::new(Color::Black, PieceKind::Pawn));

        assert!(board.ray_reaches(coord("a1"), Direction::North, coord("a3")));
        // The blocker itself is reachable (a capture square).
        assert!(board.ray_reaches(coord("a1"), Direction::North, coord("a4")));
        // Nothing beyond it is.
        assert!(!board.ray_reaches(coord("a1"), Direction::North, coord("a5")));
    }

    #[test]
    fn attack_detection() {
        let mut board = Board::empty();
        board.place(coord("a1"), Piece::new(Color::White, PieceKind::Rook));
        board.place(coord("e5"), Piece::new(Color::White, PieceKind::Pawn));

        assert!(board.is_attacked(coord("a8"), Color::White));
        assert!(board.is_attacked(coord("h1"), Color::White));
        // Pawns attack diagonally, even onto empty squares.
        assert!(board.is_attacked(coord("d6"), Color::White));
        assert!(board.is_attacked(coord("f6"), Color::White));
        // Pawns do not attack straight ahead.
        assert!(!board.is_attacked(coord("e6"), Color::White));
        assert!(!board.is_attacked(coord("b3"), Color::White));
    }

    #[test]
    fn display_grid() {
        let board = Board::starting_position();
        let rendered = board.to_string();
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "8  r n b q k b n r");
        assert!(rendered.ends_with("   a b c d e f g h"));
    }
}
