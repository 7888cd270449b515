//! Game state and move legality resolution.
//!
//! Resolution maps a parsed [`Move`] plus the current [`Board`] to the
//! unique piece that must move. It is a read-only computation producing a
//! [`ResolvedMove`]; the board is only mutated once a unique candidate has
//! been found, so a failed move leaves the state exactly as it was.

use sanchess_core::{Color, Coordinate, File, MovePattern, Piece, PieceKind};

use crate::board::Board;
use crate::mov::{BatchError, CastleSide, Destination, Move, MoveError, MoveTarget, ResolvedMove};
use crate::parser::parse_move;

/// The full state a move is resolved against: board, side to move, and
/// the previous move (needed for en passant).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    previous: Option<ResolvedMove>,
}

/// How a candidate piece reaches the destination.
#[derive(Debug, Clone, Copy)]
struct Reach {
    /// Square of the piece being captured, if any.
    captures: Option<Coordinate>,
    en_passant: bool,
    double_step: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a game in the standard starting position, White to move.
    pub fn new() -> Self {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            previous: None,
        }
    }

    /// Creates a game from an arbitrary board position.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        GameState {
            board,
            side_to_move,
            previous: None,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the last applied move, if any.
    pub fn previous_move(&self) -> Option<&ResolvedMove> {
        self.previous.as_ref()
    }

    /// Resolves a parsed move against the current state without touching
    /// the board.
    pub fn resolve(&self, mov: &Move) -> Result<ResolvedMove, MoveError> {
        match mov.target {
            MoveTarget::Castle(side) => self.resolve_castle(&mov.text, side),
            MoveTarget::Destination(dest) => self.resolve_destination(&mov.text, dest),
        }
    }

    /// Resolves and applies a parsed move, advancing the side to move.
    ///
    /// On failure the state is left untouched.
    pub fn apply_move(&mut self, mov: &Move) -> Result<ResolvedMove, MoveError> {
        let resolved = self.resolve(mov)?;
        self.commit(&resolved);
        Ok(resolved)
    }

    /// Parses and applies a single notation token.
    pub fn apply_san(&mut self, text: &str) -> Result<ResolvedMove, MoveError> {
        let mov = parse_move(text)?;
        self.apply_move(&mov)
    }

    /// Applies a sequence of notation tokens left to right, stopping at
    /// the first failure. Moves before the failing one stay applied.
    pub fn apply_moves<'a, I>(&mut self, moves: I) -> Result<(), BatchError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for (index, text) in moves.into_iter().enumerate() {
            if let Err(source) = self.apply_san(text) {
                return Err(BatchError {
                    index,
                    text: text.to_string(),
                    source,
                });
            }
        }
        Ok(())
    }

    fn resolve_destination(
        &self,
        text: &str,
        dest: Destination,
    ) -> Result<ResolvedMove, MoveError> {
        let color = self.side_to_move;

        // A declared promotion must target the mover's own final rank.
        if dest.promotion.is_some() && dest.to.rank() != color.promotion_rank() {
            return Err(MoveError::NoValidSourcePieces {
                text: text.to_string(),
                kind: dest.kind,
            });
        }
        // A pawn arriving on its final rank always promotes, to the queen
        // when the token does not name a piece.
        let promotion = if dest.kind == PieceKind::Pawn && dest.to.rank() == color.promotion_rank()
        {
            Some(dest.promotion.unwrap_or(PieceKind::Queen))
        } else {
            None
        };

        let mut matches: Vec<(Coordinate, Reach)> = Vec::new();
        for (from, piece) in self.board.pieces_of(color) {
            if piece.kind != dest.kind {
                continue;
            }
            if let Some(file) = dest.source_file {
                if from.file() != file {
                    continue;
                }
            }
            if let Some(rank) = dest.source_rank {
                if from.rank() != rank {
                    continue;
                }
            }
            if let Some(reach) = self.reach(from, piece, dest.to, dest.capture) {
                matches.push((from, reach));
            }
        }

        match matches.as_slice() {
            [] => Err(MoveError::NoValidSourcePieces {
                text: text.to_string(),
                kind: dest.kind,
            }),
            [(from, reach)] => Ok(ResolvedMove {
                text: text.to_string(),
                color,
                kind: dest.kind,
                from: *from,
                to: dest.to,
                captures: reach.captures,
                en_passant: reach.en_passant,
                double_step: reach.double_step,
                castle: None,
                rook: None,
                promotion,
            }),
            _ => Err(MoveError::AmbiguousMove {
                text: text.to_string(),
                kind: dest.kind,
                candidates: matches.iter().map(|(from, _)| *from).collect(),
            }),
        }
    }

    /// Tests whether `piece` standing on `from` can legally reach `to`
    /// under the declared capture semantics. Returns the capture square
    /// and flags when it can.
    fn reach(&self, from: Coordinate, piece: Piece, to: Coordinate, capture: bool) -> Option<Reach> {
        let destination = self.board.piece_at(to);

        // A piece can never land on its own side.
        if let Some(occupant) = destination {
            if occupant.color == piece.color {
                return None;
            }
        }
        // The capture marker must agree with the destination, the one
        // exception being a pawn capturing en passant onto an empty square.
        if !capture && destination.is_some() {
            return None;
        }
        if capture && destination.is_none() && piece.kind != PieceKind::Pawn {
            return None;
        }

        let plain = Reach {
            captures: destination.map(|_| to),
            en_passant: false,
            double_step: false,
        };

        for pattern in piece.patterns() {
            match *pattern {
                MovePattern::Step(direction) => {
                    if from.step(direction) != Some(to) {
                        continue;
                    }
                    if piece.kind != PieceKind::Pawn {
                        return Some(plain);
                    }
                    if direction.is_diagonal() {
                        // Diagonal pawn steps are capture-only.
                        if !capture {
                            continue;
                        }
                        if destination.is_some() {
                            return Some(plain);
                        }
                        if let Some(victim) = self.en_passant_victim(from, to) {
                            return Some(Reach {
                                captures: Some(victim),
                                en_passant: true,
                                double_step: false,
                            });
                        }
                        continue;
                    }
                    // A straight push must land on an empty square.
                    if capture || destination.is_some() {
                        continue;
                    }
                    return Some(plain);
                }
                MovePattern::DoubleStep(first, second) => {
                    if capture || destination.is_some() {
                        continue;
                    }
                    let intermediate = match from.step(first) {
                        Some(coord) => coord,
                        None => continue,
                    };
                    if self.board.piece_at(intermediate).is_some() {
                        continue;
                    }
                    if intermediate.step(second) != Some(to) {
                        continue;
                    }
                    return Some(Reach {
                        captures: None,
                        en_passant: false,
                        double_step: true,
                    });
                }
                MovePattern::Shape(a, b, c) => {
                    // Knights jump: only the landing square matters.
                    let landing = from
                        .step(a)
                        .and_then(|coord| coord.step(b))
                        .and_then(|coord| coord.step(c));
                    if landing != Some(to) {
                        continue;
                    }
                    return Some(plain);
                }
                MovePattern::Continuous(direction) => {
                    if !self.board.ray_reaches(from, direction, to) {
                        continue;
                    }
                    return Some(plain);
                }
            }
        }
        None
    }

    /// If the previous move was an opponent pawn double-step landing
    /// beside the pawn on `pawn_at`, and `to` is the square directly
    /// behind the landed pawn, returns the landed pawn's square.
    fn en_passant_victim(&self, pawn_at: Coordinate, to: Coordinate) -> Option<Coordinate> {
        let previous = self.previous.as_ref()?;
        if !previous.double_step {
            return None;
        }
        if previous.to.rank() != pawn_at.rank() {
            return None;
        }
        if !previous.to.file().is_adjacent(pawn_at.file()) {
            return None;
        }
        if previous.to.step(self.side_to_move.forward()) != Some(to) {
            return None;
        }
        Some(previous.to)
    }

    /// Full castling legality: king and rook unmoved on their home
    /// squares, the span between them empty, and the king's start,
    /// transit, and landing squares free of enemy attack.
    fn resolve_castle(&self, text: &str, side: CastleSide) -> Result<ResolvedMove, MoveError> {
        let color = self.side_to_move;
        let rank = color.back_rank();
        let (rook_file, king_to_file, rook_to_file) = match side {
            CastleSide::King => (File::H, File::G, File::F),
            CastleSide::Queen => (File::A, File::C, File::D),
        };
        let king_from = Coordinate::new(File::E, rank);
        let rook_from = Coordinate::new(rook_file, rank);

        let fail = || MoveError::NoValidSourcePieces {
            text: text.to_string(),
            kind: PieceKind::King,
        };

        match self.board.piece_at(king_from) {
            Some(piece) if piece.kind == PieceKind::King && piece.color == color && !piece.moved => {}
            _ => return Err(fail()),
        }
        match self.board.piece_at(rook_from) {
            Some(piece) if piece.kind == PieceKind::Rook && piece.color == color && !piece.moved => {}
            _ => return Err(fail()),
        }

        let between: &[File] = match side {
            CastleSide::King => &[File::F, File::G],
            CastleSide::Queen => &[File::B, File::C, File::D],
        };
        if between
            .iter()
            .any(|&file| self.board.piece_at(Coordinate::new(file, rank)).is_some())
        {
            return Err(fail());
        }

        let enemy = color.opposite();
        if [File::E, rook_to_file, king_to_file]
            .into_iter()
            .any(|file| self.board.is_attacked(Coordinate::new(file, rank), enemy))
        {
            return Err(fail());
        }

        Ok(ResolvedMove {
            text: text.to_string(),
            color,
            kind: PieceKind::King,
            from: king_from,
            to: Coordinate::new(king_to_file, rank),
            captures: None,
            en_passant: false,
            double_step: false,
            castle: Some(side),
            rook: Some((rook_from, Coordinate::new(rook_to_file, rank))),
            promotion: None,
        })
    }

    /// Applies a fully resolved move. Resolution has already established
    /// that every referenced square holds the expected piece.
    fn commit(&mut self, resolved: &ResolvedMove) {
        if let Some(square) = resolved.captures {
            self.board.take(square);
        }
        if let Some(mut piece) = self.board.take(resolved.from) {
            piece.moved = true;
            if let Some(kind) = resolved.promotion {
                piece.kind = kind;
            }
            self.board.place(resolved.to, piece);
        }
        if let Some((rook_from, rook_to)) = resolved.rook {
            if let Some(mut rook) = self.board.take(rook_from) {
                rook.moved = true;
                self.board.place(rook_to, rook);
            }
        }
        self.side_to_move = self.side_to_move.opposite();
        self.previous = Some(resolved.clone());
    }
}
