//! Move representation and the move error taxonomy.

use std::fmt;

use thiserror::Error;

use sanchess_core::{Color, Coordinate, File, PieceKind, Rank};

/// Errors produced while parsing or resolving a move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The token does not match the accepted move grammar. Raised at parse
    /// time; never reaches board logic.
    #[error("move '{0}' does not match algebraic notation")]
    WrongMoveFormat(String),

    /// No piece of the declared kind and side can legally reach the
    /// destination under the declared capture semantics.
    #[error("no {kind} can legally play '{text}'")]
    NoValidSourcePieces { text: String, kind: PieceKind },

    /// Two or more pieces qualify; the notation under-specifies the source.
    #[error("'{text}' is ambiguous between several {kind} moves")]
    AmbiguousMove {
        text: String,
        kind: PieceKind,
        /// Source squares of all qualifying pieces.
        candidates: Vec<Coordinate>,
    },
}

/// Error for a batch replay: the index and text of the first failing move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("move {index} ('{text}'): {source}")]
pub struct BatchError {
    pub index: usize,
    pub text: String,
    #[source]
    pub source: MoveError,
}

/// The two castling directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// King-side, `O-O`.
    King,
    /// Queen-side, `O-O-O`.
    Queen,
}

/// A parsed notation token.
///
/// Constructed once by the parser and never modified afterwards; legality
/// resolution produces a separate [`ResolvedMove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// The raw token as given by the caller, for error reporting.
    pub text: String,
    /// What the token asks for.
    pub target: MoveTarget,
}

/// The board action a notation token requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// A piece move to a destination square.
    Destination(Destination),
    /// One of the two castling literals. King and rook squares are fixed
    /// by the side to move, so no destination is carried.
    Castle(CastleSide),
}

/// The destination form of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    /// Declared piece kind; pawn when the token has no letter prefix.
    pub kind: PieceKind,
    pub to: Coordinate,
    /// True iff a capture marker was present.
    pub capture: bool,
    /// Disambiguating source file, when given.
    pub source_file: Option<File>,
    /// Disambiguating source rank, when given.
    pub source_rank: Option<Rank>,
    /// Promotion piece from an `=P` suffix.
    pub promotion: Option<PieceKind>,
}

/// A fully resolved move: the unique legal interpretation of a parsed
/// token against a particular game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMove {
    /// The raw token this move was resolved from.
    pub text: String,
    /// The side that played the move.
    pub color: Color,
    /// The kind of the moving piece (the king, for castling).
    pub kind: PieceKind,
    /// Resolved source square.
    pub from: Coordinate,
    /// Destination square.
    pub to: Coordinate,
    /// Square of the captured piece, if any. Differs from `to` exactly
    /// when the capture is en passant.
    pub captures: Option<Coordinate>,
    /// True iff this is an en passant capture.
    pub en_passant: bool,
    /// True iff this is a pawn double-step (feeds the next move's en
    /// passant check).
    pub double_step: bool,
    /// Castling direction, if this move castles.
    pub castle: Option<CastleSide>,
    /// The rook relocation performed alongside a castling move.
    pub rook: Option<(Coordinate, Coordinate)>,
    /// Piece kind a promoting pawn becomes.
    pub promotion: Option<PieceKind>,
}

impl fmt::Display for ResolvedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            if let Some(c) = kind.to_san_char() {
                write!(f, "={}", c)?;
            }
        }
        Ok(())
    }
}
