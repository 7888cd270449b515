//! Algebraic move notation parsing.
//!
//! Accepted grammar, informally:
//! `[Piece]?[SourceFile]?[SourceRank]?[x]?[DestFile][DestRank][=Piece]?[+#]?`
//! or the castling literals `O-O` / `O-O-O` (also with zeros). A missing
//! piece letter means pawn. Check and mate suffixes are accepted and
//! discarded; legality against a board is not decided here.

use sanchess_core::{Coordinate, File, PieceKind, Rank};

use crate::mov::{CastleSide, Destination, Move, MoveError, MoveTarget};

/// Parses a trimmed notation token into a structured [`Move`].
///
/// Fails with [`MoveError::WrongMoveFormat`] when the token matches
/// neither the move grammar nor a castling literal.
pub fn parse_move(text: &str) -> Result<Move, MoveError> {
    let token = text.trim();
    if token.is_empty() {
        return Err(MoveError::WrongMoveFormat(token.to_string()));
    }

    let stripped = token.trim_end_matches(&['+', '#'][..]);

    if let Some(side) = parse_castle(stripped) {
        return Ok(Move {
            text: token.to_string(),
            target: MoveTarget::Castle(side),
        });
    }

    let target = parse_destination(stripped)
        .ok_or_else(|| MoveError::WrongMoveFormat(token.to_string()))?;
    Ok(Move {
        text: token.to_string(),
        target,
    })
}

fn parse_castle(token: &str) -> Option<CastleSide> {
    match token {
        "O-O" | "0-0" => Some(CastleSide::King),
        "O-O-O" | "0-0-0" => Some(CastleSide::Queen),
        _ => None,
    }
}

fn parse_destination(token: &str) -> Option<MoveTarget> {
    // Split off an `=P` promotion suffix first.
    let (body, promotion) = match token.split_once('=') {
        Some((body, suffix)) => {
            let mut chars = suffix.chars();
            let kind = chars.next().and_then(PieceKind::from_san_char)?;
            if chars.next().is_some() || kind == PieceKind::King {
                return None;
            }
            (body, Some(kind))
        }
        None => (token, None),
    };

    // The last two characters are always the destination square.
    let chars: Vec<char> = body.chars().collect();
    if chars.len() < 2 {
        return None;
    }
    let to_file = File::from_char(chars[chars.len() - 2])?;
    let to_rank = Rank::from_char(chars[chars.len() - 1])?;
    let to = Coordinate::new(to_file, to_rank);

    let mut prefix = &chars[..chars.len() - 2];

    // Optional piece letter; its absence means pawn.
    let kind = match prefix.first().and_then(|c| PieceKind::from_san_char(*c)) {
        Some(kind) => {
            prefix = &prefix[1..];
            kind
        }
        None => PieceKind::Pawn,
    };

    // Optional capture marker, directly before the destination.
    let capture = match prefix.last() {
        Some('x') => {
            prefix = &prefix[..prefix.len() - 1];
            true
        }
        _ => false,
    };

    // Whatever remains is disambiguation: a file, a rank, or both.
    let (source_file, source_rank) = match prefix {
        [] => (None, None),
        [c] => match (File::from_char(*c), Rank::from_char(*c)) {
            (Some(file), _) => (Some(file), None),
            (None, Some(rank)) => (None, Some(rank)),
            (None, None) => return None,
        },
        [f, r] => (Some(File::from_char(*f)?), Some(Rank::from_char(*r)?)),
        _ => return None,
    };

    // Promotion is only grammatical for a pawn arriving on a back rank;
    // which back rank belongs to the mover is checked at resolution.
    if promotion.is_some() && (kind != PieceKind::Pawn || !matches!(to_rank, Rank::R1 | Rank::R8)) {
        return None;
    }

    Some(MoveTarget::Destination(Destination {
        kind,
        to,
        capture,
        source_file,
        source_rank,
        promotion,
    }))
}
