//! Conversions between the internal move representation and the textual
//! notations the engine speaks: Standard Algebraic (short and long forms)
//! and the UCI coordinate form.
//!
//! Standard Algebraic depends on the position a move is played in, so every
//! function here takes the pre-move [`Position`]. Parsing resolves the input
//! against the legal move list, which both disambiguates and rejects illegal
//! input in one step.

use std::collections::HashSet;

use anyhow::bail;
use itertools::Itertools;

use crate::chess::core::{File, Move, MoveKind, PieceKind, Promotion, Rank, Square};
use crate::chess::position::Position;
use crate::chess::IllegalMove;

/// Renders the short Standard Algebraic form of a legal move: piece letter
/// (omitted for pawns), capture marker, destination, promotion suffix. Pawn
/// captures are prefixed with the source file. Check and mate suffixes are
/// never produced.
///
/// The short form may be ambiguous when several same-typed pieces reach the
/// destination; [`annotated_moves`] swaps in the long form for those.
#[must_use]
pub fn short_san(position: &Position, next_move: &Move) -> String {
    match next_move.kind() {
        MoveKind::CastleShort => return "O-O".to_string(),
        MoveKind::CastleLong => return "O-O-O".to_string(),
        _ => (),
    }
    let moving = position
        .at(next_move.from())
        .expect("SAN of a move from an empty square");
    let mut result = String::new();
    match moving.kind.algebraic_letter() {
        Some(letter) => result.push(letter),
        // A capturing pawn is identified by its source file.
        None if next_move.is_capture() => result.push_str(&next_move.from().file().to_string()),
        None => (),
    }
    if next_move.is_capture() {
        result.push('x');
    }
    result.push_str(&next_move.to().to_string());
    push_promotion_suffix(&mut result, next_move);
    result
}

/// Renders the long Standard Algebraic form: like [`short_san`] but with the
/// full source square spelled out between the piece letter and the
/// destination (`Ng1f3`, `e5xd6`, `a7a8=Q`).
#[must_use]
pub fn long_san(position: &Position, next_move: &Move) -> String {
    match next_move.kind() {
        MoveKind::CastleShort => return "O-O".to_string(),
        MoveKind::CastleLong => return "O-O-O".to_string(),
        _ => (),
    }
    let moving = position
        .at(next_move.from())
        .expect("SAN of a move from an empty square");
    let mut result = String::new();
    if let Some(letter) = moving.kind.algebraic_letter() {
        result.push(letter);
    }
    result.push_str(&next_move.from().to_string());
    if next_move.is_capture() {
        result.push('x');
    }
    result.push_str(&next_move.to().to_string());
    push_promotion_suffix(&mut result, next_move);
    result
}

fn push_promotion_suffix(result: &mut String, next_move: &Move) {
    if let Some(promotion) = next_move.promotion() {
        result.push('=');
        result.push(promotion.uci_letter().to_ascii_uppercase());
    }
}

/// Returns every legal move of the position together with its unambiguous
/// Standard Algebraic form: the short form where it is unique, the long form
/// where several legal moves would share the same short form.
#[must_use]
pub fn annotated_moves(position: &Position) -> Vec<(Move, String)> {
    let moves = position.generate_moves();
    let shorts: Vec<String> = moves
        .iter()
        .map(|next_move| short_san(position, next_move))
        .collect();
    let duplicates: HashSet<&String> = shorts.iter().duplicates().collect();
    moves
        .iter()
        .zip(&shorts)
        .map(|(next_move, short)| {
            let san = if duplicates.contains(short) {
                long_san(position, next_move)
            } else {
                short.clone()
            };
            (*next_move, san)
        })
        .collect()
}

/// Parses a move in Standard Algebraic Notation (short or long form) and
/// resolves it against the legal moves of `position`.
///
/// Accepted on input but ignored: trailing `+`/`#`, the informational
/// `e.p.` suffix, `0-0`/`0-0-0` as castling synonyms.
///
/// # Errors
///
/// Returns a plain parse error for text that is not SAN at all, and
/// [`IllegalMove`] for well-formed moves that are not legal in the position
/// (including ambiguous short forms that match several pieces).
pub fn parse_san(position: &Position, input: &str) -> anyhow::Result<Move> {
    if !input.is_ascii() {
        bail!("moves are plain ASCII, got '{input}'");
    }
    let trimmed = input
        .trim()
        .trim_end_matches(['+', '#'])
        .trim_end_matches("e.p.")
        .trim_end();
    if trimmed.is_empty() {
        bail!("empty move");
    }

    let legal = position.generate_moves();
    match trimmed {
        "O-O" | "0-0" => {
            return legal
                .iter()
                .find(|next_move| next_move.kind() == MoveKind::CastleShort)
                .copied()
                .ok_or_else(|| IllegalMove(input.trim().to_string()).into());
        },
        "O-O-O" | "0-0-0" => {
            return legal
                .iter()
                .find(|next_move| next_move.kind() == MoveKind::CastleLong)
                .copied()
                .ok_or_else(|| IllegalMove(input.trim().to_string()).into());
        },
        _ => (),
    }

    let mut rest = trimmed;

    let mut piece = PieceKind::Pawn;
    if let Some(first) = rest.chars().next() {
        if first.is_ascii_uppercase() {
            piece = PieceKind::try_from(first)?;
            rest = &rest[1..];
        }
    }

    let mut promotion = None;
    if let Some((body, promo)) = rest.split_once('=') {
        let mut promo_chars = promo.chars();
        match (promo_chars.next(), promo_chars.next()) {
            (Some(letter), None) => promotion = Some(Promotion::try_from(letter)?),
            _ => bail!("malformed promotion suffix: '{promo}'"),
        }
        rest = body;
    }

    let capture = rest.contains('x');
    let rest: String = rest.chars().filter(|ch| *ch != 'x').collect();

    // The last two characters are the destination; whatever precedes them
    // disambiguates the source (a file, a rank, or the full square).
    if rest.len() < 2 {
        bail!("malformed move: '{input}'");
    }
    let (hints, destination) = rest.split_at(rest.len() - 2);
    let destination = Square::try_from(destination)?;
    let (mut file_hint, mut rank_hint): (Option<File>, Option<Rank>) = (None, None);
    match hints.len() {
        0 => (),
        1 => {
            let hint = hints.chars().next().expect("one hint character");
            if let Ok(file) = File::try_from(hint) {
                file_hint = Some(file);
            } else if let Ok(rank) = Rank::try_from(hint) {
                rank_hint = Some(rank);
            } else {
                bail!("malformed disambiguation: '{hints}'");
            }
        },
        2 => {
            let source = Square::try_from(hints)?;
            file_hint = Some(source.file());
            rank_hint = Some(source.rank());
        },
        _ => bail!("malformed move: '{input}'"),
    }

    let matches: Vec<Move> = legal
        .iter()
        .filter(|next_move| {
            position.at(next_move.from()).map(|p| p.kind) == Some(piece)
                && next_move.to() == destination
                && next_move.promotion() == promotion
                && next_move.is_capture() == capture
                && file_hint.map_or(true, |file| next_move.from().file() == file)
                && rank_hint.map_or(true, |rank| next_move.from().rank() == rank)
                && !next_move.is_castle()
        })
        .copied()
        .collect();
    match matches.as_slice() {
        [only] => Ok(*only),
        [] => Err(IllegalMove(input.trim().to_string()).into()),
        _ => bail!("ambiguous move: '{input}' matches {} pieces", matches.len()),
    }
}

/// Parses a move in the UCI coordinate form (`e2e4`, `e7e8q`; castling as
/// the king move `e1g1`) and resolves it against the legal moves of
/// `position`.
///
/// # Errors
///
/// Returns a parse error for malformed input, [`IllegalMove`] for a
/// well-formed move that is not legal in the position.
pub fn parse_uci(position: &Position, input: &str) -> anyhow::Result<Move> {
    let input = input.trim();
    if !input.is_ascii() || (input.len() != 4 && input.len() != 5) {
        bail!("UCI move should be 4 or 5 chars, got '{input}'");
    }
    let from = Square::try_from(&input[0..2])?;
    let to = Square::try_from(&input[2..4])?;
    let promotion = match input.chars().nth(4) {
        Some(letter) => Some(Promotion::try_from(letter)?),
        None => None,
    };
    position
        .generate_moves()
        .iter()
        .find(|next_move| {
            next_move.from() == from
                && next_move.to() == to
                && next_move.promotion() == promotion
        })
        .copied()
        .ok_or_else(|| IllegalMove(input.to_string()).into())
}
