//! Attack detection: is a given square attacked by a given player?
//!
//! This is the hot path of the move generator (every candidate move is
//! checked for leaving the king attacked), so the scan works directly on the
//! board without allocating and without recursing into move generation.

use crate::chess::board::Board;
use crate::chess::core::{Color, Direction, Piece, PieceKind, Square};

/// Knight jumps as (file delta, rank delta) pairs.
pub(in crate::chess) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Returns the square offset by the given file and rank deltas, or `None` if
/// it falls off the board.
pub(in crate::chess) fn offset(square: Square, file_delta: i8, rank_delta: i8) -> Option<Square> {
    let file = square.file() as i8 + file_delta;
    let rank = square.rank() as i8 + rank_delta;
    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return None;
    }
    Some(Square::new(
        (file as u8).try_into().ok()?,
        (rank as u8).try_into().ok()?,
    ))
}

/// Checks whether `target` is attacked by any piece of `attacker`.
///
/// A square is attacked iff:
/// - an enemy pawn sits one rank towards the attacker's side on an adjacent
///   file,
/// - an enemy knight sits at any of the eight knight offsets,
/// - an enemy king sits on any of the eight adjacent squares,
/// - the nearest piece along a rank or file is an enemy rook or queen,
/// - the nearest piece along a diagonal is an enemy bishop or queen.
#[must_use]
pub fn is_attacked(board: &Board, target: Square, attacker: Color) -> bool {
    // Pawns: an attacking pawn stands one rank closer to its own side,
    // diagonally adjacent to the target.
    let pawn_rank_delta: i8 = match attacker {
        Color::White => -1,
        Color::Black => 1,
    };
    for file_delta in [-1, 1] {
        if let Some(square) = offset(target, file_delta, pawn_rank_delta) {
            if board.at(square)
                == Some(Piece {
                    owner: attacker,
                    kind: PieceKind::Pawn,
                })
            {
                return true;
            }
        }
    }

    for (file_delta, rank_delta) in KNIGHT_OFFSETS {
        if let Some(square) = offset(target, file_delta, rank_delta) {
            if board.at(square)
                == Some(Piece {
                    owner: attacker,
                    kind: PieceKind::Knight,
                })
            {
                return true;
            }
        }
    }

    // Enemy king contact: needed to reject king moves next to the other king.
    for (file_delta, rank_delta) in [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ] {
        if let Some(square) = offset(target, file_delta, rank_delta) {
            if board.at(square)
                == Some(Piece {
                    owner: attacker,
                    kind: PieceKind::King,
                })
            {
                return true;
            }
        }
    }

    // Sliding pieces: the nearest piece along the ray decides.
    for direction in Direction::ORTHOGONAL {
        if let Some(piece) = nearest_piece(board, target, direction) {
            if piece.owner == attacker
                && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen)
            {
                return true;
            }
        }
    }
    for direction in Direction::DIAGONAL {
        if let Some(piece) = nearest_piece(board, target, direction) {
            if piece.owner == attacker
                && matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    false
}

fn nearest_piece(board: &Board, from: Square, direction: Direction) -> Option<Piece> {
    let mut current = from;
    while let Some(next) = current.shift(direction) {
        if let Some(piece) = board.at(next) {
            return Some(piece);
        }
        current = next;
    }
    None
}
