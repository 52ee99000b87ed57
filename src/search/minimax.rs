//! Implementation of [Minimax] with [Alpha-Beta pruning] and batched leaf
//! evaluation.
//!
//! Scores are always from the root side's point of view: the root side
//! maximises and raises alpha, the opponent minimises and lowers beta, and
//! a node cuts off as soon as alpha meets beta. Static evaluations live in
//! `[-1, 1]`; mates are pushed outside that range so that any forced mate
//! strictly dominates any evaluation, and mates closer to the root dominate
//! deeper ones.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax
//! [Alpha-Beta pruning]: https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning

use arrayvec::ArrayVec;

use crate::chess::core::{Color, Move};
use crate::chess::position::Position;
use crate::evaluation::{encode, Encoding, Evaluator};
use crate::search::{Depth, SearchControl};

/// How many sibling leaves are scored per evaluator call. Network-backed
/// evaluators amortize per-call overhead across the batch.
pub const LEAF_BATCH: usize = 5;

/// Offset that lifts mate scores strictly above every static evaluation.
/// Evaluations fill the closed interval `[-1, 1]`, so a mate with no
/// remaining depth still has to clear a maximal static score.
const MATE_BASE: f32 = 2.0;

/// Searches `position` to `max_depth` plies and returns the best move with
/// its score for the side to move at the root.
///
/// Returns `(None, 0.0)` when the root has no legal moves (the game is
/// already over); in every other case a legal move is returned, even if the
/// search is stopped before finishing its first child.
pub fn search<E>(
    position: &Position,
    max_depth: Depth,
    evaluator: &mut E,
    control: &mut SearchControl,
) -> (Option<Move>, f32)
where
    E: Evaluator + ?Sized,
{
    minimax(
        position,
        position.us(),
        f32::NEG_INFINITY,
        f32::INFINITY,
        max_depth.max(1),
        evaluator,
        control,
    )
}

fn minimax<E>(
    position: &Position,
    root_side: Color,
    mut alpha: f32,
    mut beta: f32,
    depth: Depth,
    evaluator: &mut E,
    control: &mut SearchControl,
) -> (Option<Move>, f32)
where
    E: Evaluator + ?Sized,
{
    let moves = position.generate_moves();
    if moves.is_empty() {
        return (None, terminal_score(position, root_side, depth));
    }

    let maximizing = position.us() == root_side;
    let mut best_move = moves[0];
    let mut best = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };

    if depth <= 1 {
        // Leaf level: score the children in batches, resolving mates and
        // stalemates without consulting the evaluator.
        'batches: for batch in moves.chunks(LEAF_BATCH) {
            if control.should_stop() {
                break;
            }
            let mut resolved: ArrayVec<Option<f32>, LEAF_BATCH> = ArrayVec::new();
            let mut pending: ArrayVec<Encoding, LEAF_BATCH> = ArrayVec::new();
            for next_move in batch {
                let mut child = position.clone();
                child.make_move(next_move);
                if child.generate_moves().is_empty() {
                    resolved.push(Some(terminal_score(&child, root_side, 0)));
                } else {
                    resolved.push(None);
                    pending.push(encode(&child));
                }
            }
            let mut evaluations = if pending.is_empty() {
                Vec::new()
            } else {
                evaluator.evaluate(&pending, root_side)
            }
            .into_iter();

            for (next_move, slot) in batch.iter().zip(resolved) {
                let score = match slot {
                    Some(terminal) => terminal,
                    None => evaluations.next().expect("one evaluation per board"),
                };
                if maximizing {
                    if score > best {
                        best = score;
                        best_move = *next_move;
                    }
                    alpha = alpha.max(best);
                } else {
                    if score < best {
                        best = score;
                        best_move = *next_move;
                    }
                    beta = beta.min(best);
                }
                if alpha >= beta {
                    break 'batches;
                }
            }
        }
        return (Some(best_move), best);
    }

    for next_move in &moves {
        if control.should_stop() {
            break;
        }
        let mut child = position.clone();
        child.make_move(next_move);
        let (_, score) = minimax(&child, root_side, alpha, beta, depth - 1, evaluator, control);
        if maximizing {
            if score > best {
                best = score;
                best_move = *next_move;
            }
            alpha = alpha.max(best);
        } else {
            if score < best {
                best = score;
                best_move = *next_move;
            }
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    (Some(best_move), best)
}

/// Scores a position whose side to move has no legal replies. A checkmate
/// this many plies above the horizon is worth more than one right at it, so
/// the remaining depth is added on top of the base; the sign flips when the
/// mated side is the root side. A stalemate is dead even.
fn terminal_score(position: &Position, root_side: Color, depth: Depth) -> f32 {
    if position.in_check() {
        let score = MATE_BASE + f32::from(depth);
        if position.us() == root_side {
            -score
        } else {
            score
        }
    } else {
        0.0
    }
}
