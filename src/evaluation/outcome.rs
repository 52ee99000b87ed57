//! Adapter for externally trained outcome models.
//!
//! The external collaborator (typically a neural network) is an opaque
//! function from a batch of encoded boards to per-board outcome
//! probabilities. The adapter reduces those to the scalar contract of
//! [`Evaluator`] by picking the probability of the perspective side winning.
//! The model is never asked about checkmate; the search handles terminal
//! positions itself.

use crate::chess::core::Color;
use crate::evaluation::{Encoding, Evaluator};

/// What an outcome model predicts for a single board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutcomeProbabilities {
    #[allow(missing_docs)]
    pub draw: f32,
    #[allow(missing_docs)]
    pub black_win: f32,
    #[allow(missing_docs)]
    pub white_win: f32,
}

/// Wraps an opaque batch model into an [`Evaluator`].
///
/// The model receives the whole batch at once: batching is what makes
/// network inference affordable, and the search sizes its leaf batches
/// accordingly.
pub struct OutcomeEvaluator<M>
where
    M: FnMut(&[Encoding]) -> Vec<OutcomeProbabilities>,
{
    model: M,
}

impl<M> OutcomeEvaluator<M>
where
    M: FnMut(&[Encoding]) -> Vec<OutcomeProbabilities>,
{
    #[allow(missing_docs)]
    pub fn new(model: M) -> Self {
        Self { model }
    }
}

impl<M> Evaluator for OutcomeEvaluator<M>
where
    M: FnMut(&[Encoding]) -> Vec<OutcomeProbabilities>,
{
    fn evaluate(&mut self, boards: &[Encoding], perspective: Color) -> Vec<f32> {
        let outcomes = (self.model)(boards);
        debug_assert_eq!(outcomes.len(), boards.len());
        outcomes
            .iter()
            .map(|outcome| match perspective {
                Color::White => outcome.white_win,
                Color::Black => outcome.black_win,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::position::Position;
    use crate::evaluation::encode;

    #[test]
    fn reduces_to_perspective_probability() {
        let mut evaluator = OutcomeEvaluator::new(|boards: &[Encoding]| {
            boards
                .iter()
                .map(|_| OutcomeProbabilities {
                    draw: 0.2,
                    black_win: 0.3,
                    white_win: 0.5,
                })
                .collect()
        });
        let board = encode(&Position::starting());
        assert_eq!(evaluator.evaluate(&[board], Color::White), vec![0.5]);
        assert_eq!(evaluator.evaluate(&[board], Color::Black), vec![0.3]);
    }
}
