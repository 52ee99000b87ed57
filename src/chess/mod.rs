//! Implementation of chess environment, its rules and specifics.

use std::fmt;

pub mod attacks;
pub mod board;
pub mod core;
pub mod game;
pub mod notation;
pub mod position;

/// An externally supplied move that is not in the legal move list of the
/// current position.
///
/// Carried inside [`anyhow::Error`]; callers that need to distinguish it from
/// parse failures can downcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalMove(pub String);

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "illegal move: {}", self.0)
    }
}

impl std::error::Error for IllegalMove {}
