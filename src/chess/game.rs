//! A full game of chess: the current [`Position`] plus everything that does
//! not fit into a single position: the history of prior positions, the
//! ordered move list, the game status and the header tags an external PGN
//! writer needs.

use std::collections::HashMap;

use crate::chess::core::{Color, Move, MoveList};
use crate::chess::position::Position;
use crate::chess::{notation, IllegalMove};

/// Where the game currently stands.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Draw,
    WhiteWon,
    BlackWon,
}

/// The single source of truth for a played game.
///
/// [`Game::make_move`] is the validated mutation path: it rejects anything
/// that is not in the legal move list, snapshots the position for O(1)
/// unmake, maintains the long-algebraic move list and detects the end of the
/// game. The raw [`Position::make_move`] skips all of that and is reserved
/// for the search, which only ever applies moves it just generated.
#[derive(Clone)]
pub struct Game {
    position: Position,
    history: Vec<Position>,
    move_list: Vec<String>,
    status: Status,
    headers: HashMap<String, String>,
}

impl Game {
    /// Starts a new game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::starting())
    }

    /// Starts a game from a FEN string.
    ///
    /// # Errors
    ///
    /// Propagates [`Position::from_fen`] failures.
    pub fn from_fen(fen: &str) -> anyhow::Result<Self> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    /// Starts a game from an arbitrary (validated) position. The status is
    /// probed right away: the position may already be a mate or stalemate.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let mut game = Self {
            position,
            history: Vec::new(),
            move_list: Vec::new(),
            status: Status::InProgress,
            headers: HashMap::new(),
        };
        game.detect_end();
        game
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Moves played so far, in long algebraic form.
    #[must_use]
    pub fn move_list(&self) -> &[String] {
        &self.move_list
    }

    /// Number of plies made through this `Game` (not counting any moves
    /// already baked into a loaded FEN).
    #[must_use]
    pub fn plies(&self) -> usize {
        self.history.len()
    }

    /// Header tags for an external PGN writer. Opaque to the engine.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Sets a header tag (e.g. `White`, `Black`, `Date`).
    pub fn set_header(&mut self, key: &str, value: &str) {
        let _ = self.headers.insert(key.to_string(), value.to_string());
    }

    /// Legal moves in the current position; empty once the game has ended.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        match self.status {
            Status::InProgress => self.position.generate_moves(),
            _ => MoveList::new(),
        }
    }

    /// Applies a move after validating it against the legal move list.
    ///
    /// # Errors
    ///
    /// [`IllegalMove`] if the move is not legal in the current position or
    /// the game is already over.
    pub fn make_move(&mut self, next_move: &Move) -> anyhow::Result<()> {
        if self.status != Status::InProgress
            || !self.position.generate_moves().contains(next_move)
        {
            return Err(IllegalMove(next_move.to_string()).into());
        }
        let long = notation::long_san(&self.position, next_move);
        self.history.push(self.position.clone());
        self.position.make_move(next_move);
        self.move_list.push(long);
        self.detect_end();
        Ok(())
    }

    /// Parses a SAN move (short or long form) and applies it.
    ///
    /// # Errors
    ///
    /// Parse errors for malformed input, [`IllegalMove`] for moves that are
    /// not legal in the current position.
    pub fn make_san(&mut self, input: &str) -> anyhow::Result<Move> {
        let next_move = notation::parse_san(&self.position, input)?;
        self.make_move(&next_move)?;
        Ok(next_move)
    }

    /// Parses a UCI coordinate move and applies it.
    ///
    /// # Errors
    ///
    /// Parse errors for malformed input, [`IllegalMove`] for moves that are
    /// not legal in the current position.
    pub fn make_uci(&mut self, input: &str) -> anyhow::Result<Move> {
        let next_move = notation::parse_uci(&self.position, input)?;
        self.make_move(&next_move)?;
        Ok(next_move)
    }

    /// Undoes the last move made through this `Game` by restoring the
    /// snapshot taken when it was made. Returns `false` when there is
    /// nothing to undo.
    pub fn unmake_move(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.position = previous;
                let _ = self.move_list.pop();
                // The move was made in a game that was still running.
                self.status = Status::InProgress;
                true
            },
            None => false,
        }
    }

    /// Probes the side to move for legal replies. No replies in check means
    /// the previous ply delivered mate; no replies out of check is a
    /// stalemate. Nothing can end before the fourth ply, so the probe is
    /// skipped for the first moves of a fresh game (positions loaded from
    /// FEN carry their move counters and are always probed).
    fn detect_end(&mut self) {
        if self.position.plies_played() < 4 {
            return;
        }
        if !self.position.generate_moves().is_empty() {
            return;
        }
        self.status = if self.position.in_check() {
            // The side to move has no escape: the side that just moved won.
            match self.position.us() {
                Color::White => Status::BlackWon,
                Color::Black => Status::WhiteWon,
            }
        } else {
            Status::Draw
        };
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
