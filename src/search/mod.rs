//! Fixed-depth alpha-beta search over the chess game tree.
//!
//! The search is strictly sequential and runs on the caller's stack. The
//! only outside interaction is [`SearchControl`]: a non-blocking view of the
//! UCI command stream that lets `stop` (and `quit`) interrupt the search
//! between node expansions.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, TryRecvError};

mod minimax;

pub use minimax::{search, LEAF_BATCH};

/// Search depth in plies.
pub type Depth = u8;

/// The engine's side of the command channel.
///
/// Between searches the engine blocks on [`SearchControl::next_command`].
/// During a search the inner loops call [`SearchControl::should_stop`],
/// which drains whatever has arrived without blocking: `stop` and `quit`
/// flip the stop flag, any other command is queued and handled after
/// `bestmove` goes out.
pub struct SearchControl {
    commands: Receiver<String>,
    queued: VecDeque<String>,
    stopped: bool,
    quit: bool,
}

impl SearchControl {
    #[allow(missing_docs)]
    #[must_use]
    pub fn new(commands: Receiver<String>) -> Self {
        Self {
            commands,
            queued: VecDeque::new(),
            stopped: false,
            quit: false,
        }
    }

    /// Blocking read of the next command. Returns `None` once the input is
    /// closed and everything queued has been handed out.
    pub fn next_command(&mut self) -> Option<String> {
        if let Some(command) = self.queued.pop_front() {
            return Some(command);
        }
        self.commands.recv().ok()
    }

    /// Puts a command back to be handled first by the next
    /// [`SearchControl::next_command`] call.
    pub fn requeue(&mut self, command: String) {
        self.queued.push_back(command);
    }

    /// Arms the control for a fresh search.
    pub fn begin_search(&mut self) {
        self.stopped = false;
    }

    /// Non-blocking poll called at every node expansion. Returns `true` once
    /// the current search should unwind.
    pub fn should_stop(&mut self) -> bool {
        loop {
            match self.commands.try_recv() {
                Ok(line) => match line.split_whitespace().next() {
                    Some(token) if token.eq_ignore_ascii_case("stop") => self.stopped = true,
                    Some(token) if token.eq_ignore_ascii_case("quit") => {
                        self.stopped = true;
                        self.quit = true;
                    },
                    Some(_) => self.queued.push_back(line),
                    None => (),
                },
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // Input is gone: finish the search and shut down.
                    self.stopped = true;
                    self.quit = true;
                    break;
                },
            }
        }
        self.stopped
    }

    /// Whether a `quit` arrived while a search was running.
    #[must_use]
    pub const fn quit_requested(&self) -> bool {
        self.quit
    }
}
