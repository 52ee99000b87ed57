//! The engine puts all pieces together: it owns the current game, reads
//! commands from the [Universal Chess Interface] (UCI) stream and drives the
//! search to answer every `go` with exactly one `bestmove`.
//!
//! [`Engine::uci_loop`] is the "main loop" which communicates with the
//! client (a GUI or a tournament runner) and executes commands from the
//! input channel. The channel is fed by a reader thread owned by the binary;
//! tests feed it directly.
//!
//! [Universal Chess Interface]: https://www.chessprogramming.org/UCI

use std::io::Write;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::chess::core::Move;
use crate::chess::game::Game;
use crate::evaluation::{Evaluator, RandomEvaluator};
use crate::search::{self, Depth, SearchControl};

mod uci;

use uci::{Command, EngineOption, OptionValue};

/// How the engine picks its move on `go`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Any legal move, uniformly. The weakest possible opponent.
    Random,
    /// Immediate checkmate if available, else a random capture, else a
    /// random move.
    Greedy,
    /// Alpha-beta search over the configured evaluator.
    AlphaBeta,
}

/// The Engine connects everything together and handles commands sent by the
/// UCI client. It is created when the program is started and implements the
/// "main loop" via [`Engine::uci_loop`].
pub struct Engine<'a, W: Write> {
    /// The game the next search starts from.
    game: Game,
    control: SearchControl,
    /// Responses to UCI commands are written to this stream.
    out: &'a mut W,
    evaluator: Box<dyn Evaluator>,
    strategy: Strategy,
    max_depth: Depth,
    /// The previous `position` command. When the next one extends it, only
    /// the new suffix of moves is applied instead of replaying the whole
    /// game.
    previous_position: Option<(Option<String>, Vec<String>)>,
    rng: StdRng,
    debug: bool,
}

impl<'a, W: Write> Engine<'a, W> {
    /// Creates a new engine at the starting position with the fallback
    /// (random) evaluator and full-strength search.
    #[must_use]
    pub fn new(control: SearchControl, out: &'a mut W) -> Self {
        Self {
            game: Game::new(),
            control,
            out,
            evaluator: Box::new(RandomEvaluator::new()),
            strategy: Strategy::AlphaBeta,
            max_depth: 3,
            previous_position: None,
            rng: StdRng::from_entropy(),
            debug: false,
        }
    }

    /// Plugs in an externally provided evaluator (e.g. a trained network
    /// behind [`crate::evaluation::OutcomeEvaluator`]).
    pub fn set_evaluator(&mut self, evaluator: Box<dyn Evaluator>) {
        self.evaluator = evaluator;
    }

    #[allow(missing_docs)]
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Continuously executes commands from the input channel until `quit`
    /// arrives or the input closes.
    ///
    /// Malformed and unsupported input never kills the loop: it is reported
    /// as an `info string` line and skipped, as tournament runners expect.
    ///
    /// # Errors
    ///
    /// Only output failures (closed stdout) propagate.
    pub fn uci_loop(&mut self) -> anyhow::Result<()> {
        while let Some(line) = self.control.next_command() {
            log::debug!("input: {line}");
            match Command::parse(&line) {
                Command::Uci => self.handshake()?,
                Command::Debug { on } => self.debug = on,
                Command::IsReady => self.send("readyok")?,
                Command::SetOption { option, value } => self.set_option(&option, &value),
                Command::SetPosition { fen, moves } => self.set_position(fen, moves)?,
                Command::NewGame => {
                    self.game = Game::new();
                    self.previous_position = None;
                },
                Command::Go { depth, .. } => self.go(depth)?,
                // There is no search in flight between commands.
                Command::Stop => {},
                Command::Quit => break,
                Command::Unknown(command) => {
                    self.send(&format!("info string Unsupported command: {command}"))?;
                },
            }
            if self.control.quit_requested() {
                break;
            }
        }
        Ok(())
    }

    /// Responds to the `uci` handshake command by identifying the engine
    /// and advertising its options.
    fn handshake(&mut self) -> anyhow::Result<()> {
        self.send(&format!(
            "id name {} {}",
            env!("CARGO_PKG_NAME"),
            crate::VERSION
        ))?;
        self.send(&format!("id author {}", env!("CARGO_PKG_AUTHORS")))?;
        self.send("option name max_depth type spin default 3 min 1 max 6")?;
        self.send("uciok")
    }

    fn set_option(&mut self, option: &EngineOption, value: &OptionValue) {
        match option {
            EngineOption::MaxDepth => {
                let OptionValue::Integer(depth) = value;
                self.max_depth = (*depth).clamp(1, 6) as Depth;
                log::debug!("set max_depth to {}", self.max_depth);
            },
        }
    }

    /// How many leading moves of the new `position` command are already on
    /// the board because the previous command put them there.
    fn shared_prefix(&self, fen: &Option<String>, moves: &[String]) -> Option<usize> {
        let (previous_fen, previous_moves) = self.previous_position.as_ref()?;
        if previous_fen == fen
            && moves.len() >= previous_moves.len()
            && moves[..previous_moves.len()] == previous_moves[..]
            && self.game.plies() == previous_moves.len()
        {
            Some(previous_moves.len())
        } else {
            None
        }
    }

    /// Changes the position the next search starts from. When the command
    /// extends the previous one, only the new moves are applied.
    fn set_position(&mut self, fen: Option<String>, moves: Vec<String>) -> anyhow::Result<()> {
        let start = match self.shared_prefix(&fen, &moves) {
            Some(already_played) => already_played,
            None => {
                self.game = match &fen {
                    Some(fen) => match Game::from_fen(fen) {
                        Ok(game) => game,
                        Err(e) => {
                            self.previous_position = None;
                            return self.send(&format!("info string Invalid FEN: {e:#}"));
                        },
                    },
                    None => Game::new(),
                };
                0
            },
        };
        for next_move in &moves[start..] {
            if let Err(e) = self.game.make_uci(next_move) {
                // Do not guess at what the client meant: report, keep the
                // moves made so far and force a rebuild next time.
                self.previous_position = None;
                return self.send(&format!("info string Illegal move {next_move}: {e:#}"));
            }
        }
        self.previous_position = Some((fen, moves));
        Ok(())
    }

    /// Runs the configured strategy and emits exactly one `bestmove` line.
    /// Terminal positions produce the conventional null move `0000`.
    fn go(&mut self, depth: Option<Depth>) -> anyhow::Result<()> {
        self.control.begin_search();
        let chosen = match self.strategy {
            Strategy::Random => self.random_move(),
            Strategy::Greedy => self.greedy_move(),
            Strategy::AlphaBeta => {
                let depth = depth.unwrap_or(self.max_depth);
                let (best, score) = search::search(
                    self.game.position(),
                    depth,
                    self.evaluator.as_mut(),
                    &mut self.control,
                );
                if best.is_some() && score.is_finite() {
                    self.send(&format!(
                        "info depth {depth} score cp {}",
                        (score * 100.0) as i32
                    ))?;
                }
                best
            },
        };
        match chosen {
            Some(next_move) => self.send(&format!("bestmove {next_move}")),
            None => self.send("bestmove 0000"),
        }
    }

    fn random_move(&mut self) -> Option<Move> {
        self.game.legal_moves().choose(&mut self.rng).copied()
    }

    fn greedy_move(&mut self) -> Option<Move> {
        let moves = self.game.legal_moves();
        if moves.is_empty() {
            return None;
        }
        for next_move in &moves {
            let mut next = self.game.position().clone();
            next.make_move(next_move);
            if next.generate_moves().is_empty() && next.in_check() {
                return Some(*next_move);
            }
        }
        let captures: Vec<Move> = moves
            .iter()
            .filter(|next_move| next_move.is_capture())
            .copied()
            .collect();
        if let Some(capture) = captures.choose(&mut self.rng) {
            return Some(*capture);
        }
        moves.choose(&mut self.rng).copied()
    }

    /// Writes a single line to the client and flushes so that the client
    /// sees it immediately.
    fn send(&mut self, line: &str) -> anyhow::Result<()> {
        log::debug!("output: {line}");
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}
