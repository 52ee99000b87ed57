//! The engine binary: a stdin reader thread feeds a command channel, and the
//! first line decides the mode. `uci` hands the channel to the UCI engine;
//! anything else enters a small play-against-the-engine terminal loop built
//! on the same core.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use medusa::chess::game::{Game, Status};
use medusa::chess::notation;
use medusa::evaluation::RandomEvaluator;
use medusa::search::{self, SearchControl};
use medusa::Engine;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (sender, receiver) = mpsc::channel();
    let _reader = thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if sender.send(line).is_err() {
                break;
            }
        }
    });

    let mut control = SearchControl::new(receiver);
    let Some(first) = control.next_command() else {
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if first.trim().eq_ignore_ascii_case("uci") {
        control.requeue(first);
        Engine::new(control, &mut out).uci_loop()
    } else {
        play_terminal(&first, control, &mut out)
    }
}

/// Casual terminal game: the human plays White in SAN, the engine answers.
/// The first line typed into the program is taken as the player's name.
fn play_terminal(
    name: &str,
    mut control: SearchControl,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut game = Game::new();
    game.set_header("White", name.trim());
    game.set_header("Black", &format!("medusa {}", medusa::VERSION));

    let mut evaluator = RandomEvaluator::new();

    writeln!(out, "{:?}", game.position().board())?;
    writeln!(out, "You play as white.")?;
    out.flush()?;

    while game.status() == Status::InProgress {
        write!(out, "Make a move: ")?;
        out.flush()?;
        let Some(input) = control.next_command() else {
            break;
        };
        let input = input.trim();
        if input == "exit" || input == "quit" {
            break;
        }
        if let Err(e) = game.make_san(input) {
            writeln!(out, "Illegal move attempted: {e:#}")?;
            continue;
        }
        writeln!(out, "{:?}", game.position().board())?;
        if game.status() != Status::InProgress {
            break;
        }

        control.begin_search();
        let (reply, _) = search::search(game.position(), 3, &mut evaluator, &mut control);
        let Some(reply) = reply else { break };
        let san = notation::short_san(game.position(), &reply);
        game.make_move(&reply)?;
        writeln!(out, "AI response: {san}")?;
        writeln!(out, "{:?}", game.position().board())?;
        out.flush()?;
    }

    match game.status() {
        Status::WhiteWon => writeln!(out, "Checkmate, you win.")?,
        Status::BlackWon => writeln!(out, "Checkmate, the engine wins.")?,
        Status::Draw => writeln!(out, "Stalemate.")?,
        Status::InProgress => (),
    }
    out.flush()?;
    Ok(())
}
