//! Parsing of the [UCI] command stream.
//!
//! Following the protocol's forward-compatibility rule, unknown tokens
//! inside a known command are skipped; a line whose first token is unknown
//! becomes [`Command::Unknown`] and the engine reports it without dying.
//!
//! [UCI]: https://www.chessprogramming.org/UCI

use crate::search::Depth;

#[derive(Debug, PartialEq)]
pub(super) enum Command {
    Uci,
    Debug {
        on: bool,
    },
    IsReady,
    SetOption {
        option: EngineOption,
        value: OptionValue,
    },
    SetPosition {
        fen: Option<String>,
        moves: Vec<String>,
    },
    NewGame,
    Go {
        depth: Option<Depth>,
        wtime: Option<u64>,
        btime: Option<u64>,
        winc: Option<u64>,
        binc: Option<u64>,
        movetime: Option<u64>,
        infinite: bool,
    },
    Stop,
    Quit,
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub(super) enum EngineOption {
    MaxDepth,
}

#[derive(Debug, PartialEq)]
pub(super) enum OptionValue {
    Integer(usize),
}

fn parse_go(parts: &[&str]) -> Command {
    let mut depth = None;
    let mut wtime = None;
    let mut btime = None;
    let mut winc = None;
    let mut binc = None;
    let mut movetime = None;
    let mut infinite = false;

    let mut i = 1;
    while i < parts.len() {
        // Tokens that carry a value consume two slots; everything else
        // (including tokens this engine does not know) consumes one.
        let with_value = match parts[i] {
            "depth" if i + 1 < parts.len() => {
                depth = parts[i + 1].parse().ok();
                true
            },
            "wtime" if i + 1 < parts.len() => {
                wtime = parts[i + 1].parse().ok();
                true
            },
            "btime" if i + 1 < parts.len() => {
                btime = parts[i + 1].parse().ok();
                true
            },
            "winc" if i + 1 < parts.len() => {
                winc = parts[i + 1].parse().ok();
                true
            },
            "binc" if i + 1 < parts.len() => {
                binc = parts[i + 1].parse().ok();
                true
            },
            "movetime" if i + 1 < parts.len() => {
                movetime = parts[i + 1].parse().ok();
                true
            },
            "infinite" => {
                infinite = true;
                false
            },
            _ => false,
        };
        i += if with_value { 2 } else { 1 };
    }

    Command::Go {
        depth,
        wtime,
        btime,
        winc,
        binc,
        movetime,
        infinite,
    }
}

fn parse_setoption(parts: &[&str]) -> Command {
    if parts.len() > 3 && parts[1] == "name" {
        let name_end = parts
            .iter()
            .position(|&x| x == "value")
            .unwrap_or(parts.len());
        let option = parts[2..name_end].join(" ");
        let option = match option.as_str() {
            "max_depth" => EngineOption::MaxDepth,
            _ => return Command::Unknown(parts.join(" ")),
        };
        let value = parts
            .get(name_end + 1)
            .and_then(|raw| raw.parse::<usize>().ok())
            .map(OptionValue::Integer);
        match value {
            Some(value) => Command::SetOption { option, value },
            None => Command::Unknown(parts.join(" ")),
        }
    } else {
        Command::Unknown(parts.join(" "))
    }
}

fn parse_setposition(parts: &[&str]) -> Command {
    let fen_index = parts.iter().position(|&x| x == "fen");
    let moves_index = parts.iter().position(|&x| x == "moves");
    let fen = fen_index.map(|index| parts[index + 1..moves_index.unwrap_or(parts.len())].join(" "));
    let moves = match moves_index {
        Some(moves_index) => parts[moves_index + 1..]
            .iter()
            .map(ToString::to_string)
            .collect(),
        None => vec![],
    };
    Command::SetPosition { fen, moves }
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();

        if parts.is_empty() {
            return Command::Unknown(input.to_string());
        }

        match parts[0].to_ascii_lowercase().as_str() {
            "uci" => Command::Uci,
            "debug" if parts.len() > 1 => Command::Debug {
                on: parts[1] == "on",
            },
            "isready" => Command::IsReady,
            "setoption" => parse_setoption(&parts),
            "position" => parse_setposition(&parts),
            "ucinewgame" => Command::NewGame,
            "go" => parse_go(&parts),
            "stop" => Command::Stop,
            "quit" => Command::Quit,
            _ => Command::Unknown(input.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uci() {
        assert_eq!(Command::parse("uci"), Command::Uci);
        assert_eq!(Command::parse("UCI"), Command::Uci);
    }

    #[test]
    fn parse_debug() {
        assert_eq!(Command::parse("debug on"), Command::Debug { on: true });
        assert_eq!(Command::parse("debug off"), Command::Debug { on: false });
    }

    #[test]
    fn parse_isready() {
        assert_eq!(Command::parse("isready"), Command::IsReady);
    }

    #[test]
    fn parse_setoption() {
        assert_eq!(
            Command::parse("setoption name max_depth value 5"),
            Command::SetOption {
                option: EngineOption::MaxDepth,
                value: OptionValue::Integer(5)
            }
        );
        assert_eq!(
            Command::parse("setoption name UnknownOption value 123"),
            Command::Unknown("setoption name UnknownOption value 123".to_string())
        );
        assert_eq!(
            Command::parse("setoption name max_depth"),
            Command::Unknown("setoption name max_depth".to_string())
        );
    }

    #[test]
    fn parse_position() {
        assert_eq!(
            Command::parse("position startpos moves e2e4 e7e5"),
            Command::SetPosition {
                fen: None,
                moves: vec!["e2e4".to_string(), "e7e5".to_string()]
            }
        );
        assert_eq!(
            Command::parse(
                "position fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 \
                 moves e2e4 e7e5"
            ),
            Command::SetPosition {
                fen: Some("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string()),
                moves: vec!["e2e4".to_string(), "e7e5".to_string()]
            }
        );
        assert_eq!(
            Command::parse("position startpos"),
            Command::SetPosition {
                fen: None,
                moves: vec![]
            }
        );
    }

    #[test]
    fn ucinewgame() {
        assert_eq!(Command::parse("ucinewgame"), Command::NewGame);
    }

    #[test]
    fn parse_go() {
        assert_eq!(
            Command::parse("go depth 4 wtime 300000 btime 300000 winc 10000 binc 10000"),
            Command::Go {
                depth: Some(4),
                wtime: Some(300_000),
                btime: Some(300_000),
                winc: Some(10_000),
                binc: Some(10_000),
                movetime: None,
                infinite: false,
            }
        );
        assert_eq!(
            Command::parse("go"),
            Command::Go {
                depth: None,
                wtime: None,
                btime: None,
                winc: None,
                binc: None,
                movetime: None,
                infinite: false,
            }
        );
        // Unknown tokens inside a known command are skipped.
        assert_eq!(
            Command::parse("go ponder wtime 1000"),
            Command::Go {
                depth: None,
                wtime: Some(1000),
                btime: None,
                winc: None,
                binc: None,
                movetime: None,
                infinite: false,
            }
        );
        assert_eq!(
            Command::parse("go infinite"),
            Command::Go {
                depth: None,
                wtime: None,
                btime: None,
                winc: None,
                binc: None,
                movetime: None,
                infinite: true,
            }
        );
    }

    #[test]
    fn parse_stop_and_quit() {
        assert_eq!(Command::parse("stop"), Command::Stop);
        assert_eq!(Command::parse("quit"), Command::Quit);
    }

    #[test]
    fn unknown() {
        assert_eq!(
            Command::parse("unknown command"),
            Command::Unknown("unknown command".to_string())
        );
    }
}
