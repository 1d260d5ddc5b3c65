//! Dadi -- a rules engine for the three-ring morris game.
//!
//! This binary reads commands from stdin and writes responses to stdout:
//! `position <fen>` after every accepted command or query, `error
//! <message>` for rejected actions, and a `result` line once the game
//! ends. Malformed input is reported on stderr and ignored.

use std::io::{self, BufRead, Write};

use dadi::board::{Outcome, Player};
use dadi::controller::{GameController, PublicState};
use dadi::protocol::fen::{encode_fen, parse_fen};
use dadi::protocol::parser::{parse_command, Command};
use dadi::rules::ActionError;

/// Session display names for the two players, supplied by the menu layer
/// via the `names` command. The core never sees them.
struct SessionNames {
    a: String,
    b: String,
}

impl SessionNames {
    fn new() -> Self {
        SessionNames {
            a: "A".to_string(),
            b: "B".to_string(),
        }
    }

    fn of(&self, player: Player) -> &str {
        match player {
            Player::A => &self.a,
            Player::B => &self.b,
        }
    }
}

fn print_position<W: Write>(out: &mut W, controller: &GameController) {
    writeln!(out, "position {}", encode_fen(&controller.state().snapshot())).unwrap();
    out.flush().unwrap();
}

/// Writes the outcome of a mutating command: the new position on success
/// (plus a `result` line if the game just ended), or a typed error line.
fn report<W: Write>(
    out: &mut W,
    names: &SessionNames,
    controller: &GameController,
    result: Result<PublicState, ActionError>,
) {
    match result {
        Ok(public) => {
            writeln!(out, "position {}", encode_fen(&controller.state().snapshot())).unwrap();
            match public.outcome {
                Some(Outcome::Win(p)) => {
                    writeln!(out, "result win {}", names.of(p)).unwrap();
                }
                Some(Outcome::Draw(p)) => {
                    writeln!(out, "result draw {}", names.of(p)).unwrap();
                }
                None => {}
            }
        }
        Err(e) => {
            writeln!(out, "error {}", e).unwrap();
        }
    }
    out.flush().unwrap();
}

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut controller = GameController::new();
    let mut names = SessionNames::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::NewGame => {
                controller.reset();
                print_position(&mut out, &controller);
            }
            Command::Position { fen } => match parse_fen(&fen) {
                Ok(snapshot) => {
                    controller.load(&snapshot);
                    print_position(&mut out, &controller);
                }
                Err(e) => {
                    eprintln!("failed to parse position: {}", e);
                }
            },
            Command::Place { player, point } => {
                let result = controller.place(point, player);
                report(&mut out, &names, &controller, result);
            }
            Command::Move { player, from, to } => {
                let result = controller.move_piece(from, to, player);
                report(&mut out, &names, &controller, result);
            }
            Command::Remove { player, point } => {
                let result = controller.remove(point, player);
                report(&mut out, &names, &controller, result);
            }
            Command::Undo => {
                controller.undo();
                print_position(&mut out, &controller);
            }
            Command::Redo => {
                controller.redo();
                print_position(&mut out, &controller);
            }
            Command::Names { a, b } => {
                names = SessionNames { a, b };
            }
            Command::Show => {
                print_position(&mut out, &controller);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
