//! Command parser for the engine's line protocol.
//!
//! Parses incoming driver commands from raw text into structured `Command`
//! variants that the binary main loop can dispatch on.

use crate::board::{Player, Point};

/// A parsed driver-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a fresh game, dropping history.
    NewGame,

    /// Replace the current position from a FEN string.
    Position { fen: String },

    /// Place a hand piece: `place <player> <point>`.
    Place { player: Player, point: Point },

    /// Slide a piece: `move <player> <from> <to>`.
    Move {
        player: Player,
        from: Point,
        to: Point,
    },

    /// Capture after a mill: `remove <player> <point>`.
    Remove { player: Player, point: Point },

    /// Step back one committed action.
    Undo,

    /// Reapply an undone action.
    Redo,

    /// Set the session display names: `names <a> <b>`.
    Names { a: String, b: String },

    /// Print the current position.
    Show,

    /// Terminate the process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens[0] {
        "newgame" => Some(Command::NewGame),
        "undo" => Some(Command::Undo),
        "redo" => Some(Command::Redo),
        "show" => Some(Command::Show),
        "quit" => Some(Command::Quit),

        "position" => parse_position(&tokens),
        "place" => parse_place(&tokens),
        "move" => parse_move(&tokens),
        "remove" => parse_remove(&tokens),
        "names" => parse_names(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

fn parse_player(token: &str) -> Option<Player> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Player::from_fen_char(c),
        _ => None,
    }
}

/// Parses `position <fen>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed position: expected 'position <fen>'");
        return None;
    }
    Some(Command::Position {
        fen: tokens[1].to_string(),
    })
}

/// Parses `place <player> <point>`.
fn parse_place(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        eprintln!("malformed place: expected 'place <player> <point>'");
        return None;
    }
    let player = parse_player(tokens[1])?;
    let point = Point::from_abbr(tokens[2])?;
    Some(Command::Place { player, point })
}

/// Parses `move <player> <from> <to>`.
fn parse_move(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 4 {
        eprintln!("malformed move: expected 'move <player> <from> <to>'");
        return None;
    }
    let player = parse_player(tokens[1])?;
    let from = Point::from_abbr(tokens[2])?;
    let to = Point::from_abbr(tokens[3])?;
    Some(Command::Move { player, from, to })
}

/// Parses `remove <player> <point>`.
fn parse_remove(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        eprintln!("malformed remove: expected 'remove <player> <point>'");
        return None;
    }
    let player = parse_player(tokens[1])?;
    let point = Point::from_abbr(tokens[2])?;
    Some(Command::Remove { player, point })
}

/// Parses `names <a> <b>`.
fn parse_names(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        eprintln!("malformed names: expected 'names <a> <b>'");
        return None;
    }
    Some(Command::Names {
        a: tokens[1].to_string(),
        b: tokens[2].to_string(),
    })
}
