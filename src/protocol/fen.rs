//! FEN-style encoding and decoding of Dadi positions.
//!
//! A position is a single line of four sections separated by `/`:
//!
//! ```text
//! <ring0>.<ring1>.<ring2>/<turn><phase>/<remA>,<remB>/<outcome>
//! ```
//!
//! Each ring section is eight characters (`A`, `B`, or `-`) in index
//! order, outer ring first. The turn section is the side to move plus the
//! phase character (`p`/`m`/`r`); the outcome section is `-` while the
//! game runs, or `W`/`D` plus the attributed player. The initial position
//! is [`INITIAL_FEN`].

use thiserror::Error;

use crate::board::{
    GamePhase, Outcome, Player, Point, Snapshot, ALL_PLAYERS, PIECES_PER_PLAYER, POINT_COUNT,
    RING_COUNT, RING_SIZE,
};

/// The FEN of the initial position.
pub const INITIAL_FEN: &str = "--------.--------.--------/Ap/11,11/-";

/// Errors that can occur during FEN parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 4 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("expected 3 ring sections separated by '.', got {0}")]
    WrongRingCount(usize),

    #[error("ring section '{0}' is not 8 characters")]
    WrongRingLength(String),

    #[error("invalid occupancy character: '{0}'")]
    InvalidOccupancy(char),

    #[error("invalid turn section: '{0}'")]
    InvalidTurnSection(String),

    #[error("invalid player character: '{0}'")]
    InvalidPlayer(char),

    #[error("invalid phase character: '{0}'")]
    InvalidPhase(char),

    #[error("invalid remaining-count section: '{0}'")]
    InvalidRemaining(String),

    #[error("invalid outcome section: '{0}'")]
    InvalidOutcome(String),

    #[error("player {0} has more pieces than a full hand")]
    TooManyPieces(Player),

    #[error("hand counts do not match the {0} phase")]
    PhaseMismatch(GamePhase),
}

/// Encodes a snapshot as a FEN line.
pub fn encode_fen(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity(40);

    for ring in 0..RING_COUNT {
        if ring > 0 {
            out.push('.');
        }
        for index in 0..RING_SIZE {
            let p = Point::new(ring as u8, index as u8);
            out.push(match snapshot.occupancy[p.id()] {
                Some(player) => player.fen_char(),
                None => '-',
            });
        }
    }

    out.push('/');
    out.push(snapshot.current_player.fen_char());
    out.push(snapshot.phase.fen_char());

    out.push('/');
    out.push_str(&format!(
        "{},{}",
        snapshot.pieces_remaining[0], snapshot.pieces_remaining[1]
    ));

    out.push('/');
    match snapshot.outcome {
        None => out.push('-'),
        Some(Outcome::Win(p)) => {
            out.push('W');
            out.push(p.fen_char());
        }
        Some(Outcome::Draw(p)) => {
            out.push('D');
            out.push(p.fen_char());
        }
    }

    out
}

/// Parses a FEN line into a snapshot.
///
/// Beyond shape, this validates that the position is representable: each
/// player's on-board plus in-hand pieces fit in a full hand, and the phase
/// agrees with the hand counts (`Movement` only with both hands empty,
/// `Placement` only with pieces left to place).
pub fn parse_fen(s: &str) -> Result<Snapshot, FenError> {
    let sections: Vec<&str> = s.trim().split('/').collect();
    if sections.len() != 4 {
        return Err(FenError::WrongSectionCount(sections.len()));
    }

    let occupancy = parse_board(sections[0])?;
    let (current_player, phase) = parse_turn(sections[1])?;
    let pieces_remaining = parse_remaining(sections[2])?;
    let outcome = parse_outcome(sections[3])?;

    for player in ALL_PLAYERS {
        let on_board = occupancy.iter().filter(|o| **o == Some(player)).count();
        if on_board + pieces_remaining[player.index()] as usize > PIECES_PER_PLAYER as usize {
            return Err(FenError::TooManyPieces(player));
        }
    }

    let hands_empty = pieces_remaining == [0, 0];
    match phase {
        GamePhase::Movement if !hands_empty => return Err(FenError::PhaseMismatch(phase)),
        GamePhase::Placement if hands_empty => return Err(FenError::PhaseMismatch(phase)),
        _ => {}
    }

    Ok(Snapshot {
        occupancy,
        current_player,
        phase,
        pieces_remaining,
        outcome,
    })
}

fn parse_board(section: &str) -> Result<[Option<Player>; POINT_COUNT], FenError> {
    let rings: Vec<&str> = section.split('.').collect();
    if rings.len() != RING_COUNT {
        return Err(FenError::WrongRingCount(rings.len()));
    }

    let mut occupancy = [None; POINT_COUNT];
    for (ring, ring_str) in rings.iter().enumerate() {
        if ring_str.chars().count() != RING_SIZE {
            return Err(FenError::WrongRingLength(ring_str.to_string()));
        }
        for (index, c) in ring_str.chars().enumerate() {
            let p = Point::new(ring as u8, index as u8);
            occupancy[p.id()] = match c {
                '-' => None,
                c => Some(Player::from_fen_char(c).ok_or(FenError::InvalidOccupancy(c))?),
            };
        }
    }
    Ok(occupancy)
}

fn parse_turn(section: &str) -> Result<(Player, GamePhase), FenError> {
    let mut chars = section.chars();
    let (player_char, phase_char) = match (chars.next(), chars.next(), chars.next()) {
        (Some(p), Some(ph), None) => (p, ph),
        _ => return Err(FenError::InvalidTurnSection(section.to_string())),
    };
    let player =
        Player::from_fen_char(player_char).ok_or(FenError::InvalidPlayer(player_char))?;
    let phase = GamePhase::from_fen_char(phase_char).ok_or(FenError::InvalidPhase(phase_char))?;
    Ok((player, phase))
}

fn parse_remaining(section: &str) -> Result<[u8; 2], FenError> {
    let invalid = || FenError::InvalidRemaining(section.to_string());
    let mut parts = section.split(',');
    let a: u8 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let b: u8 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    if parts.next().is_some() || a > PIECES_PER_PLAYER || b > PIECES_PER_PLAYER {
        return Err(invalid());
    }
    Ok([a, b])
}

fn parse_outcome(section: &str) -> Result<Option<Outcome>, FenError> {
    if section == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidOutcome(section.to_string());
    let mut chars = section.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(kind), Some(player_char), None) => {
            let player = Player::from_fen_char(player_char).ok_or_else(invalid)?;
            match kind {
                'W' => Ok(Some(Outcome::Win(player))),
                'D' => Ok(Some(Outcome::Draw(player))),
                _ => Err(invalid()),
            }
        }
        _ => Err(invalid()),
    }
}
