//! Text protocol handling.
//!
//! This module implements the seam between the core and external drivers:
//! FEN-style position encoding and the command parser for the binary main
//! loop. The core itself never parses text; adapters do.

pub mod fen;
pub mod parser;

pub use fen::{encode_fen, parse_fen, FenError, INITIAL_FEN};
pub use parser::{parse_command, Command};
