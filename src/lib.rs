//! Dadi engine library.
//!
//! Exposes the board representation, rules, move generation, history, and
//! protocol modules for use by integration tests and the binary entry
//! points.

pub mod board;
pub mod controller;
pub mod history;
pub mod movegen;
pub mod protocol;
pub mod rules;
pub mod selfplay;
