//! Random self-play CLI.
//!
//! Plays Dadi games of uniformly random legal actions and outputs the game
//! records as JSONL. Useful for soak-testing the rule engine.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N        Number of games to play (default: 10)
//!   --max-actions N  Action bound per game (default: 500)
//!   --threads N      Number of parallel threads (default: 4)
//!   --seed N         Random seed, 0 for entropy (default: 0)
//!   --output FILE    Output file path (default: stdout)
//!   --quiet          Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};

use dadi::selfplay::{self, SelfPlayConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--max-actions" => {
                i += 1;
                config.max_actions = args[i].parse().expect("invalid --max-actions value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                config.quiet = true;
            }
            other => {
                eprintln!("unknown argument: {}", other);
                std::process::exit(2);
            }
        }
        i += 1;
    }

    let games = selfplay::run_self_play(&config);

    let result = match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut out = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut out)
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut out)
        }
    };
    result.expect("failed to write game records");

    if !config.quiet {
        selfplay::print_summary(&games);
    }
}
