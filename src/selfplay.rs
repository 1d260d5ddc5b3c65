//! Random self-play over the rule engine.
//!
//! Plays bounded games of uniformly random legal actions, recording the
//! action list and final position of each. Used to soak-test the phase
//! machine and as a benchmark workload. Games are independent: with more
//! than one thread they run concurrently on a rayon pool, while each game
//! itself stays single-threaded.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::{Action, GameState, Outcome, Player, ALL_PLAYERS, ALL_POINTS};
use crate::movegen::random_action;
use crate::protocol::fen::encode_fen;
use crate::rules::{apply_move, apply_place, apply_remove};

/// Configuration for self-play generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Hard bound on actions per game before forced termination.
    pub max_actions: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            max_actions: 500,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// Every committed action in order, with its acting player.
    pub actions: Vec<(Player, String)>,
    /// Outcome, if the game ended before the action bound.
    pub outcome: Option<Outcome>,
    /// FEN of the final position.
    pub final_fen: String,
}

/// Plays a single random game and returns its record.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let mut state = GameState::new();
    let mut actions: Vec<(Player, String)> = Vec::new();

    while state.outcome.is_none() && actions.len() < config.max_actions {
        let player = state.current_player;
        let action = match random_action(&state, rng) {
            Some(a) => a,
            // Only the removal phase can run out of targets: every opponent
            // piece is protected, and any capture attempt resolves the
            // declared draw.
            None => Action::Remove(ALL_POINTS[0]),
        };

        let result = match action {
            Action::Place(p) => apply_place(&mut state, p, player),
            Action::Move { from, to } => apply_move(&mut state, from, to, player),
            Action::Remove(p) => apply_remove(&mut state, p, player),
        };
        result.expect("random legal action was rejected");
        actions.push((player, action.to_string()));
    }

    GameRecord {
        game_id,
        actions,
        outcome: state.outcome,
        final_fen: encode_fen(&state.snapshot()),
    }
}

/// Runs self-play generation, producing all game records.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| {
        games.push(game);
    });
    games
}

/// Runs self-play generation, calling `on_game` with each completed record.
///
/// This allows the caller to process games incrementally (e.g. write to
/// disk) rather than waiting for all games to finish.
pub fn run_self_play_with_callback<F>(config: &SelfPlayConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_self_play_parallel(config, on_game);
    } else {
        run_self_play_sequential(config, on_game);
    }
}

fn game_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

fn outcome_label(record: &GameRecord) -> String {
    match record.outcome {
        Some(Outcome::Win(p)) => format!("{} wins", p),
        Some(Outcome::Draw(p)) => format!("draw ({})", p),
        None => "action bound".to_string(),
    }
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let mut rng = game_rng(config.seed, i);
        let game = play_game(config, i, &mut rng);
        if !config.quiet {
            eprintln!(
                "Game {}/{}: {} in {} actions",
                i + 1,
                config.num_games,
                outcome_label(&game),
                game.actions.len(),
            );
        }
        on_game(game);
    }
}

/// Parallel self-play: plays games concurrently on a rayon pool. A channel
/// delivers completed games to the callback on the calling side.
fn run_self_play_parallel<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let mut rng = game_rng(config_clone.seed, i);
                    let game = play_game(&config_clone, i, &mut rng);
                    if !config_clone.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        eprintln!(
                            "Game {}/{}: {} in {} actions",
                            n,
                            config_clone.num_games,
                            outcome_label(&game),
                            game.actions.len(),
                        );
                    }
                    let _ = tx.send(game);
                });
        });
    });

    for game in rx {
        on_game(game);
    }

    handle.join().expect("selfplay worker thread panicked");
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let mut win_counts = [0usize; 2];
    let mut draw_count = 0usize;
    let mut unfinished = 0usize;
    let mut total_actions = 0usize;

    for game in games {
        total_actions += game.actions.len();
        match game.outcome {
            Some(Outcome::Win(p)) => win_counts[p.index()] += 1,
            Some(Outcome::Draw(_)) => draw_count += 1,
            None => unfinished += 1,
        }
    }

    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", total);
    eprintln!(
        "Avg actions/game: {:.1}",
        total_actions as f64 / total.max(1) as f64
    );
    eprintln!("Draws: {}", draw_count);
    eprintln!("Hit action bound: {}", unfinished);
    for player in ALL_PLAYERS {
        let wins = win_counts[player.index()];
        let pct = 100.0 * wins as f64 / total.max(1) as f64;
        eprintln!("  {} wins: {} ({:.1}%)", player, wins, pct);
    }
}
