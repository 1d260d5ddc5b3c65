use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use dadi::board::{GameState, Player, ALL_PLAYERS, ALL_POINTS};
use dadi::movegen::legal_actions;
use dadi::protocol::fen::{encode_fen, parse_fen};
use dadi::rules::forms_mill;
use dadi::selfplay::{play_game, SelfPlayConfig};

/// A midgame movement-phase position with six pieces per side.
const MIDGAME_FEN: &str = "A-B--A-B.BA--AB--.-ABA--B-/Am/0,0/-";

fn midgame_state() -> GameState {
    GameState::from_snapshot(&parse_fen(MIDGAME_FEN).unwrap())
}

fn bench_mill_detection(c: &mut Criterion) {
    let state = midgame_state();
    c.bench_function("forms_mill_all_points_both_players", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for p in ALL_POINTS {
                for player in ALL_PLAYERS {
                    if forms_mill(black_box(&state), black_box(p), black_box(player)) {
                        hits += 1;
                    }
                }
            }
            hits
        })
    });
}

fn bench_legal_actions_movement(c: &mut Criterion) {
    let state = midgame_state();
    c.bench_function("legal_actions_midgame_movement", |b| {
        b.iter(|| legal_actions(black_box(&state)))
    });
}

fn bench_legal_actions_placement(c: &mut Criterion) {
    let state = GameState::new();
    c.bench_function("legal_actions_empty_board_placement", |b| {
        b.iter(|| legal_actions(black_box(&state)))
    });
}

fn bench_random_game(c: &mut Criterion) {
    let config = SelfPlayConfig {
        num_games: 1,
        max_actions: 300,
        threads: 1,
        seed: 42,
        quiet: true,
    };
    c.bench_function("random_game_300_action_bound", |b| {
        b.iter(|| {
            let mut rng = SmallRng::seed_from_u64(42);
            play_game(black_box(&config), 0, &mut rng)
        })
    });
}

fn bench_fen_roundtrip(c: &mut Criterion) {
    let snap = midgame_state().snapshot();
    c.bench_function("fen_encode_parse_roundtrip", |b| {
        b.iter(|| {
            let fen = encode_fen(black_box(&snap));
            parse_fen(black_box(&fen)).unwrap()
        })
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let state = midgame_state();
    c.bench_function("game_state_clone", |b| b.iter(|| black_box(&state).clone()));
}

fn bench_snapshot_restore(c: &mut Criterion) {
    let snap = midgame_state().snapshot();
    let mut scratch = GameState::new();
    c.bench_function("snapshot_restore", |b| {
        b.iter(|| {
            scratch.restore(black_box(&snap));
            scratch.on_board_count(Player::A)
        })
    });
}

criterion_group!(
    benches,
    bench_mill_detection,
    bench_legal_actions_movement,
    bench_legal_actions_placement,
    bench_random_game,
    bench_fen_roundtrip,
    bench_state_clone,
    bench_snapshot_restore,
);
criterion_main!(benches);
