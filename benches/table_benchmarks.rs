//! Benchmarks for deck construction, shuffling, and dealing.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

use wizard_table::game::GameState;
use wizard_table::game::entities::{Deck, ParticipantId};

fn bench_deck_build(c: &mut Criterion) {
    c.bench_function("deck_build", |b| {
        b.iter(|| black_box(Deck::build()));
    });
}

fn bench_deck_shuffle(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("deck_shuffle", |b| {
        b.iter(|| {
            let mut deck = Deck::build();
            deck.shuffle(&mut rng);
            black_box(deck)
        });
    });
}

fn bench_deal_round(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("deal_round_six_hands", |b| {
        b.iter(|| {
            let mut state = GameState::new();
            for id in 0..6 {
                state.join(ParticipantId(id)).unwrap();
            }
            state.start_round(&mut rng);
            black_box(state.deal_round(5).unwrap())
        });
    });
}

fn bench_play_and_clear(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("play_full_trick", |b| {
        b.iter(|| {
            let mut state = GameState::new();
            for id in 0..6 {
                state.join(ParticipantId(id)).unwrap();
            }
            state.start_round(&mut rng);
            state.deal_round(5).unwrap();
            for id in 0..6 {
                state.play_card(ParticipantId(id), 0).unwrap();
            }
            state.clear_trick();
            black_box(state)
        });
    });
}

criterion_group!(
    benches,
    bench_deck_build,
    bench_deck_shuffle,
    bench_deal_round,
    bench_play_and_clear
);
criterion_main!(benches);
