//! Benchmarks for the pure rule functions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arcade_rules::data::{default_atlas, default_words};
use arcade_rules::games::blackjack::{hand_value, Card, Rank, Suit};
use arcade_rules::games::queens::{find_conflicts, Position};
use arcade_rules::games::where_in_world::{haversine, normalize, Coordinate, DistanceUnit};
use arcade_rules::games::wordle::evaluate_guess;

fn bench_wordle(c: &mut Criterion) {
    c.bench_function("evaluate_guess", |b| {
        b.iter(|| evaluate_guess(black_box("allee"), black_box("apple")))
    });

    let words = default_words(5);
    c.bench_function("word_list_lookup", |b| b.iter(|| words.contains(black_box("crane"))));
}

fn bench_blackjack(c: &mut Criterion) {
    let hand = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::King, Suit::Diamonds),
    ];
    c.bench_function("hand_value", |b| b.iter(|| hand_value(black_box(&hand))));
}

fn bench_queens(c: &mut Criterion) {
    let queens: Vec<_> = (0..8).map(|i| Position::new(i, (i * 3) % 8)).collect();
    c.bench_function("find_conflicts_8", |b| {
        b.iter(|| find_conflicts(black_box(&queens), 8, None))
    });
}

fn bench_location(c: &mut Criterion) {
    let a = Coordinate::new(51.5074, -0.1278);
    let b = Coordinate::new(48.8566, 2.3522);
    c.bench_function("haversine", |bench| {
        bench.iter(|| haversine(black_box(a), black_box(b), DistanceUnit::Miles))
    });

    c.bench_function("normalize", |b| b.iter(|| normalize(black_box("São Tomé and Príncipe"))));

    if let Ok(atlas) = default_atlas() {
        c.bench_function("atlas_resolve", |b| b.iter(|| atlas.resolve(black_box("cote d'ivoire"))));
    }
}

criterion_group!(benches, bench_wordle, bench_blackjack, bench_queens, bench_location);
criterion_main!(benches);
