//! Property tests for the pure rule functions.

use proptest::prelude::*;

use arcade_rules::core::{BlackjackConfig, GameRng};
use arcade_rules::games::blackjack::{hand_value, BlackjackRound, Card, Deck, Rank, Suit};
use arcade_rules::games::queens::{are_conflicting, find_conflicts, Position};
use arcade_rules::games::where_in_world::{haversine, normalize, Coordinate, DistanceUnit};
use arcade_rules::games::wordle::{evaluate_guess, LetterStatus};

fn word() -> impl Strategy<Value = String> {
    "[a-e]{5}"
}

fn card() -> impl Strategy<Value = Card> {
    (0..13usize, 0..4usize).prop_map(|(r, s)| Card::new(Rank::ALL[r], Suit::ALL[s]))
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
}

fn position() -> impl Strategy<Value = Position> {
    (0..8usize, 0..8usize).prop_map(|(row, col)| Position::new(row, col))
}

/// Size of the multiset intersection of two words' letters.
fn shared_letters(a: &str, b: &str) -> usize {
    let mut pool: Vec<char> = b.chars().collect();
    a.chars()
        .filter(|c| {
            pool.iter()
                .position(|p| p == c)
                .map(|i| pool.swap_remove(i))
                .is_some()
        })
        .count()
}

proptest! {
    #[test]
    fn prop_guessing_the_answer_is_all_correct(answer in "[a-z]{5}") {
        let feedback = evaluate_guess(&answer.to_uppercase(), &answer).unwrap();
        prop_assert!(feedback.iter().all(|f| f.status == LetterStatus::Correct));
    }

    #[test]
    fn prop_marks_never_exceed_shared_letters(guess in word(), answer in word()) {
        let feedback = evaluate_guess(&guess, &answer).unwrap();
        let marked = feedback
            .iter()
            .filter(|f| f.status != LetterStatus::Absent)
            .count();
        prop_assert_eq!(marked, shared_letters(&guess, &answer));
    }

    #[test]
    fn prop_exact_matches_are_correct(guess in word(), answer in word()) {
        let feedback = evaluate_guess(&guess, &answer).unwrap();
        for ((f, g), a) in feedback.iter().zip(guess.chars()).zip(answer.chars()) {
            prop_assert_eq!(f.status == LetterStatus::Correct, g == a);
        }
    }

    #[test]
    fn prop_hand_value_only_softens_aces(cards in prop::collection::vec(card(), 1..8)) {
        let hard: u32 = cards
            .iter()
            .map(|c| if c.rank == Rank::Ace { 1 } else { c.rank.value() })
            .sum();
        let aces = cards.iter().filter(|c| c.rank == Rank::Ace).count() as u32;
        let value = hand_value(&cards);

        prop_assert!(value >= hard);
        prop_assert!(value <= hard + 10 * aces);
        prop_assert_eq!((value - hard) % 10, 0);
        if value > 21 {
            prop_assert_eq!(value, hard);
        }
    }

    #[test]
    fn prop_conflict_is_symmetric(a in position(), b in position()) {
        prop_assert_eq!(are_conflicting(a, b, None), are_conflicting(b, a, None));
    }

    #[test]
    fn prop_non_attacking_queens_have_no_conflicts(candidates in prop::collection::vec(position(), 0..20)) {
        let mut queens: Vec<Position> = Vec::new();
        for pos in candidates {
            if queens.iter().all(|&q| q != pos && !are_conflicting(q, pos, None)) {
                queens.push(pos);
            }
        }
        let conflicts = find_conflicts(&queens, 8, None);
        prop_assert_eq!(conflicts.pairs, 0);
        prop_assert!(conflicts.cells.is_empty());
    }

    #[test]
    fn prop_haversine_zero_for_same_point(p in coordinate()) {
        prop_assert!(haversine(p, p, DistanceUnit::Miles).abs() < 1e-9);
    }

    #[test]
    fn prop_haversine_symmetric(a in coordinate(), b in coordinate()) {
        let ab = haversine(a, b, DistanceUnit::Kilometers);
        let ba = haversine(b, a, DistanceUnit::Kilometers);
        prop_assert!((ab - ba).abs() < 1e-6);
        prop_assert!(ab <= std::f64::consts::PI * 6371.0 + 1e-6);
    }

    #[test]
    fn prop_normalize_is_idempotent(name in "[A-Za-z .'_-]{0,24}") {
        let once = normalize(&name);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
        prop_assert!(!once.contains("  "));
    }

    #[test]
    fn prop_same_seed_same_deal(seed in any::<u64>()) {
        let a = BlackjackRound::new(BlackjackConfig::default(), seed).unwrap();
        let b = BlackjackRound::new(BlackjackConfig::default(), seed).unwrap();
        prop_assert_eq!(a.player_hand(), b.player_hand());
        prop_assert_eq!(a.dealer_visible(), b.dealer_visible());

        let deck_a = Deck::shuffled(&mut GameRng::new(seed));
        let deck_b = Deck::shuffled(&mut GameRng::new(seed));
        prop_assert_eq!(deck_a, deck_b);
    }
}
