use std::collections::HashSet;

use simple_poker_engine::cards::{build_deck, Card};
use simple_poker_engine::deck::{deal, deal_with_seed, shuffle, Deck};
use simple_poker_engine::errors::GameError;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn build_deck_has_32_unique_cards() {
    let deck = build_deck();
    assert_eq!(deck.len(), 32);
    let set: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(set.len(), 32, "every (rank, suit) pair appears once");
}

#[test]
fn shuffle_is_a_permutation() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    for _ in 0..20 {
        let mut cards = build_deck();
        shuffle(&mut cards, &mut rng);
        let mut sorted = cards.clone();
        sorted.sort();
        let mut expected = build_deck();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(d1.cards(), d2.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.cards(),
        d2.cards(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_moves_cards_away_from_build_order() {
    let mut deck = Deck::new_with_seed(2024);
    deck.shuffle();
    assert_ne!(deck.cards(), build_deck().as_slice());
}

#[test]
fn deal_gives_two_disjoint_four_card_hands() {
    for seed in 0..50u64 {
        let d = deal_with_seed(seed).unwrap();
        let mut set = HashSet::new();
        for c in d.computer.cards().iter().chain(d.player.cards().iter()) {
            assert!(set.insert(*c), "card {} dealt twice with seed {}", c, seed);
        }
        assert_eq!(set.len(), 8);
    }
}

#[test]
fn deal_takes_computer_first_then_player_in_order() {
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    let cards = deck.cards().to_vec();
    let d = deck.deal().unwrap();
    assert_eq!(d.computer.cards(), &cards[0..4]);
    assert_eq!(d.player.cards(), &cards[4..8]);
}

#[test]
fn deal_rejects_short_deck() {
    let cards = &build_deck()[..7];
    assert_eq!(
        deal(cards),
        Err(GameError::DeckTooShort {
            needed: 8,
            available: 7
        })
    );
}

#[test]
fn deal_with_seed_is_reproducible() {
    assert_eq!(deal_with_seed(77).unwrap(), deal_with_seed(77).unwrap());
}
