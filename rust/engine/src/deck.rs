use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{build_deck, Card};
use crate::errors::GameError;
use crate::hand::Hand;

/// Cards needed for one round: four for each side.
pub const CARDS_PER_DEAL: usize = 8;

/// Fisher–Yates shuffle: walks from the last index down to 1 and swaps each
/// slot with a uniformly drawn index in `[0, i]`.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
}

/// The two hands of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub computer: Hand,
    pub player: Hand,
}

/// Splits a shuffled deck: the computer takes the first four cards, the player the next four.
pub fn deal(cards: &[Card]) -> Result<Deal, GameError> {
    if cards.len() < CARDS_PER_DEAL {
        return Err(GameError::DeckTooShort {
            needed: CARDS_PER_DEAL,
            available: cards.len(),
        });
    }
    Ok(Deal {
        computer: Hand::try_from(&cards[0..4])?,
        player: Hand::try_from(&cards[4..8])?,
    })
}

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: build_deck(),
            rng,
        }
    }

    /// Rebuilds the full 32 cards and shuffles them.
    pub fn shuffle(&mut self) {
        self.cards = build_deck();
        shuffle(&mut self.cards, &mut self.rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn deal(&self) -> Result<Deal, GameError> {
        deal(&self.cards)
    }
}

/// Builds, shuffles and deals a round from `seed`.
pub fn deal_with_seed(seed: u64) -> Result<Deal, GameError> {
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    deck.deal()
}
