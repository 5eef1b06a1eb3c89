use std::cmp::{Ordering, Reverse};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

pub const HAND_SIZE: usize = 4;

/// Matching-rank structure of a four-card hand, weakest first.
/// No straights or flushes: only duplicated ranks count.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    NoPair = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    FourOfAKind = 4,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::NoPair => "High Card",
            Category::Pair => "a Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exactly four cards held by one side for a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    /// First card (in dealt order) whose rank value equals `value`.
    pub fn find_by_value(&self, value: u8) -> Option<&Card> {
        self.0.iter().find(|c| c.rank.value() == value)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = GameError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        <[Card; HAND_SIZE]>::try_from(cards)
            .map(Hand)
            .map_err(|_| GameError::InvalidHandSize(cards.len()))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub category: Category,
    /// Value of the most frequent rank; ties on frequency go to the higher rank.
    pub tie_break: u8,
}

impl Evaluation {
    pub fn tie_break_rank(&self) -> Option<Rank> {
        Rank::from_value(self.tie_break)
    }
}

pub fn evaluate(hand: &Hand) -> Evaluation {
    let mut rank_counts = [0u8; 15]; // 7..14 used
    for c in hand.cards() {
        rank_counts[c.rank.value() as usize] += 1;
    }

    // (value, count), most frequent first, higher rank first among equals
    let mut entries: Vec<(u8, u8)> = (7..=14u8)
        .filter(|&v| rank_counts[v as usize] > 0)
        .map(|v| (v, rank_counts[v as usize]))
        .collect();
    entries.sort_unstable_by_key(|&(value, count)| Reverse((count, value)));

    let (top_value, top_count) = entries[0];
    let second_count = entries.get(1).map_or(0, |&(_, c)| c);

    let category = match (top_count, second_count) {
        (4, _) => Category::FourOfAKind,
        (3, _) => Category::ThreeOfAKind,
        (2, 2) => Category::TwoPair,
        (2, _) => Category::Pair,
        _ => Category::NoPair,
    };
    Evaluation {
        category,
        tie_break: top_value,
    }
}

/// Category first, then tie-break value. Second pairs and kickers are ignored.
pub fn compare_evaluations(a: &Evaluation, b: &Evaluation) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tie_break.cmp(&b.tie_break),
        ord => ord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn try_from_rejects_wrong_lengths() {
        let c = Card::new(Rank::Ace, Suit::Hearts);
        let three = [c, c, c];
        assert_eq!(
            Hand::try_from(&three[..]),
            Err(GameError::InvalidHandSize(3))
        );
        let five = [c, c, c, c, c];
        assert_eq!(Hand::try_from(&five[..]), Err(GameError::InvalidHandSize(5)));
    }

    #[test]
    fn category_names_render() {
        assert_eq!(Category::NoPair.to_string(), "High Card");
        assert_eq!(Category::FourOfAKind.to_string(), "Four of a Kind");
    }
}
