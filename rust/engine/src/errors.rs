use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck too short to deal: need {needed} cards, have {available}")]
    DeckTooShort { needed: usize, available: usize },
    #[error("A hand holds exactly 4 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Invalid card: {0}")]
    InvalidCard(String),
}
