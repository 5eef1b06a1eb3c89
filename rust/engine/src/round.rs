//! Round lifecycle as a value plus a pure reducer.
//!
//! A round moves Idle → Dealt → Revealing(1..=3) → Resolved. Each
//! [`RoundEvent::RevealTick`] exposes one more player card; the tick that
//! exposes the fourth card also computes the verdict. A
//! [`RoundEvent::DealRequested`] always starts over, whatever the phase.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::deal_with_seed;
use crate::hand::{Hand, HAND_SIZE};
use crate::verdict::{resolve, Verdict};

const FULL_REVEAL: u8 = HAND_SIZE as u8;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// Start a fresh round shuffled from `seed`.
    DealRequested { seed: u64 },
    /// Expose one more of the player's cards.
    RevealTick,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RoundPhase {
    Idle,
    Dealt,
    Revealing(u8),
    Resolved,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundState {
    computer: Option<Hand>,
    player: Option<Hand>,
    revealed: u8,
    verdict: Option<Verdict>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(self, event: RoundEvent) -> RoundState {
        match event {
            RoundEvent::DealRequested { seed } => match deal_with_seed(seed) {
                Ok(d) => RoundState {
                    computer: Some(d.computer),
                    player: Some(d.player),
                    revealed: 0,
                    verdict: None,
                },
                // a freshly built deck always holds 32 cards
                Err(_) => RoundState::default(),
            },
            RoundEvent::RevealTick => self.reveal_one(),
        }
    }

    fn reveal_one(mut self) -> RoundState {
        let (Some(player), Some(computer)) = (self.player, self.computer) else {
            return self;
        };
        if self.verdict.is_some() {
            return self;
        }
        if self.revealed < FULL_REVEAL {
            self.revealed += 1;
        }
        if self.revealed == FULL_REVEAL {
            self.verdict = Some(resolve(&player, &computer));
        }
        self
    }

    pub fn phase(&self) -> RoundPhase {
        match (&self.player, &self.verdict) {
            (None, _) => RoundPhase::Idle,
            (Some(_), Some(_)) => RoundPhase::Resolved,
            (Some(_), None) if self.revealed == 0 => RoundPhase::Dealt,
            (Some(_), None) => RoundPhase::Revealing(self.revealed),
        }
    }

    /// True while a dealt round still has hidden player cards.
    pub fn needs_tick(&self) -> bool {
        matches!(self.phase(), RoundPhase::Dealt | RoundPhase::Revealing(_))
    }

    pub fn computer_hand(&self) -> Option<&Hand> {
        self.computer.as_ref()
    }

    pub fn player_hand(&self) -> Option<&Hand> {
        self.player.as_ref()
    }

    pub fn revealed(&self) -> u8 {
        self.revealed
    }

    /// The revealed prefix of the player's hand.
    pub fn visible_player_cards(&self) -> &[Card] {
        match &self.player {
            Some(h) => &h.cards()[..self.revealed as usize],
            None => &[],
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_ignores_ticks() {
        let s = RoundState::new().reduce(RoundEvent::RevealTick);
        assert_eq!(s.phase(), RoundPhase::Idle);
        assert_eq!(s.revealed(), 0);
        assert!(s.verdict().is_none());
        assert!(!s.needs_tick());
    }

    #[test]
    fn deal_enters_dealt_with_nothing_revealed() {
        let s = RoundState::new().reduce(RoundEvent::DealRequested { seed: 3 });
        assert_eq!(s.phase(), RoundPhase::Dealt);
        assert!(s.visible_player_cards().is_empty());
        assert!(s.needs_tick());
    }
}
