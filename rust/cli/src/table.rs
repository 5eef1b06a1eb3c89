//! Timer-driven round driver.
//!
//! [`Table`] owns the current [`RoundState`] and feeds it events: a deal
//! request from the caller, then one reveal tick per delay until the round
//! resolves. Dealing again cancels the pending tick, and a tick that was
//! already queued for an older round is dropped when it arrives.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use simple_poker_engine::cards::Card;
use simple_poker_engine::hand::Hand;
use simple_poker_engine::round::{RoundEvent, RoundPhase, RoundState};
use simple_poker_engine::verdict::Verdict;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, info};

use crate::timer::ScheduledTask;

/// What a display needs after each transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub round: u64,
    pub phase: RoundPhase,
    pub computer: Option<Hand>,
    pub visible_player: Vec<Card>,
    pub revealed: u8,
    pub verdict: Option<Verdict>,
}

pub struct Table {
    state: RoundState,
    round: u64,
    seeds: ChaCha20Rng,
    last_seed: Option<u64>,
    reveal_delay: Duration,
    tx: UnboundedSender<u64>,
    rx: UnboundedReceiver<u64>,
    pending: Option<ScheduledTask>,
}

impl Table {
    /// `seed` fixes the whole sequence of deals; `None` draws one from the OS.
    pub fn new(seed: Option<u64>, reveal_delay: Duration) -> Self {
        let seeds = ChaCha20Rng::seed_from_u64(seed.unwrap_or_else(rand::random));
        let (tx, rx) = unbounded_channel();
        Self {
            state: RoundState::new(),
            round: 0,
            seeds,
            last_seed: None,
            reveal_delay,
            tx,
            rx,
            pending: None,
        }
    }

    /// Starts a new round, superseding any round in progress.
    /// Must be called from within a tokio runtime.
    pub fn deal(&mut self) -> RoundSnapshot {
        if let Some(task) = self.pending.take() {
            task.cancel();
            debug!(round = self.round, "cancelled pending reveal");
        }
        self.round += 1;
        let seed: u64 = self.seeds.random();
        self.last_seed = Some(seed);
        self.state = std::mem::take(&mut self.state).reduce(RoundEvent::DealRequested { seed });
        info!(round = self.round, seed, "dealt");
        self.schedule_tick();
        self.snapshot()
    }

    /// Waits for the next reveal of the current round and applies it.
    ///
    /// Returns `None` when nothing is pending (no round dealt, or already resolved).
    pub async fn next_update(&mut self) -> Option<RoundSnapshot> {
        while self.state.needs_tick() {
            let round = self.rx.recv().await?;
            if round != self.round {
                debug!(stale = round, current = self.round, "dropped stale reveal");
                continue;
            }
            self.pending = None;
            self.state = std::mem::take(&mut self.state).reduce(RoundEvent::RevealTick);
            debug!(round, revealed = self.state.revealed(), "revealed player card");
            if self.state.needs_tick() {
                self.schedule_tick();
            } else if let Some(v) = self.state.verdict() {
                info!(round, outcome = v.outcome.as_str(), message = %v.message, "round resolved");
            }
            return Some(self.snapshot());
        }
        None
    }

    fn schedule_tick(&mut self) {
        if !self.state.needs_tick() {
            return;
        }
        let tx = self.tx.clone();
        let round = self.round;
        self.pending = Some(ScheduledTask::schedule(self.reveal_delay, move || {
            // receiver lives as long as the table
            let _ = tx.send(round);
        }));
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round: self.round,
            phase: self.state.phase(),
            computer: self.state.computer_hand().copied(),
            visible_player: self.state.visible_player_cards().to_vec(),
            revealed: self.state.revealed(),
            verdict: self.state.verdict().cloned(),
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Seed of the deck dealt in the current round.
    pub fn last_seed(&self) -> Option<u64> {
        self.last_seed
    }
}

impl Drop for Table {
    fn drop(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::TestLogSubscriber;
    use simple_poker_engine::deck::deal_with_seed;
    use tokio::time::Instant;
    use tracing::Level;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn idle_table_has_no_updates() {
        let mut table = Table::new(Some(1), DELAY);
        assert_eq!(table.snapshot().phase, RoundPhase::Idle);
        assert!(table.next_update().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn reveals_four_cards_at_fixed_intervals_then_resolves() {
        let mut table = Table::new(Some(9), DELAY);
        let start = Instant::now();
        let first = table.deal();
        assert_eq!(first.phase, RoundPhase::Dealt);
        assert!(first.visible_player.is_empty());
        assert!(first.computer.is_some());

        for k in 1..=4u8 {
            let snap = table.next_update().await.unwrap();
            assert_eq!(snap.revealed, k);
            assert_eq!(snap.visible_player.len(), k as usize);
            assert_eq!(start.elapsed(), DELAY * k as u32);
        }
        let last = table.snapshot();
        assert_eq!(last.phase, RoundPhase::Resolved);
        assert!(last.verdict.is_some());
        assert!(table.next_update().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dealt_hands_come_from_the_recorded_seed() {
        let mut table = Table::new(Some(5), DELAY);
        table.deal();
        let seed = table.last_seed().unwrap();
        let d = deal_with_seed(seed).unwrap();
        assert_eq!(table.state().computer_hand(), Some(&d.computer));
        assert_eq!(table.state().player_hand(), Some(&d.player));
    }

    #[tokio::test(start_paused = true)]
    async fn same_seed_gives_same_sequence_of_rounds() {
        let mut a = Table::new(Some(77), DELAY);
        let mut b = Table::new(Some(77), DELAY);
        for _ in 0..3 {
            assert_eq!(a.deal(), b.deal());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn redeal_cancels_pending_reveal_and_restarts() {
        let mut table = Table::new(Some(3), DELAY);
        table.deal();
        table.next_update().await.unwrap();
        table.next_update().await.unwrap();

        // let the third tick land in the channel before dealing again
        tokio::time::sleep(DELAY * 2).await;
        let fresh = table.deal();
        assert_eq!(fresh.round, 2);
        assert_eq!(fresh.revealed, 0);
        assert!(fresh.verdict.is_none());

        let start = Instant::now();
        let snap = table.next_update().await.unwrap();
        assert_eq!(snap.round, 2);
        assert_eq!(snap.revealed, 1, "stale tick from round 1 must be ignored");
        assert_eq!(start.elapsed(), DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn logs_deal_and_verdict() {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());
        let _guard = tracing::subscriber::set_default(registry);

        let mut table = Table::new(Some(12), DELAY);
        table.deal();
        while table.next_update().await.is_some() {}

        let entries = subscriber.entries();
        assert!(
            entries
                .iter()
                .any(|e| e.level == Level::INFO && e.message.contains("dealt"))
        );
        let resolved = entries
            .iter()
            .find(|e| e.message.contains("round resolved"))
            .expect("verdict should be logged");
        assert!(resolved.fields.iter().any(|(k, _)| k == "outcome"));
        assert_eq!(
            entries
                .iter()
                .filter(|e| e.message.contains("revealed player card"))
                .count(),
            4
        );
    }
}
