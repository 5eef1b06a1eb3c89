//! Deal command handler for single round dealing and display.
//!
//! Deals one round, resolves it immediately (no reveal delay) and prints both
//! hands with the verdict, or a single JSON `RoundRecord` line with `--json`.

use crate::error::CliError;
use crate::ui;
use simple_poker_engine::logger::{RoundLogger, RoundRecord};
use simple_poker_engine::round::{RoundEvent, RoundState};
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `json` - Emit a JSON round record instead of text
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut state = RoundState::new().reduce(RoundEvent::DealRequested { seed });
    while state.needs_tick() {
        state = state.reduce(RoundEvent::RevealTick);
    }

    if json {
        let mut logger = RoundLogger::for_today();
        let id = logger.next_id();
        let record = RoundRecord::from_state(id, Some(seed), &state)
            .ok_or_else(|| CliError::InvalidInput("round did not resolve".into()))?;
        logger.write(out, &record)?;
        return Ok(());
    }

    let (Some(computer), Some(player), Some(verdict)) =
        (state.computer_hand(), state.player_hand(), state.verdict())
    else {
        return Err(CliError::InvalidInput("round did not resolve".into()));
    };
    writeln!(out, "Computer: {}", computer)?;
    writeln!(out, "Player: {}", player)?;
    writeln!(out, "{}", ui::format_verdict(verdict))?;
    Ok(())
}
