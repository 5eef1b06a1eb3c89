//! UI helper functions for terminal output formatting.

use simple_poker_engine::cards::Card;
use simple_poker_engine::verdict::Verdict;
use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Cards separated by single spaces, e.g. `"A♥ 10♣"`.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Verdict line with its outcome tag, e.g. `"[player-win] Player wins with a Pair (A)"`.
pub fn format_verdict(v: &Verdict) -> String {
    format!("[{}] {}", v.outcome.as_str(), v.message)
}
