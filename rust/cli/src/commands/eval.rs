//! Hand evaluation command.
//!
//! Evaluates a four-card hand given on the command line, e.g.
//! `simple-poker eval Ah Ad 7s 8c`, and prints its category and tie-break card.

use crate::error::CliError;
use simple_poker_engine::cards::Card;
use simple_poker_engine::hand::{Hand, evaluate};
use std::io::Write;

pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = cards
        .iter()
        .map(|s| s.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;
    let hand = Hand::try_from(parsed.as_slice())?;
    let eval = evaluate(&hand);

    writeln!(out, "Hand: {}", hand)?;
    writeln!(out, "Category: {}", eval.category)?;
    match eval.tie_break_rank() {
        Some(rank) => writeln!(out, "Tie-break: {} ({})", rank.label(), eval.tie_break)?,
        None => writeln!(out, "Tie-break: {}", eval.tie_break)?,
    }
    Ok(())
}
