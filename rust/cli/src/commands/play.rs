//! # Play Command
//!
//! Plays rounds against the computer in the terminal. The computer's hand is
//! shown as soon as it is dealt; the player's cards appear one at a time, one
//! reveal delay apart, and the verdict follows the fourth card.
//!
//! Without `--rounds` the command waits for Enter before each deal and stops on
//! `q`, `quit` or end of input. With `--rounds N` it deals N rounds back to back.

use crate::error::CliError;
use crate::io_utils::{is_quit, read_stdin_line};
use crate::table::{RoundSnapshot, Table};
use crate::ui;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Handle the play command.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play unattended; `None` plays interactively
/// * `seed` - RNG seed for reproducible deals (default: random)
/// * `reveal_delay` - Pause between two player card reveals
/// * `out` - Output stream for the table display
/// * `stdin` - Input stream for deal prompts
///
/// # Returns
///
/// * `Ok(())` when the requested rounds are played or the user quits
/// * `Err(CliError)` if `rounds` is zero, the runtime cannot start, or output fails
pub fn handle_play_command(
    rounds: Option<u32>,
    seed: Option<u64>,
    reveal_delay: Duration,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if rounds == Some(0) {
        return Err(CliError::InvalidInput("rounds must be >= 1".into()));
    }
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    rt.block_on(play_rounds(rounds, seed, reveal_delay, out, stdin))
}

async fn play_rounds(
    rounds: Option<u32>,
    seed: Option<u64>,
    reveal_delay: Duration,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut table = Table::new(seed, reveal_delay);
    let mut played = 0u32;
    loop {
        match rounds {
            Some(n) if played >= n => break,
            Some(_) => {}
            None => {
                writeln!(out, "Press Enter to deal (q to quit)")?;
                out.flush()?;
                match read_stdin_line(stdin) {
                    Some(line) if !is_quit(&line) => {}
                    _ => break,
                }
            }
        }

        let snap = table.deal();
        played += 1;
        print_deal(out, &snap)?;
        while let Some(snap) = table.next_update().await {
            print_reveal(out, &snap)?;
        }
    }
    writeln!(out, "Rounds played: {}", played)?;
    Ok(())
}

fn print_deal(out: &mut dyn Write, snap: &RoundSnapshot) -> Result<(), CliError> {
    writeln!(out, "Round {}", snap.round)?;
    if let Some(computer) = &snap.computer {
        writeln!(out, "Computer: {}", computer)?;
    }
    out.flush()?;
    Ok(())
}

fn print_reveal(out: &mut dyn Write, snap: &RoundSnapshot) -> Result<(), CliError> {
    if let Some(card) = snap.visible_player.last() {
        writeln!(out, "Player card {}: {}", snap.revealed, card)?;
    }
    if let Some(v) = &snap.verdict {
        writeln!(out, "Player: {}", ui::format_cards(&snap.visible_player))?;
        writeln!(out, "{}", ui::format_verdict(v))?;
    }
    out.flush()?;
    Ok(())
}
