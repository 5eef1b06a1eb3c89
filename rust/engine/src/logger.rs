use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::hand::{evaluate, Evaluation, Hand};
use crate::round::RoundState;
use crate::verdict::Verdict;

/// Summary of one resolved round, serialized as a single JSON line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed the deck was shuffled from
    pub seed: Option<u64>,
    pub computer: Hand,
    pub player: Hand,
    pub computer_eval: Evaluation,
    pub player_eval: Evaluation,
    pub verdict: Verdict,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    /// Builds a record from a resolved round. Returns `None` before resolution.
    pub fn from_state(round_id: String, seed: Option<u64>, state: &RoundState) -> Option<Self> {
        let computer = *state.computer_hand()?;
        let player = *state.player_hand()?;
        let verdict = state.verdict()?.clone();
        Some(Self {
            round_id,
            seed,
            computer,
            player,
            computer_eval: evaluate(&computer),
            player_eval: evaluate(&player),
            verdict,
            ts: None,
        })
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct RoundLogger {
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn for_today() -> Self {
        Self::with_date(&Utc::now().format("%Y%m%d").to_string())
    }

    pub fn with_date(date: &str) -> Self {
        Self {
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&self, out: &mut dyn Write, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}
