use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use blackjack_core::game::round::RoundOutcome;
use blackjack_core::model::score::HandScore;
use serde::Serialize;

/// One JSONL row per completed round.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RoundRecord {
    pub round: u32,
    pub player: HandScore,
    pub dealer: HandScore,
    pub outcome: RoundOutcome,
}

pub struct RoundRecorder {
    writer: BufWriter<File>,
}

impl RoundRecorder {
    pub fn append_to(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening record file at {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    pub fn record(&mut self, record: &RoundRecord) -> Result<()> {
        let line = serde_json::to_string(record).context("serialising round record")?;
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}
