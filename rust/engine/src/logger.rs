use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::rules::{GuessResult, Outcome};

/// One scored round, as kept in the session history and written to JSONL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number within the game, starting at 1
    pub round: u32,
    /// Seed of the deck generator (enables replay)
    pub seed: u64,
    pub computer: Card,
    pub player: Card,
    pub guess: Outcome,
    /// Probability of the guessed outcome before the player's card was revealed
    pub probability: f64,
    pub result: GuessResult,
    /// Cumulative score after this round
    pub score: u32,
    /// Timestamp when the round was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Appends [`RoundRecord`]s to a JSONL file, one record per LF-terminated line.
pub struct RoundLogger {
    writer: BufWriter<File>,
    written: usize,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
            written: 0,
        })
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }
}
