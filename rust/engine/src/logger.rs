use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::config::Blinds;
use crate::game::{GameState, Phase};
use crate::hand::HandResult;
use crate::player::{PlayerAction, PlayerId};

/// Records a single player action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player_id: PlayerId,
    /// The betting phase when this action occurred
    pub phase: Phase,
    pub action: PlayerAction,
}

/// Chips paid to one winner.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub player_id: PlayerId,
    pub amount: u32,
}

/// A hand shown down.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RevealedHand {
    pub player_id: PlayerId,
    pub hole_cards: Vec<Card>,
    pub result: HandResult,
}

/// How the pot was awarded at the end of a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Everyone tied at the best score (or the sole survivor)
    pub winners: Vec<PlayerId>,
    pub payouts: Vec<Payout>,
    /// Empty when everybody else folded
    #[serde(default)]
    pub hands: Vec<RevealedHand>,
    /// True when all other players folded
    #[serde(default)]
    pub uncontested: bool,
}

/// Chips held by a player when the hand ended.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player_id: PlayerId,
    pub name: String,
    pub chips: u32,
}

/// Complete record of a hand, written as one JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Format: YYYYMMDD-NNNNNN
    pub hand_id: String,
    /// RNG seed the hand was shuffled with, when known
    pub seed: Option<u64>,
    pub dealer_index: usize,
    pub blinds: Blinds,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    pub players: Vec<PlayerSummary>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
    /// RFC3339 timestamp
    #[serde(default)]
    pub ts: Option<String>,
}

impl HandRecord {
    pub fn from_state(hand_id: String, seed: Option<u64>, state: &GameState) -> Self {
        Self {
            hand_id,
            seed,
            dealer_index: state.dealer_index,
            blinds: state.blinds,
            actions: state.history.clone(),
            board: state.community_cards.clone(),
            players: state
                .players
                .iter()
                .map(|p| PlayerSummary {
                    player_id: p.id,
                    name: p.name.clone(),
                    chips: p.chips,
                })
                .collect(),
            showdown: state.showdown.clone(),
            ts: None,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends hand records to a JSONL file and hands out sequential ids.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Id generation only; `write` is a no-op.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_zero_padded_and_sequential() {
        let mut log = HandLogger::detached("20260101");
        assert_eq!(log.next_id(), "20260101-000001");
        assert_eq!(log.next_id(), "20260101-000002");
        assert_eq!(format_hand_id("19991231", 123456), "19991231-123456");
    }
}
