use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Accumulated score for one player name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub player_name: String,
    pub value: i64,
}

/// The whole score document, entries in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerDocument {
    pub scores: Vec<ScoreEntry>,
}

/// Response of a score lookup.
///
/// The two shapes stay distinct on the wire: a bare array means the player
/// was found, the `{ "scores": [...] }` wrapper means the lookup fell back
/// to the whole ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoresView {
    Player(Vec<ScoreEntry>),
    Ledger(LedgerDocument),
}

impl LedgerDocument {
    /// Add `delta` to the first entry named `player_name`, creating the entry
    /// when none exists. A zero delta still creates the entry.
    ///
    /// A total that would leave the `i64` range is rejected and the document
    /// is left untouched.
    pub fn apply(&mut self, player_name: &str, delta: i64) -> Result<&ScoreEntry, DomainError> {
        let pos = match self
            .scores
            .iter()
            .position(|s| s.player_name == player_name)
        {
            Some(pos) => {
                let current = self.scores[pos].value;
                self.scores[pos].value = current.checked_add(delta).ok_or_else(|| {
                    DomainError::infra(
                        InfraErrorKind::DataCorruption,
                        format!("Score for {player_name} overflows: {current} + {delta}"),
                    )
                })?;
                pos
            }
            None => {
                self.scores.push(ScoreEntry {
                    player_name: player_name.to_string(),
                    value: delta,
                });
                self.scores.len() - 1
            }
        };
        Ok(&self.scores[pos])
    }

    /// Entries matching `player_name`, or the whole ledger when the name is
    /// empty or unknown.
    pub fn view_for(&self, player_name: &str) -> ScoresView {
        let matching: Vec<ScoreEntry> = self
            .scores
            .iter()
            .filter(|s| s.player_name == player_name)
            .cloned()
            .collect();

        if player_name.is_empty() || matching.is_empty() {
            ScoresView::Ledger(self.clone())
        } else {
            ScoresView::Player(matching)
        }
    }
}

impl ScoresView {
    /// Best-effort value to show at the end of a game: the last ledger entry
    /// after a fallback, otherwise the first matching entry.
    pub fn display_value(&self) -> Option<i64> {
        match self {
            ScoresView::Ledger(doc) => doc.scores.last().map(|s| s.value),
            ScoresView::Player(entries) => entries.first().map(|s| s.value),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ScoresView::Ledger(_))
    }
}
