//! Score ledger service.

use std::sync::Arc;

use tracing::info;

use crate::domain::ledger::{ScoreEntry, ScoresView};
use crate::errors::domain::DomainError;
use crate::repos::scores::LedgerStore;

/// Player-name to cumulative-score mapping over a [`LedgerStore`].
#[derive(Clone)]
pub struct ScoreLedger {
    store: Arc<dyn LedgerStore>,
}

impl ScoreLedger {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Entries for `player_name`, or the whole ledger when the name is empty
    /// or unknown.
    pub async fn get(&self, player_name: &str) -> Result<ScoresView, DomainError> {
        let doc = self.store.read_all().await?;
        Ok(doc.view_for(player_name))
    }

    /// Add `delta` to the player's entry (creating it when absent) and
    /// persist the whole ledger before returning.
    ///
    /// Read/modify/write without a lock: concurrent calls for the same
    /// player can lose an update.
    pub async fn record_outcome(
        &self,
        player_name: &str,
        delta: i64,
    ) -> Result<ScoreEntry, DomainError> {
        let mut doc = self.store.read_all().await?;
        let entry = doc.apply(player_name, delta)?.clone();
        self.store.write_all(&doc).await?;

        info!(player = %player_name, delta, total = entry.value, "score recorded");
        Ok(entry)
    }
}
