//! Guess judging: one catalog read, one ledger update.

use tracing::debug;

use crate::domain::guess::judge;
use crate::errors::domain::DomainError;
use crate::services::catalog::CatalogService;
use crate::services::scores::ScoreLedger;

/// Result of one submitted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub is_correct: bool,
    pub technology_name: String,
    /// Points added to the player's entry by this guess.
    pub delta: i64,
}

pub struct GuessService {
    catalog: CatalogService,
    ledger: ScoreLedger,
}

impl GuessService {
    pub fn new(catalog: CatalogService, ledger: ScoreLedger) -> Self {
        Self { catalog, ledger }
    }

    /// Judge `guessed_name` against the record at `index` and record the
    /// outcome for `player_name`.
    ///
    /// The ledger is updated on a miss as well, with a zero delta, so every
    /// player who guessed at least once has an entry. An out-of-range index
    /// fails before the ledger is touched.
    pub async fn submit(
        &self,
        index: i64,
        guessed_name: &str,
        player_name: &str,
    ) -> Result<GuessOutcome, DomainError> {
        let record = self.catalog.record_at(index).await?;
        let verdict = judge(&record, guessed_name);
        debug!(index, correct = verdict.is_correct, "guess judged");

        self.ledger
            .record_outcome(player_name, verdict.delta)
            .await?;

        Ok(GuessOutcome {
            is_correct: verdict.is_correct,
            technology_name: record.name,
            delta: verdict.delta,
        })
    }
}
