use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, NotFoundKind};

/// One guessable technology. The on-disk field names are kept as the
/// catalog document spells them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyRecord {
    #[serde(rename = "technology")]
    pub name: String,
    #[serde(rename = "image")]
    pub image_ref: String,
    /// Points awarded for a correct guess.
    pub level: i64,
}

/// Bounds-checked lookup. Negative indices are treated like any other
/// out-of-range index.
pub fn record_at(
    records: &[TechnologyRecord],
    index: i64,
) -> Result<&TechnologyRecord, DomainError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| records.get(i))
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Technology,
                format!("Technology not found at index {index}"),
            )
        })
}
