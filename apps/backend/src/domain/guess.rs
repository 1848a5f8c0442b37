use crate::domain::catalog::TechnologyRecord;

/// Outcome of judging one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_correct: bool,
    /// Amount to add to the player's ledger entry. Zero for a miss.
    pub delta: i64,
}

/// Strip every whitespace character and case-fold.
///
/// "HTML 5", " html5 " and "HTML5" all normalize to "html5".
pub fn normalize_guess(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare a raw guess against the record's name.
///
/// Only the guess loses its whitespace; the stored name is case-folded as is,
/// so names containing spaces never match a normalized guess.
pub fn judge(record: &TechnologyRecord, raw_guess: &str) -> Verdict {
    let is_correct = record.name.to_lowercase() == normalize_guess(raw_guess);
    Verdict {
        is_correct,
        delta: if is_correct { record.level } else { 0 },
    }
}
