//! Pure game rules: catalog records, guess judging and ledger arithmetic.
//!
//! Nothing in here performs I/O; services load documents through the
//! repository traits and hand them to these functions.

pub mod catalog;
pub mod guess;
pub mod ledger;


pub use catalog::TechnologyRecord;
pub use guess::{judge, normalize_guess, Verdict};
pub use ledger::{LedgerDocument, ScoreEntry, ScoresView};
