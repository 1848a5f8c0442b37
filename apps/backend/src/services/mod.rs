//! Domain services composed over the repository traits.

pub mod catalog;
pub mod guess;
pub mod scores;

pub use catalog::CatalogService;
pub use guess::{GuessOutcome, GuessService};
pub use scores::ScoreLedger;
