//! Repository traits for the domain layer.
//!
//! Each trait is a whole-document contract: implementations read or write the
//! complete catalog or ledger, never a partial update.

pub mod catalog;
pub mod scores;

pub use catalog::CatalogSource;
pub use scores::LedgerStore;
