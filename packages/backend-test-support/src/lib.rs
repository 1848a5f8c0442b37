//! Test helpers for the TechGuess backend: logging setup, Problem Details
//! assertions and on-disk data fixtures.

pub mod data_dir;
pub mod logging;
pub mod problem_details;

pub use data_dir::TempDataDir;
pub use problem_details::{assert_problem_details_from_parts, assert_problem_details_from_service_response};
