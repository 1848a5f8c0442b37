//! JSON wire types shared by the HTTP routes and the HTTP client.

pub mod quiz;

pub use quiz::{GuessRequest, GuessResponse, TechnologyImageResponse, DEFAULT_PLAYER_NAME};
