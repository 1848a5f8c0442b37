use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAYER_NAME: &str = "Guest";

fn default_player_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

/// Body of `GET /api/technology/{index}`. Only the image; the name stays
/// server-side until a guess is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyImageResponse {
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub index: i64,
    pub guessed_name: String,
    /// Absent means a guest.
    #[serde(default = "default_player_name")]
    pub player_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub is_correct: bool,
    pub technology_name: String,
}
