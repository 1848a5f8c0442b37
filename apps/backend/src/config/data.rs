use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "./data";
const CATALOG_FILE: &str = "technologies.json";
const SCORES_FILE: &str = "score.json";

/// Locations of the catalog and ledger documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub catalog: PathBuf,
    pub scores: PathBuf,
}

impl DataPaths {
    /// Both documents inside `dir`, under their default file names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            catalog: dir.join(CATALOG_FILE),
            scores: dir.join(SCORES_FILE),
        }
    }

    /// `TECHGUESS_DATA_DIR` (default `./data`), with per-file overrides from
    /// `TECHGUESS_CATALOG_FILE` and `TECHGUESS_SCORES_FILE`.
    pub fn from_env() -> Self {
        let dir = env::var("TECHGUESS_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let mut paths = Self::in_dir(dir);
        if let Ok(catalog) = env::var("TECHGUESS_CATALOG_FILE") {
            paths.catalog = PathBuf::from(catalog);
        }
        if let Ok(scores) = env::var("TECHGUESS_SCORES_FILE") {
            paths.scores = PathBuf::from(scores);
        }
        paths
    }
}
