//! Temporary data directories holding the two JSON documents.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

pub const CATALOG_FILE: &str = "technologies.json";
pub const SCORES_FILE: &str = "score.json";

/// A scratch directory removed on drop.
pub struct TempDataDir {
    dir: TempDir,
}

impl TempDataDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp data dir"),
        }
    }

    /// Directory seeded with a catalog and a ledger document.
    pub fn seeded(catalog: &Value, scores: &Value) -> Self {
        let data = Self::new();
        data.write_catalog(catalog);
        data.write_scores(scores);
        data
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.dir.path().join(CATALOG_FILE)
    }

    pub fn scores_path(&self) -> PathBuf {
        self.dir.path().join(SCORES_FILE)
    }

    pub fn write_catalog(&self, catalog: &Value) {
        write_json(&self.catalog_path(), catalog);
    }

    pub fn write_scores(&self, scores: &Value) {
        write_json(&self.scores_path(), scores);
    }

    pub fn read_scores(&self) -> Value {
        let text = fs::read_to_string(self.scores_path()).expect("read scores file");
        serde_json::from_str(&text).expect("scores file is JSON")
    }
}

impl Default for TempDataDir {
    fn default() -> Self {
        Self::new()
    }
}

fn write_json(path: &Path, value: &Value) {
    let text = serde_json::to_string_pretty(value).expect("serialize fixture");
    fs::write(path, text).expect("write fixture");
}
