/// Top-five score table and its persistence.
///
/// The on-disk format is a bare JSON array of integers, e.g. `[900,400,0,0,0]`.
/// Anything that fails to read or parse is treated as "no scores yet".

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::HIGH_SCORE_SLOTS;

#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("high-score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("high-score file {path} is not a JSON score list: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Always exactly five entries, highest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u64>", into = "Vec<u64>")]
pub struct HighScores([u64; HIGH_SCORE_SLOTS]);

impl HighScores {
    pub fn entries(&self) -> &[u64; HIGH_SCORE_SLOTS] {
        &self.0
    }

    pub fn best(&self) -> u64 {
        self.0[0]
    }

    /// Insert `score`, keep the five largest.
    pub fn record(&mut self, score: u64) {
        let mut all = self.0.to_vec();
        all.push(score);
        *self = HighScores::from(all);
    }
}

impl From<Vec<u64>> for HighScores {
    /// Sorts descending, then pads with zeros or truncates to five entries.
    fn from(mut scores: Vec<u64>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        let mut table = [0; HIGH_SCORE_SLOTS];
        for (slot, score) in table.iter_mut().zip(scores) {
            *slot = score;
        }
        HighScores(table)
    }
}

impl From<HighScores> for Vec<u64> {
    fn from(scores: HighScores) -> Self {
        scores.0.to_vec()
    }
}

// ── Stores ───────────────────────────────────────────────────────────────────

pub trait ScoreStore {
    fn load(&mut self) -> Result<HighScores, ScoreStoreError>;
    fn save(&mut self, scores: &HighScores) -> Result<(), ScoreStoreError>;
}

/// JSON file on disk.  A missing file loads as the default table.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<HighScores, ScoreStoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HighScores::default())
            }
            Err(source) => {
                return Err(ScoreStoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| ScoreStoreError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, scores: &HighScores) -> Result<(), ScoreStoreError> {
        let text = serde_json::to_string(scores).map_err(|source| ScoreStoreError::Format {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text).map_err(|source| ScoreStoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Keeps the table in memory; used by tests and when no file is wanted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    pub scores: HighScores,
    pub saves: usize,
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<HighScores, ScoreStoreError> {
        Ok(self.scores.clone())
    }

    fn save(&mut self, scores: &HighScores) -> Result<(), ScoreStoreError> {
        self.scores = scores.clone();
        self.saves += 1;
        Ok(())
    }
}
