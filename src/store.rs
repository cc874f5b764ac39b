use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct BestScoreRecord {
    pub best: u32,
    pub achieved_at: DateTime<Utc>,
}

/// Keeps the best score in a small JSON file.
#[derive(Debug, Clone)]
pub struct BestScoreStore {
    path: PathBuf,
}

impl BestScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored best. Missing or broken data resets the file to 0.
    pub fn load(&self) -> u32 {
        match self.read() {
            Ok(record) => {
                tracing::info!(best = record.best, path = %self.path.display(), "loaded best score");
                record.best
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "best score unavailable, starting from 0: {err:#}");
                if let Err(err) = self.save(0) {
                    tracing::warn!("could not reset best score store: {err:#}");
                }
                0
            }
        }
    }

    pub fn save(&self, best: u32) -> anyhow::Result<()> {
        let record = BestScoreRecord {
            best,
            achieved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&record).context("serialize best score")?;
        fs::write(&self.path, json)
            .with_context(|| format!("write best score to {}", self.path.display()))?;
        Ok(())
    }

    fn read(&self) -> anyhow::Result<BestScoreRecord> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let record = serde_json::from_str(&content).context("parse best score record")?;
        Ok(record)
    }
}
