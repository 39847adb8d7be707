//! File-backed best-score storage.
//!
//! The best score lives in a small JSON document under a fixed key. Other
//! keys in the same document belong to someone else and survive every save:
//!
//! ```json
//! {"best2048":4096,"theme":"dark"}
//! ```
//!
//! A missing file means "no best yet". An unreadable or malformed file is
//! logged and also treated as "no best yet"; the next save replaces it.
//! Saves go through a temporary file and a rename so a crash never leaves a
//! half-written document behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use tui_2048_core::BestScoreStore;

pub use tui_2048_core as core;

/// Key under which the best score is stored
pub const BEST_SCORE_KEY: &str = "best2048";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct BestScoreDoc {
    #[serde(rename = "best2048", default, skip_serializing_if = "Option::is_none")]
    best: Option<u32>,
    /// Keys owned by other data sharing the file
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Best score stored as JSON at a fixed path
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<BestScoreDoc>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        let doc = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(doc))
    }

    fn write(&self, best: u32) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating directory {}", dir.display()))?;
        }

        let mut doc = match self.read() {
            Ok(doc) => doc.unwrap_or_default(),
            Err(e) => {
                warn!("replacing unreadable best-score file: {:#}", e);
                BestScoreDoc::default()
            }
        };
        doc.best = Some(best);

        let tmp = self.path.with_extension("json.tmp");
        let body = serde_json::to_vec(&doc)?;
        fs::write(&tmp, body).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

impl BestScoreStore for FileStore {
    fn load(&self) -> Option<u32> {
        match self.read() {
            Ok(doc) => doc.and_then(|d| d.best),
            Err(e) => {
                warn!("ignoring stored best score: {:#}", e);
                None
            }
        }
    }

    fn save(&mut self, best: u32) -> Result<()> {
        self.write(best)
    }
}
