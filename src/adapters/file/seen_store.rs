//! JSON file seen-set store
//!
//! Implements the `SeenStore` port with a single JSON file. Writes a sorted
//! array of identifiers; reads either that or the older `{"seen": [...]}`
//! object.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::core::models::SeenSet;
use crate::core::ports::SeenStore;

/// Accepted on-disk shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeenFile {
    /// Current shape: `["articleNo:1", ...]`
    List(Vec<String>),
    /// Older shape: `{"seen": ["articleNo:1", ...]}`
    Wrapped {
        #[serde(default)]
        seen: Vec<String>,
    },
}

impl SeenFile {
    fn into_seen(self) -> SeenSet {
        match self {
            Self::List(ids) | Self::Wrapped { seen: ids } => ids.into_iter().collect(),
        }
    }
}

/// Seen-set stored as a JSON file
#[derive(Debug, Clone)]
pub struct JsonSeenStore {
    path: PathBuf,
}

impl JsonSeenStore {
    /// Create a store backed by `path` (need not exist yet)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SeenStore for JsonSeenStore {
    fn load(&self) -> anyhow::Result<SeenSet> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no state at {}, starting fresh", self.path.display());
                return Ok(SeenSet::new());
            },
            Err(e) => {
                log::warn!("cannot read {}, starting fresh: {e}", self.path.display());
                return Ok(SeenSet::new());
            },
        };

        match serde_json::from_str::<SeenFile>(&content) {
            Ok(file) => {
                let seen = file.into_seen();
                log::debug!("loaded {} seen id(s) from {}", seen.len(), self.path.display());
                Ok(seen)
            },
            Err(e) => {
                log::warn!("cannot parse {}, starting fresh: {e}", self.path.display());
                Ok(SeenSet::new())
            },
        }
    }

    fn save(&self, seen: &SeenSet) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let ids: Vec<&str> = seen.iter().collect();
        let content = serde_json::to_string_pretty(&ids)?;

        // Write beside the target then rename, so a crash never leaves half a file.
        let temp = self.temp_path();
        fs::write(&temp, content).with_context(|| format!("failed to write {}", temp.display()))?;
        fs::rename(&temp, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        log::debug!("saved {} seen id(s) to {}", seen.len(), self.path.display());
        Ok(())
    }
}
