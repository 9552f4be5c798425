//! JSON-backed preference store.
//!
//! All preferences live in one JSON file. The file is read once when the store
//! is opened and rewritten in full after every mutation (write to a sibling
//! temp file, then rename over the original).
//!
//! A missing file starts an empty store. A file that cannot be read or parsed
//! also starts an empty store; the broken file is left alone until the next
//! write replaces it.
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::storage::area::PreferenceStore;

/// On-disk representation.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    entries: BTreeMap<String, String>,
}

pub struct JsonPreferenceStore {
    /// Path to the JSON file where preferences are stored.
    path: PathBuf,
    /// In-memory copy of the file contents.
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonPreferenceStore {
    /// Opens (or lazily creates) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = Self::load_file(&path);

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn load_file(path: &Path) -> BTreeMap<String, String> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                log::warn!("Preferences: cannot read {}: {}", path.display(), e);
                return BTreeMap::new();
            }
        };

        match serde_json::from_str::<PreferenceFile>(&contents) {
            Ok(file) => file.entries,
            Err(e) => {
                log::warn!("Preferences: {} is corrupt, starting empty: {}", path.display(), e);
                BTreeMap::new()
            }
        }
    }

    fn save_file(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let file = PreferenceFile {
            entries: entries.clone(),
        };
        let contents = serde_json::to_string_pretty(&file)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path).with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| anyhow!("preference map poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        self.save_file(&entries)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| anyhow!("preference map poisoned"))?;
        if entries.remove(key).is_some() {
            self.save_file(&entries)?;
        }
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|e| e.keys().cloned().collect())
            .unwrap_or_default()
    }
}
