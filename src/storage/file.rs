use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::filter::FilterState;
use crate::storage::FilterStore;
use crate::storage::errors::StorageResult;

/// File-backed [`FilterStore`]: one JSON document at a fixed path plays the
/// role of the single durable storage key.
#[derive(Clone, Debug)]
pub struct JsonFilterStore {
    path: PathBuf,
}

impl JsonFilterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FilterStore for JsonFilterStore {
    fn save(&self, filters: Option<&FilterState>) -> StorageResult<()> {
        match filters {
            Some(state) => {
                if let Some(parent) = self.path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                let serialized = serde_json::to_string(state)?;
                fs::write(&self.path, serialized)?;
            }
            None => {
                if let Err(err) = fs::remove_file(&self.path) {
                    if err.kind() != ErrorKind::NotFound {
                        return Err(err.into());
                    }
                }
            }
        }
        Ok(())
    }

    fn load(&self) -> Option<FilterState> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("Failed to read saved filters: {err}");
                return None;
            }
        };

        match serde_json::from_str::<FilterState>(&raw) {
            Ok(state) => state.normalized(),
            Err(err) => {
                log::warn!("Ignoring malformed saved filters: {err}");
                None
            }
        }
    }
}
