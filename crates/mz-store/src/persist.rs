//! Memory file persistence.
//!
//! The memory file is a single JSON document shaped exactly like [`Store`]:
//! `{ "conversations": [...], "tasks": [...] }`. Saving rewrites the whole
//! file through a temporary sibling and a rename. Loading never fails: a
//! file that is missing, empty, not JSON, or not shaped like a store is
//! replaced with an empty store, after the old content is copied to a
//! `.bak` sibling. Entries that decode but break a task invariant are fixed in
//! place, also after a backup.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::Store;
use crate::error::StoreError;

const REQUIRED_FIELDS: [&str; 2] = ["conversations", "tasks"];

/// Why a memory file could not be used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairReason {
    /// No file at the path.
    Missing,
    /// The file has no content.
    Empty,
    /// The content is not valid JSON, or an entry does not decode.
    Malformed(String),
    /// Valid JSON, but not an object with `conversations` and `tasks` arrays.
    InvalidStructure(String),
}

/// Result of examining a memory file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    Valid(Store),
    /// Decoded, but some tasks had to be fixed; `fixes` lists what changed.
    Normalized { store: Store, fixes: Vec<String> },
    NeedsRepair(RepairReason),
}

/// Location of the persisted store.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    path: PathBuf,
}

impl MemoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the previous content goes before a repair overwrites it.
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| "memory.json".into(), std::ffi::OsStr::to_os_string);
        name.push(".bak");
        self.path.with_file_name(name)
    }

    /// Read and check the memory file without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for read failures other than a missing file.
    pub fn inspect(&self) -> Result<Inspection, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(Inspection::NeedsRepair(RepairReason::Missing));
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        Ok(inspect_document(&raw))
    }

    /// Load the store, repairing the file on disk if needed.
    ///
    /// Always returns a usable store. A file that cannot be read at all is
    /// left untouched and an empty store is returned.
    #[must_use]
    pub fn load(&self) -> Store {
        let reason = match self.inspect() {
            Ok(Inspection::Valid(store)) => {
                info!(
                    path = %self.path.display(),
                    tasks = store.tasks().len(),
                    messages = store.transcript().len(),
                    "memory loaded"
                );
                return store;
            }
            Ok(Inspection::Normalized { store, fixes }) => {
                for fix in &fixes {
                    warn!(path = %self.path.display(), %fix, "memory file entry repaired");
                }
                self.back_up();
                if let Err(e) = self.save(&store) {
                    warn!(error = %e, "failed to write repaired memory file");
                }
                return store;
            }
            Ok(Inspection::NeedsRepair(reason)) => reason,
            Err(e) => {
                error!(error = %e, "memory file unreadable; starting with an empty store");
                return Store::default();
            }
        };

        match &reason {
            RepairReason::Missing => info!(path = %self.path.display(), "memory file not found; creating"),
            RepairReason::Empty => info!(path = %self.path.display(), "memory file empty; repairing"),
            RepairReason::Malformed(detail) => {
                warn!(path = %self.path.display(), %detail, "memory file corrupted; repairing");
                self.back_up();
            }
            RepairReason::InvalidStructure(detail) => {
                warn!(path = %self.path.display(), %detail, "memory file failed structure validation; rebuilding");
                self.back_up();
            }
        }

        let store = Store::default();
        if let Err(e) = self.save(&store) {
            warn!(error = %e, "failed to write repaired memory file");
        }
        store
    }

    /// Copy the current file to [`MemoryFile::backup_path`], replacing any
    /// older backup. Failure is logged and otherwise ignored.
    fn back_up(&self) {
        let backup = self.backup_path();
        match std::fs::copy(&self.path, &backup) {
            Ok(_) => info!(backup = %backup.display(), "previous memory file kept"),
            Err(e) => warn!(error = %e, backup = %backup.display(), "failed to back up memory file"),
        }
    }

    /// Overwrite the memory file with `store`, indented for humans.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the directory cannot be created, the store
    /// cannot be encoded, or the file cannot be written.
    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let bytes = encode(store)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| StoreError::io(&dir, e))?;
        tmp.write_all(&bytes)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "memory saved");
        Ok(())
    }
}

/// Classify the text of a memory file.
fn inspect_document(raw: &str) -> Inspection {
    if raw.trim().is_empty() {
        return Inspection::NeedsRepair(RepairReason::Empty);
    }

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => return Inspection::NeedsRepair(RepairReason::Malformed(e.to_string())),
    };

    let Some(object) = value.as_object() else {
        return Inspection::NeedsRepair(RepairReason::InvalidStructure(String::from(
            "top-level value is not an object",
        )));
    };

    for field in REQUIRED_FIELDS {
        match object.get(field) {
            None => {
                return Inspection::NeedsRepair(RepairReason::InvalidStructure(format!(
                    "missing '{field}'"
                )));
            }
            Some(entry) if !entry.is_array() => {
                return Inspection::NeedsRepair(RepairReason::InvalidStructure(format!(
                    "'{field}' must be a list"
                )));
            }
            Some(_) => {}
        }
    }

    let mut store = match serde_json::from_value::<Store>(value) {
        Ok(store) => store,
        Err(e) => return Inspection::NeedsRepair(RepairReason::Malformed(e.to_string())),
    };

    let fixes = store.enforce_invariants(Utc::now());
    if fixes.is_empty() {
        Inspection::Valid(store)
    } else {
        Inspection::Normalized { store, fixes }
    }
}

/// Four-space indented JSON with a trailing newline.
fn encode(store: &Store) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    store.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}
