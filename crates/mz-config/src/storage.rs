//! Persisted state location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_memory_path() -> PathBuf {
    PathBuf::from("data/memory.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// JSON document holding tasks and the conversation transcript.
    #[serde(default = "default_memory_path")]
    pub memory_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            memory_path: default_memory_path(),
        }
    }
}
