//! # Document Store
//!
//! Durable home for the résumé snapshot.
//!
//! The engine never touches storage itself; pagination stays a pure
//! function of the document. The editor host owns a [`DocumentStore`] and
//! drives the load-at-startup / save-on-every-change cycle against it:
//! `load` returns `None` on first launch (the host falls back to
//! [`template::starter`](crate::template::starter)), and `save` runs after
//! every mutation.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::ResumeError;
use crate::model::ResumeDocument;

/// Fixed application key the snapshot is stored under.
pub const STORAGE_KEY: &str = "zenresume_data";

/// Load/save seam injected into the editor host.
pub trait DocumentStore {
    /// Fetch the persisted snapshot, or `None` if none exists yet.
    fn load(&self) -> Result<Option<ResumeDocument>, ResumeError>;

    /// Persist a snapshot, replacing any previous one.
    fn save(&self, document: &ResumeDocument) -> Result<(), ResumeError>;
}

/// Snapshot persisted as pretty-printed JSON in a single file named after
/// [`STORAGE_KEY`] inside a caller-chosen directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store under `dir/zenresume_data.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let mut path = dir.into();
        path.push(format!("{STORAGE_KEY}.json"));
        JsonFileStore { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Option<ResumeDocument>, ResumeError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let document = serde_json::from_str(&raw)?;
        Ok(Some(document))
    }

    fn save(&self, document: &ResumeDocument) -> Result<(), ResumeError> {
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)?;
        log::debug!("saved snapshot to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and for hosts without a filesystem.
#[derive(Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<ResumeDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Option<ResumeDocument>, ResumeError> {
        Ok(self.snapshot.lock().unwrap().clone())
    }

    fn save(&self, document: &ResumeDocument) -> Result<(), ResumeError> {
        *self.snapshot.lock().unwrap() = Some(document.clone());
        Ok(())
    }
}
