use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Result;
use crate::models::job::JobPosting;

/// Repository for user-submitted draft postings. Injected so the JSON-file
/// implementation can be swapped for a real persistence backend without
/// touching view or route logic.
pub trait DraftStore: Send + Sync {
    /// All stored drafts, newest first. Missing or unreadable data is
    /// treated as an empty list, never as a failure.
    fn load(&self) -> Result<Vec<JobPosting>>;

    /// Prepends a record, so drafts stay newest first.
    fn append(&self, record: JobPosting) -> Result<()>;
}

/// One JSON file holding a serialized array of postings.
pub struct JsonFileDraftStore {
    path: PathBuf,
    // Serializes the read-modify-write in append.
    lock: Mutex<()>,
}

impl JsonFileDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Vec<JobPosting> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %err, "Could not read draft store");
                }
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Draft store is malformed, treating as empty");
                Vec::new()
            }
        }
    }
}

impl DraftStore for JsonFileDraftStore {
    fn load(&self) -> Result<Vec<JobPosting>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_all())
    }

    fn append(&self, record: JobPosting) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut items = self.read_all();
        items.insert(0, record);
        let raw = serde_json::to_string_pretty(&items)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
