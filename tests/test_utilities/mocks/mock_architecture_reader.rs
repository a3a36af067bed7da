use attack_paths::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ArchitectureReader serving an in-memory snapshot
///
/// Records every path it was asked to read.
#[derive(Clone)]
pub struct MockArchitectureReader {
    snapshot: ArchitectureSnapshot,
    pub reads: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockArchitectureReader {
    pub fn new(snapshot: ArchitectureSnapshot) -> Self {
        Self {
            snapshot,
            reads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Parses a snapshot from JSON text, as the file adapter would
    pub fn from_json(json: &str) -> Self {
        Self::new(serde_json::from_str(json).unwrap())
    }

    pub fn read_count(&self) -> usize {
        self.reads.lock().unwrap().len()
    }
}

impl ArchitectureReader for MockArchitectureReader {
    fn read_snapshot(&self, data_path: &Path) -> Result<ArchitectureSnapshot> {
        self.reads.lock().unwrap().push(data_path.to_path_buf());
        Ok(self.snapshot.clone())
    }
}
