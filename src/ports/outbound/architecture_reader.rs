use crate::path_analysis::domain::ArchitectureSnapshot;
use crate::shared::Result;
use std::path::Path;

/// ArchitectureReader port for loading the `{nodes, edges}` snapshot
///
/// Every query loads a fresh snapshot; implementations must not cache.
pub trait ArchitectureReader {
    /// Reads and parses the snapshot at `data_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist, is not a regular file, or is too large
    /// - The content is not a valid snapshot document
    /// - A service name fails validation
    fn read_snapshot(&self, data_path: &Path) -> Result<ArchitectureSnapshot>;
}
