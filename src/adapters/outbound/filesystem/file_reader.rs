use crate::path_analysis::domain::{validate_node_name, ArchitectureSnapshot};
use crate::ports::outbound::ArchitectureReader;
use crate::shared::error::AnalysisError;
use crate::shared::security::{validate_readable_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter loading the architecture snapshot from a JSON file
///
/// The file is re-read on every call so each query sees the current data.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        if !path.exists() && fs::symlink_metadata(path).is_err() {
            return Err(AnalysisError::DataFileNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass the snapshot location with --data, or set data_file in attack-paths.config.yml".to_string(),
            }
            .into());
        }

        validate_readable_file(path, self.max_file_size)?;

        fs::read_to_string(path).map_err(|e| {
            AnalysisError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn parse_snapshot(path: &Path, content: &str) -> Result<ArchitectureSnapshot> {
        let snapshot: ArchitectureSnapshot =
            serde_json::from_str(content).map_err(|e| AnalysisError::DataParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        for node in &snapshot.nodes {
            validate_node_name(node.name())?;
        }

        Ok(snapshot)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchitectureReader for FileSystemReader {
    fn read_snapshot(&self, data_path: &Path) -> Result<ArchitectureSnapshot> {
        let content = self.safe_read_file(data_path)?;
        let snapshot = Self::parse_snapshot(data_path, &content)?;
        tracing::debug!(
            path = %data_path.display(),
            services = snapshot.node_count(),
            edges = snapshot.edge_count(),
            "architecture snapshot loaded"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_snapshot_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(
            &temp_dir,
            "data.json",
            r#"{"nodes": [{"name": "a", "publicExposed": true}, {"name": "b"}],
                "edges": [{"from": "a", "to": "b"}]}"#,
        );

        let snapshot = FileSystemReader::new().read_snapshot(&path).unwrap();
        assert_eq!(snapshot.node_count(), 2);
        assert_eq!(snapshot.edges.len(), 1);
    }

    #[test]
    fn test_read_snapshot_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileSystemReader::new()
            .read_snapshot(&temp_dir.path().join("missing.json"))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::DataFileNotFound { .. })
        ));
    }

    #[test]
    fn test_read_snapshot_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "data.json", "{\"nodes\": [");

        let err = FileSystemReader::new().read_snapshot(&path).unwrap_err();
        match err.downcast_ref::<AnalysisError>() {
            Some(AnalysisError::DataParseError { details, .. }) => {
                assert!(details.contains("line"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_read_snapshot_rejects_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "data.json", r#"{"nodes": [{"name": ""}]}"#);

        let err = FileSystemReader::new().read_snapshot(&path).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_read_snapshot_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileSystemReader::new()
            .read_snapshot(temp_dir.path())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::InvalidDataPath { .. })
        ));
    }

    #[test]
    fn test_read_snapshot_rejects_oversized_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "data.json", r#"{"nodes": []}"#);

        let err = FileSystemReader::with_max_file_size(4)
            .read_snapshot(&path)
            .unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_snapshot_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = write(&temp_dir, "real.json", r#"{"nodes": []}"#);
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemReader::new().read_snapshot(&link).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::SecurityError { .. })
        ));
    }
}
