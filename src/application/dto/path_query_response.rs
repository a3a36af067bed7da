use crate::path_analysis::domain::{AnalysisMetadata, AnnotatedPath, FilterOptions};
use std::path::PathBuf;

/// PathQueryResponse - Internal response DTO from the path query use case
///
/// `paths` is what the HTTP service returns verbatim; the remaining fields
/// feed the CLI report.
#[derive(Debug, Clone)]
pub struct PathQueryResponse {
    pub paths: Vec<AnnotatedPath>,
    /// Simple paths found before filtering
    pub enumerated_count: usize,
    /// Number of declared services in the snapshot
    pub service_count: usize,
    pub options: FilterOptions,
    /// Service kinds that counted as sinks for this query
    pub sink_kinds: Vec<String>,
    pub data_path: PathBuf,
    pub metadata: AnalysisMetadata,
}

impl PathQueryResponse {
    pub fn has_paths(&self) -> bool {
        !self.paths.is_empty()
    }
}
