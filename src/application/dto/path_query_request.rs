use crate::path_analysis::domain::FilterOptions;
use crate::path_analysis::policies::SinkPolicy;
use std::path::PathBuf;

/// PathQueryRequest - Internal request DTO for the path query use case
#[derive(Debug, Clone)]
pub struct PathQueryRequest {
    /// Location of the `{nodes, edges}` snapshot
    pub data_path: PathBuf,
    pub options: FilterOptions,
    pub sink_policy: SinkPolicy,
}

impl PathQueryRequest {
    pub fn new(data_path: PathBuf, options: FilterOptions, sink_policy: SinkPolicy) -> Self {
        Self {
            data_path,
            options,
            sink_policy,
        }
    }
}
