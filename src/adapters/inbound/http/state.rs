//! Service state shared by the HTTP handlers.

use crate::path_analysis::policies::SinkPolicy;
use std::path::PathBuf;
use std::time::Duration;

/// Default deadline for a single `/all-paths` query
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only settings for every request
///
/// Only the data file location is held; its contents are loaded again on
/// each request so results always reflect the current snapshot.
#[derive(Debug, Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub sink_policy: SinkPolicy,
    pub query_timeout: Duration,
}

impl AppState {
    pub fn new(data_path: PathBuf, sink_policy: SinkPolicy) -> Self {
        Self {
            data_path,
            sink_policy,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }
}
