//! Path report read model
//!
//! A presentation-ready view of one query: run metadata, the filters that
//! were applied, summary counts and the matching paths.

use crate::path_analysis::domain::AnnotatedPath;

/// Main read model handed to the formatters
#[derive(Debug, Clone)]
pub struct PathReport {
    pub metadata: ReportMetadataView,
    pub data_source: String,
    /// Active predicate names, empty when unfiltered
    pub filters: Vec<String>,
    pub sink_kinds: Vec<String>,
    pub summary: PathSummaryView,
    pub paths: Vec<AnnotatedPath>,
}

/// View representation of run metadata
#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

/// Summary counts shown at the top of a report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSummaryView {
    pub service_count: usize,
    pub enumerated_count: usize,
    pub path_count: usize,
    /// Distinct services appearing on at least one matching path
    pub distinct_services: usize,
    /// Distinct vulnerable services appearing on at least one matching path
    pub vulnerable_services: usize,
}
