//! Builder for constructing PathReport from a query response

use super::path_report::{PathReport, PathSummaryView, ReportMetadataView};
use crate::application::dto::PathQueryResponse;
use crate::path_analysis::domain::{AnalysisMetadata, AnnotatedPath};
use std::collections::HashSet;

pub struct PathReportBuilder;

impl PathReportBuilder {
    pub fn build(response: &PathQueryResponse) -> PathReport {
        PathReport {
            metadata: Self::build_metadata(&response.metadata),
            data_source: response.data_path.display().to_string(),
            filters: response
                .options
                .active_predicates()
                .into_iter()
                .map(str::to_string)
                .collect(),
            sink_kinds: response.sink_kinds.clone(),
            summary: Self::build_summary(response),
            paths: response.paths.clone(),
        }
    }

    fn build_metadata(metadata: &AnalysisMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    fn build_summary(response: &PathQueryResponse) -> PathSummaryView {
        PathSummaryView {
            service_count: response.service_count,
            enumerated_count: response.enumerated_count,
            path_count: response.paths.len(),
            distinct_services: Self::distinct(&response.paths, false),
            vulnerable_services: Self::distinct(&response.paths, true),
        }
    }

    fn distinct(paths: &[AnnotatedPath], vulnerable_only: bool) -> usize {
        paths
            .iter()
            .flat_map(|p| p.nodes())
            .filter(|n| !vulnerable_only || n.is_vulnerable())
            .map(|n| n.name.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
