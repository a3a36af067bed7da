use crate::application::read_models::PathReport;
use crate::ports::outbound::PathFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting the same array-of-arrays body as `GET /all-paths`
///
/// Report metadata is left out so the output matches the HTTP response.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFormatter for JsonFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        serde_json::to_string_pretty(&report.paths)
            .map_err(|e| anyhow::anyhow!("Failed to serialize paths: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{PathSummaryView, ReportMetadataView};
    use crate::path_analysis::domain::{AnnotatedNode, AnnotatedPath};

    fn report(paths: Vec<AnnotatedPath>) -> PathReport {
        PathReport {
            metadata: ReportMetadataView {
                timestamp: "2026-01-01T00:00:00Z".to_string(),
                tool_name: "attack-paths".to_string(),
                tool_version: "0.1.0".to_string(),
                report_id: "urn:uuid:1".to_string(),
            },
            data_source: "data.json".to_string(),
            filters: vec![],
            sink_kinds: vec![],
            summary: PathSummaryView::default(),
            paths,
        }
    }

    #[test]
    fn test_format_matches_http_body() {
        let output = JsonFormatter::new()
            .format(&report(vec![AnnotatedPath::new(vec![
                AnnotatedNode::new("A", None),
                AnnotatedNode::new("C", Some("CVE-1".to_string())),
            ])]))
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!([[{"name": "A"}, {"name": "C", "vulnerable": "CVE-1"}]])
        );
        assert!(!output.contains("urn:uuid"));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(JsonFormatter::new().format(&report(vec![])).unwrap(), "[]");
    }
}
