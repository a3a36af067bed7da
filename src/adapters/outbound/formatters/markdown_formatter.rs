use crate::application::read_models::{PathReport, PathSummaryView};
use crate::path_analysis::domain::AnnotatedPath;
use crate::ports::outbound::PathFormatter;
use crate::shared::Result;

const VULN_TABLE_HEADER: &str = "| Service | Vulnerabilities |\n";
const VULN_TABLE_SEPARATOR: &str = "|---------|-----------------|\n";

/// MarkdownFormatter adapter producing a human-readable attack-path report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &PathReport) {
        output.push_str("# Attack Path Report\n\n");
        output.push_str(&format!(
            "- **Generated**: {}\n- **Tool**: {} {}\n- **Report ID**: {}\n- **Data source**: `{}`\n\n",
            report.metadata.timestamp,
            report.metadata.tool_name,
            report.metadata.tool_version,
            report.metadata.report_id,
            report.data_source
        ));
    }

    fn render_filters(&self, output: &mut String, report: &PathReport) {
        output.push_str("## Filters\n\n");
        if report.filters.is_empty() {
            output.push_str("*No filters applied: every simple path is listed.*\n\n");
        } else {
            for filter in &report.filters {
                output.push_str(&format!("- `{}`\n", filter));
            }
            output.push('\n');
        }
        if report.filters.iter().any(|f| f == "sinkOnly") {
            output.push_str(&format!("Sink kinds: {}\n\n", report.sink_kinds.join(", ")));
        }
    }

    fn render_summary(&self, output: &mut String, summary: &PathSummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Count |\n|--------|-------|\n");
        output.push_str(&format!("| Declared services | {} |\n", summary.service_count));
        output.push_str(&format!("| Simple paths enumerated | {} |\n", summary.enumerated_count));
        output.push_str(&format!("| Matching paths | {} |\n", summary.path_count));
        output.push_str(&format!("| Services on matching paths | {} |\n", summary.distinct_services));
        output.push_str(&format!("| Vulnerable services on matching paths | {} |\n\n", summary.vulnerable_services));
    }

    fn render_paths(&self, output: &mut String, paths: &[AnnotatedPath]) {
        output.push_str("## Paths\n\n");
        if paths.is_empty() {
            output.push_str("*No paths match the active filters.*\n");
            return;
        }

        for (index, path) in paths.iter().enumerate() {
            output.push_str(&format!(
                "### {}. {}\n\n",
                index + 1,
                path.names().join(" → ")
            ));

            let vulnerable: Vec<_> = path.vulnerable_nodes().collect();
            if vulnerable.is_empty() {
                output.push_str("No known vulnerabilities on this path.\n\n");
                continue;
            }

            output.push_str(VULN_TABLE_HEADER);
            output.push_str(VULN_TABLE_SEPARATOR);
            for node in vulnerable {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::escape_markdown_table_cell(&node.name),
                    Self::escape_markdown_table_cell(node.vulnerable.as_deref().unwrap_or(""))
                ));
            }
            output.push('\n');
        }
    }
}

impl PathFormatter for MarkdownFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);
        self.render_filters(&mut output, report);
        self.render_summary(&mut output, &report.summary);
        self.render_paths(&mut output, &report.paths);
        Ok(output)
    }
}
