use super::{GraphBuilder, PathEnumerator, PathFilter, ResultProjector};
use crate::path_analysis::domain::{AnnotatedPath, Edge, FilterOptions, ServiceNode};
use crate::path_analysis::policies::SinkPolicy;
use crate::shared::Result;

/// Outcome of one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct PathAnalysis {
    pub paths: Vec<AnnotatedPath>,
    /// Simple paths found before filtering
    pub enumerated_count: usize,
}

/// PathAnalyzer service running the whole query pipeline
///
/// Graph construction, enumeration, filtering and projection happen fresh on
/// every call; nothing is retained between queries.
pub struct PathAnalyzer;

impl PathAnalyzer {
    /// Runs the pipeline and returns the annotated paths
    pub fn compute_filtered_paths(
        nodes: &[ServiceNode],
        edges: &[Edge],
        options: FilterOptions,
        sink_policy: &SinkPolicy,
    ) -> Result<Vec<AnnotatedPath>> {
        Self::analyze(nodes, edges, options, sink_policy, |_, _, _| {}).map(|a| a.paths)
    }

    /// Runs the pipeline, calling `on_start(service, index, total)` before
    /// enumerating the paths rooted at each declared service
    pub fn analyze<F>(
        nodes: &[ServiceNode],
        edges: &[Edge],
        options: FilterOptions,
        sink_policy: &SinkPolicy,
        mut on_start: F,
    ) -> Result<PathAnalysis>
    where
        F: FnMut(&str, usize, usize),
    {
        let graph = GraphBuilder::build(nodes, edges)?;

        let total = graph.service_count();
        let mut enumerated = Vec::new();
        for (index, start) in graph.services().iter().enumerate() {
            on_start(start.as_str(), index, total);
            enumerated.extend(PathEnumerator::enumerate_from(&graph, start));
        }
        let enumerated_count = enumerated.len();

        let filtered = PathFilter::new(options, sink_policy).filter(enumerated, nodes)?;
        let paths = ResultProjector::project(&filtered, nodes);

        tracing::debug!(
            enumerated = enumerated_count,
            matched = paths.len(),
            "path analysis finished"
        );

        Ok(PathAnalysis {
            paths,
            enumerated_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::AnalysisError;

    fn sample() -> (Vec<ServiceNode>, Vec<Edge>) {
        (
            vec![
                ServiceNode::new("A").exposed(),
                ServiceNode::new("B").with_kind("rds"),
                ServiceNode::new("C").with_vulnerability("CVE-1"),
            ],
            vec![Edge::fan_out("A", ["B", "C"])],
        )
    }

    fn names(paths: &[AnnotatedPath]) -> Vec<Vec<&str>> {
        paths.iter().map(|p| p.names()).collect()
    }

    #[test]
    fn test_compute_no_filters() {
        let (nodes, edges) = sample();
        let paths = PathAnalyzer::compute_filtered_paths(
            &nodes,
            &edges,
            FilterOptions::default(),
            &SinkPolicy::default(),
        )
        .unwrap();

        assert_eq!(names(&paths), vec![vec!["A", "B"], vec!["A", "C"]]);
    }

    #[test]
    fn test_compute_sink_only() {
        let (nodes, edges) = sample();
        let paths = PathAnalyzer::compute_filtered_paths(
            &nodes,
            &edges,
            FilterOptions::default().sink_only(),
            &SinkPolicy::default(),
        )
        .unwrap();

        assert_eq!(names(&paths), vec![vec!["A", "B"]]);
    }

    #[test]
    fn test_compute_vulnerable_only_projects_message() {
        let (nodes, edges) = sample();
        let paths = PathAnalyzer::compute_filtered_paths(
            &nodes,
            &edges,
            FilterOptions::default().vulnerable_only(),
            &SinkPolicy::default(),
        )
        .unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes()[1].vulnerable.as_deref(), Some("CVE-1"));
        assert_eq!(paths[0].nodes()[0].vulnerable, None);
    }

    #[test]
    fn test_compute_undeclared_source_fails_before_enumeration() {
        let (nodes, mut edges) = sample();
        edges.push(Edge::new("ghost", "A"));
        let mut started = 0;

        let err = PathAnalyzer::analyze(
            &nodes,
            &edges,
            FilterOptions::default(),
            &SinkPolicy::default(),
            |_, _, _| started += 1,
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::DataIntegrity { .. })
        ));
        assert_eq!(started, 0);
    }

    #[test]
    fn test_analyze_reports_each_start() {
        let (nodes, edges) = sample();
        let mut seen = Vec::new();

        let analysis = PathAnalyzer::analyze(
            &nodes,
            &edges,
            FilterOptions::default().exposed_only(),
            &SinkPolicy::default(),
            |name, index, total| seen.push(format!("{}:{}/{}", name, index, total)),
        )
        .unwrap();

        assert_eq!(seen, vec!["A:0/3", "B:1/3", "C:2/3"]);
        assert_eq!(analysis.enumerated_count, 2);
        assert_eq!(analysis.paths.len(), 2);
    }
}
