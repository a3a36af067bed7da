use crate::path_analysis::domain::{AnnotatedNode, AnnotatedPath, NodeLookup, ServiceNode, ServicePath};

/// ResultProjector service attaching vulnerability summaries to each path position
///
/// Best effort: a name that does not resolve projects without a summary.
pub struct ResultProjector;

impl ResultProjector {
    pub fn project(paths: &[ServicePath], nodes: &[ServiceNode]) -> Vec<AnnotatedPath> {
        let lookup = NodeLookup::new(nodes);
        paths
            .iter()
            .map(|path| Self::project_path(path, &lookup))
            .collect()
    }

    fn project_path(path: &ServicePath, lookup: &NodeLookup<'_>) -> AnnotatedPath {
        AnnotatedPath::new(
            path.services()
                .iter()
                .map(|name| {
                    let vulnerable = lookup.get(name).and_then(ServiceNode::vulnerability_summary);
                    AnnotatedNode::new(name.clone(), vulnerable)
                })
                .collect(),
        )
    }
}
