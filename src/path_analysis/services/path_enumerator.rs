use crate::path_analysis::domain::{ServiceGraph, ServicePath};
use std::collections::HashSet;

/// PathEnumerator service producing every simple path of two or more services
///
/// Exhaustive depth-first search with backtracking. There is no depth or
/// path-count limit; callers embedding the engine bound the graph size or
/// impose a deadline.
pub struct PathEnumerator;

impl PathEnumerator {
    /// Enumerates paths from every declared service, in declaration order
    pub fn enumerate(graph: &ServiceGraph) -> Vec<ServicePath> {
        let mut paths = Vec::new();
        for start in graph.services() {
            paths.extend(Self::enumerate_from(graph, start));
        }
        tracing::debug!(paths = paths.len(), "path enumeration finished");
        paths
    }

    /// Enumerates the paths rooted at a single service
    ///
    /// The visited set lives only for this run, so a service excluded on one
    /// branch can still appear on a sibling branch.
    pub fn enumerate_from(graph: &ServiceGraph, start: &str) -> Vec<ServicePath> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        let mut visited = HashSet::new();
        Self::visit(graph, start, &mut current, &mut visited, &mut paths);
        paths
    }

    fn visit<'g>(
        graph: &'g ServiceGraph,
        service: &'g str,
        current: &mut Vec<&'g str>,
        visited: &mut HashSet<&'g str>,
        paths: &mut Vec<ServicePath>,
    ) {
        // cycle guard
        if !visited.insert(service) {
            return;
        }
        current.push(service);

        if current.len() > 1 {
            paths.push(ServicePath::new(
                current.iter().map(|s| s.to_string()).collect(),
            ));
        }

        for neighbor in graph.neighbors(service) {
            Self::visit(graph, neighbor, current, visited, paths);
        }

        current.pop();
        visited.remove(service);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_analysis::domain::{Edge, ServiceNode};
    use crate::path_analysis::services::GraphBuilder;

    fn names(paths: &[ServicePath]) -> Vec<Vec<&str>> {
        paths
            .iter()
            .map(|p| p.services().iter().map(String::as_str).collect())
            .collect()
    }

    fn graph(nodes: &[&str], edges: Vec<Edge>) -> ServiceGraph {
        let nodes: Vec<ServiceNode> = nodes.iter().map(|n| ServiceNode::new(*n)).collect();
        GraphBuilder::build(&nodes, &edges).unwrap()
    }

    #[test]
    fn test_enumerate_chain() {
        let g = graph(&["a", "b", "c"], vec![Edge::new("a", "b"), Edge::new("b", "c")]);
        let paths = PathEnumerator::enumerate(&g);

        assert_eq!(
            names(&paths),
            vec![vec!["a", "b"], vec!["a", "b", "c"], vec!["b", "c"]]
        );
    }

    #[test]
    fn test_enumerate_no_edges_is_empty() {
        let g = graph(&["a", "b"], vec![]);
        assert!(PathEnumerator::enumerate(&g).is_empty());
    }

    #[test]
    fn test_enumerate_three_cycle() {
        let g = graph(
            &["a", "b", "c"],
            vec![Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("c", "a")],
        );
        let from_a = PathEnumerator::enumerate_from(&g, "a");
        assert_eq!(names(&from_a), vec![vec!["a", "b"], vec!["a", "b", "c"]]);

        let all = PathEnumerator::enumerate(&g);
        assert_eq!(all.len(), 6);
        assert!(all.iter().all(|p| p.is_simple()));
    }

    #[test]
    fn test_enumerate_self_loop_yields_nothing() {
        let g = graph(&["a"], vec![Edge::new("a", "a")]);
        assert!(PathEnumerator::enumerate(&g).is_empty());
    }

    #[test]
    fn test_enumerate_diamond_backtracks() {
        // a -> b -> d, a -> c -> d: d must be reachable on both branches
        let g = graph(
            &["a", "b", "c", "d"],
            vec![
                Edge::fan_out("a", ["b", "c"]),
                Edge::new("b", "d"),
                Edge::new("c", "d"),
            ],
        );
        let from_a = PathEnumerator::enumerate_from(&g, "a");
        assert_eq!(
            names(&from_a),
            vec![
                vec!["a", "b"],
                vec!["a", "b", "d"],
                vec!["a", "c"],
                vec!["a", "c", "d"],
            ]
        );
    }

    #[test]
    fn test_enumerate_parallel_edges_repeat_paths() {
        let g = graph(&["a", "b"], vec![Edge::fan_out("a", ["b", "b"])]);
        assert_eq!(names(&PathEnumerator::enumerate(&g)), vec![vec!["a", "b"], vec!["a", "b"]]);
    }

    #[test]
    fn test_enumerate_undeclared_neighbor_is_a_leaf() {
        let g = graph(&["a"], vec![Edge::new("a", "ghost")]);
        assert_eq!(names(&PathEnumerator::enumerate(&g)), vec![vec!["a", "ghost"]]);
    }
}
