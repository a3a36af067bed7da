use crate::path_analysis::domain::{Edge, ServiceGraph, ServiceNode};
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// GraphBuilder service turning the declared node and edge lists into adjacency lists
///
/// Pure domain logic with no I/O. Integrity problems are reported here so
/// that enumeration never runs over an inconsistent graph.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the adjacency mapping for one query
    ///
    /// # Errors
    /// `AnalysisError::DataIntegrity` when a node name is declared twice or an
    /// edge starts at an undeclared node.
    pub fn build(nodes: &[ServiceNode], edges: &[Edge]) -> Result<ServiceGraph> {
        let mut order = Vec::with_capacity(nodes.len());
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::with_capacity(nodes.len());

        for node in nodes {
            match adjacency.entry(node.name().to_string()) {
                Entry::Occupied(_) => {
                    return Err(AnalysisError::DataIntegrity {
                        reason: format!("service '{}' is declared more than once", node.name()),
                    }
                    .into());
                }
                Entry::Vacant(slot) => {
                    slot.insert(Vec::new());
                }
            }
            order.push(node.name().to_string());
        }

        for edge in edges {
            let Some(destinations) = adjacency.get_mut(&edge.from) else {
                return Err(AnalysisError::DataIntegrity {
                    reason: format!("edge references undeclared source node '{}'", edge.from),
                }
                .into());
            };
            destinations.extend(edge.destinations().iter().cloned());
        }

        let graph = ServiceGraph::new(order, adjacency);
        tracing::debug!(
            services = graph.service_count(),
            edges = graph.edge_count(),
            "service graph built"
        );
        Ok(graph)
    }
}
