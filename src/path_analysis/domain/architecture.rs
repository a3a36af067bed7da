use super::{Edge, ServiceNode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// ArchitectureSnapshot aggregate: the `{nodes, edges}` document a query runs against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureSnapshot {
    pub nodes: Vec<ServiceNode>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl ArchitectureSnapshot {
    pub fn new(nodes: Vec<ServiceNode>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of one-hop destinations once list targets are expanded
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|e| e.destinations().len()).sum()
    }
}

/// Name-keyed view over the declared services
///
/// When a name is declared twice the first declaration wins, matching a
/// front-to-back scan of the node list.
#[derive(Debug)]
pub struct NodeLookup<'a> {
    by_name: HashMap<&'a str, &'a ServiceNode>,
}

impl<'a> NodeLookup<'a> {
    pub fn new(nodes: &'a [ServiceNode]) -> Self {
        let mut by_name = HashMap::with_capacity(nodes.len());
        for node in nodes {
            by_name.entry(node.name()).or_insert(node);
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a ServiceNode> {
        self.by_name.get(name).copied()
    }
}
