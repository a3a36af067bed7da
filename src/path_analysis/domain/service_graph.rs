use std::collections::HashMap;

/// ServiceGraph aggregate: adjacency lists keyed by service name
///
/// Keys are exactly the declared services. Destinations are kept in input
/// order, parallel edges included, and may name services that were never
/// declared.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceGraph {
    start_order: Vec<String>,
    adjacency: HashMap<String, Vec<String>>,
}

impl ServiceGraph {
    pub fn new(start_order: Vec<String>, adjacency: HashMap<String, Vec<String>>) -> Self {
        Self {
            start_order,
            adjacency,
        }
    }

    /// Declared services in node-list order
    pub fn services(&self) -> &[String] {
        &self.start_order
    }

    /// One-hop destinations of `name`; empty for undeclared services
    pub fn neighbors(&self, name: &str) -> &[String] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    pub fn service_count(&self) -> usize {
        self.start_order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum()
    }
}
