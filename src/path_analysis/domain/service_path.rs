use std::collections::HashSet;
use std::fmt;

/// An ordered walk through the graph that visits each service at most once
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServicePath(Vec<String>);

impl ServicePath {
    pub fn new(services: Vec<String>) -> Self {
        Self(services)
    }

    pub fn services(&self) -> &[String] {
        &self.0
    }

    pub fn source(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when no service appears twice
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().all(|s| seen.insert(s.as_str()))
    }

    pub fn into_services(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for ServicePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" → "))
    }
}
