use serde::{Deserialize, Serialize};

/// One position of a projected path
///
/// `vulnerable` carries the joined vulnerability messages of the service, and
/// is omitted from JSON when the service has none or cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vulnerable: Option<String>,
}

impl AnnotatedNode {
    pub fn new(name: impl Into<String>, vulnerable: Option<String>) -> Self {
        Self {
            name: name.into(),
            vulnerable,
        }
    }

    pub fn is_vulnerable(&self) -> bool {
        self.vulnerable.is_some()
    }
}

/// A filtered path ready for presentation, serialized as a plain JSON array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotatedPath(Vec<AnnotatedNode>);

impl AnnotatedPath {
    pub fn new(nodes: Vec<AnnotatedNode>) -> Self {
        Self(nodes)
    }

    pub fn nodes(&self) -> &[AnnotatedNode] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|n| n.name.as_str()).collect()
    }

    pub fn vulnerable_nodes(&self) -> impl Iterator<Item = &AnnotatedNode> {
        self.0.iter().filter(|n| n.is_vulnerable())
    }
}
