use serde::{Deserialize, Serialize};

/// Destination side of an edge: one service, or several parallel edges
/// from the same source written as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeTarget {
    Single(String),
    Many(Vec<String>),
}

impl EdgeTarget {
    /// Destinations in input order
    pub fn destinations(&self) -> &[String] {
        match self {
            EdgeTarget::Single(name) => std::slice::from_ref(name),
            EdgeTarget::Many(names) => names,
        }
    }
}

/// Edge value object representing a directed dependency between services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: EdgeTarget,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: EdgeTarget::Single(to.into()),
        }
    }

    pub fn fan_out<I, S>(from: impl Into<String>, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            from: from.into(),
            to: EdgeTarget::Many(to.into_iter().map(Into::into).collect()),
        }
    }

    pub fn destinations(&self) -> &[String] {
        self.to.destinations()
    }
}
