use crate::shared::error::AnalysisError;
use crate::shared::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum length for service names (security limit)
const MAX_NODE_NAME_LENGTH: usize = 255;

/// A known vulnerability attached to a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub message: String,
}

impl Vulnerability {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// ServiceNode value object representing one component of the architecture
///
/// Only `name` is required in the input document. Extra fields such as
/// `language` or `path` are accepted and ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_exposed: bool,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub vulnerabilities: Vec<Vulnerability>,
}

impl ServiceNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            public_exposed: false,
            vulnerabilities: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn exposed(mut self) -> Self {
        self.public_exposed = true;
        self
    }

    pub fn with_vulnerability(mut self, message: impl Into<String>) -> Self {
        self.vulnerabilities.push(Vulnerability::new(message));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn is_vulnerable(&self) -> bool {
        !self.vulnerabilities.is_empty()
    }

    /// Joins every vulnerability message with ", ", or None when the
    /// service has no known vulnerability.
    pub fn vulnerability_summary(&self) -> Option<String> {
        if self.vulnerabilities.is_empty() {
            return None;
        }
        Some(
            self.vulnerabilities
                .iter()
                .map(|v| v.message.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/// Validates a service name loaded from an external document
pub fn validate_node_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AnalysisError::Validation {
            message: "Service name cannot be empty".to_string(),
        }
        .into());
    }

    if name.len() > MAX_NODE_NAME_LENGTH {
        return Err(AnalysisError::Validation {
            message: format!(
                "Service name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_NODE_NAME_LENGTH
            ),
        }
        .into());
    }

    Ok(())
}

// `"vulnerabilities": null` shows up in hand-edited snapshots.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
