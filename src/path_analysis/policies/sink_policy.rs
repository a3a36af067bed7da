use crate::shared::error::AnalysisError;
use crate::shared::Result;

/// Service kinds treated as data sinks when no override is configured
pub const DEFAULT_SINK_KINDS: [&str; 2] = ["rds", "sqs"];

/// SinkPolicy decides whether a service kind marks a terminal data repository
///
/// Matching is exact and case-sensitive: `RDS` is not a sink unless listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkPolicy {
    kinds: Vec<String>,
}

impl SinkPolicy {
    /// Creates a policy from configured kinds
    ///
    /// # Errors
    /// - Empty kind list
    /// - Empty or whitespace-only kind
    pub fn new<I, S>(kinds: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut validated: Vec<String> = Vec::new();
        for kind in kinds {
            let kind = kind.into();
            if kind.trim().is_empty() {
                return Err(AnalysisError::Validation {
                    message: "Sink kind cannot be empty".to_string(),
                }
                .into());
            }
            if !validated.contains(&kind) {
                validated.push(kind);
            }
        }

        if validated.is_empty() {
            return Err(AnalysisError::Validation {
                message: "At least one sink kind is required".to_string(),
            }
            .into());
        }

        Ok(Self { kinds: validated })
    }

    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }

    /// A service without a kind is never a sink
    pub fn is_sink(&self, kind: Option<&str>) -> bool {
        kind.is_some_and(|k| self.kinds.iter().any(|s| s == k))
    }
}

impl Default for SinkPolicy {
    fn default() -> Self {
        Self {
            kinds: DEFAULT_SINK_KINDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}
