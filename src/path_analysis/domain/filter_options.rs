use serde::{Deserialize, Serialize};
use std::fmt;

/// FilterOptions value object holding the three independent path predicates
///
/// A predicate that is `false` does not constrain the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default)]
    pub exposed_only: bool,
    #[serde(default)]
    pub sink_only: bool,
    #[serde(default)]
    pub vulnerable_only: bool,
}

impl FilterOptions {
    pub fn new(exposed_only: bool, sink_only: bool, vulnerable_only: bool) -> Self {
        Self {
            exposed_only,
            sink_only,
            vulnerable_only,
        }
    }

    pub fn exposed_only(mut self) -> Self {
        self.exposed_only = true;
        self
    }

    pub fn sink_only(mut self) -> Self {
        self.sink_only = true;
        self
    }

    pub fn vulnerable_only(mut self) -> Self {
        self.vulnerable_only = true;
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        !(self.exposed_only || self.sink_only || self.vulnerable_only)
    }

    /// Names of the active predicates in a stable order
    pub fn active_predicates(&self) -> Vec<&'static str> {
        let mut active = Vec::new();
        if self.exposed_only {
            active.push("exposedOnly");
        }
        if self.sink_only {
            active.push("sinkOnly");
        }
        if self.vulnerable_only {
            active.push("vulnerableOnly");
        }
        active
    }
}

impl fmt::Display for FilterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unfiltered() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.active_predicates().join(", "))
        }
    }
}
