use crate::application::dto::{PathQueryRequest, PathQueryResponse};
use crate::shared::Result;

/// PathQueryPort - Inbound port for the attack-path query
///
/// Both driving adapters (the one-shot CLI and the HTTP service) enter the
/// application through this port.
pub trait PathQueryPort {
    /// Loads the architecture snapshot and returns the filtered, annotated paths
    ///
    /// # Errors
    /// Returns an error if:
    /// - The data file cannot be read or parsed
    /// - An edge starts at an undeclared service, or a name is declared twice
    /// - An active predicate needs an endpoint that is not declared
    fn query_paths(&self, request: PathQueryRequest) -> Result<PathQueryResponse>;
}
