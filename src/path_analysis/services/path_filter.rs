use crate::path_analysis::domain::{FilterOptions, NodeLookup, ServiceNode, ServicePath};
use crate::path_analysis::policies::SinkPolicy;
use crate::shared::error::{AnalysisError, PathEndpoint};
use crate::shared::Result;

/// PathFilter service applying the security predicates to enumerated paths
///
/// Active predicates are combined with logical AND. A predicate that needs an
/// endpoint which does not resolve to a declared service fails the whole
/// query instead of guessing pass or fail.
pub struct PathFilter<'a> {
    options: FilterOptions,
    sink_policy: &'a SinkPolicy,
}

impl<'a> PathFilter<'a> {
    pub fn new(options: FilterOptions, sink_policy: &'a SinkPolicy) -> Self {
        Self {
            options,
            sink_policy,
        }
    }

    /// Keeps the paths satisfying every active predicate, preserving order
    pub fn filter(&self, paths: Vec<ServicePath>, nodes: &[ServiceNode]) -> Result<Vec<ServicePath>> {
        if self.options.is_unfiltered() {
            return Ok(paths);
        }

        let lookup = NodeLookup::new(nodes);
        let mut kept = Vec::with_capacity(paths.len());
        for path in paths {
            if self.matches(&path, &lookup)? {
                kept.push(path);
            }
        }

        tracing::debug!(kept = kept.len(), filters = %self.options, "paths filtered");
        Ok(kept)
    }

    /// Evaluates one path against the active predicates
    ///
    /// Every endpoint an active predicate needs is resolved before any
    /// predicate is applied, so an unresolved reference fails the query
    /// whatever the other predicates would decide.
    pub fn matches(&self, path: &ServicePath, lookup: &NodeLookup<'_>) -> Result<bool> {
        let source = if self.options.exposed_only {
            Some(Self::resolve(
                path.source(),
                lookup,
                PathEndpoint::Source,
                "exposedOnly",
            )?)
        } else {
            None
        };

        let destination = if self.options.sink_only {
            Some(Self::resolve(
                path.destination(),
                lookup,
                PathEndpoint::Destination,
                "sinkOnly",
            )?)
        } else {
            None
        };

        if source.is_some_and(|node| !node.public_exposed) {
            return Ok(false);
        }

        if destination.is_some_and(|node| !self.sink_policy.is_sink(node.kind())) {
            return Ok(false);
        }

        if self.options.vulnerable_only && !Self::has_vulnerable_service(path, lookup) {
            return Ok(false);
        }

        Ok(true)
    }

    // Unresolved names count as not vulnerable.
    fn has_vulnerable_service(path: &ServicePath, lookup: &NodeLookup<'_>) -> bool {
        path.services()
            .iter()
            .any(|name| lookup.get(name).is_some_and(ServiceNode::is_vulnerable))
    }

    fn resolve<'n>(
        name: Option<&str>,
        lookup: &NodeLookup<'n>,
        endpoint: PathEndpoint,
        predicate: &'static str,
    ) -> Result<&'n ServiceNode> {
        let name = name.unwrap_or_default();
        lookup.get(name).ok_or_else(|| {
            AnalysisError::UnresolvedReference {
                name: name.to_string(),
                endpoint,
                predicate,
            }
            .into()
        })
    }
}
