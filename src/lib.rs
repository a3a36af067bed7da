//! attack-paths - attack-surface reachability analysis for service architectures
//!
//! Given a snapshot of services and their directed dependencies, this library
//! enumerates every simple path through the graph and filters the paths by
//! security predicates: the path starts at a publicly exposed service, ends at
//! a data sink, or passes through a service with a known vulnerability.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`path_analysis`): Graph building, path enumeration,
//!   filtering and projection
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, console, formatters and the HTTP service
//! - **Shared** (`shared`): Error types, result alias and file safety checks
//!
//! # Example
//!
//! ```
//! use attack_paths::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let nodes = vec![
//!     ServiceNode::new("gateway").exposed(),
//!     ServiceNode::new("orders-db").with_kind("rds"),
//!     ServiceNode::new("worker").with_vulnerability("CVE-2024-0001"),
//! ];
//! let edges = vec![Edge::fan_out("gateway", ["orders-db", "worker"])];
//!
//! let paths = compute_filtered_paths(
//!     &nodes,
//!     &edges,
//!     FilterOptions::default().sink_only(),
//!     &SinkPolicy::default(),
//! )?;
//!
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0].names(), vec!["gateway", "orders-db"]);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod path_analysis;
pub mod ports;
pub mod shared;

use path_analysis::domain::{AnnotatedPath, Edge, FilterOptions, ServiceNode};
use path_analysis::policies::SinkPolicy;
use path_analysis::services::PathAnalyzer;

/// Computes the filtered, annotated paths for one snapshot
///
/// Builds the graph, enumerates every simple path of two or more services,
/// keeps the paths satisfying all active predicates and attaches vulnerability
/// summaries. The output order is deterministic: start service in declaration
/// order, then depth-first in edge order.
///
/// # Errors
/// - `AnalysisError::DataIntegrity` when an edge starts at an undeclared
///   service or a service name is declared twice
/// - `AnalysisError::UnresolvedReference` when `exposed_only` or `sink_only`
///   needs an endpoint that is not declared
pub fn compute_filtered_paths(
    nodes: &[ServiceNode],
    edges: &[Edge],
    options: FilterOptions,
    sink_policy: &SinkPolicy,
) -> shared::Result<Vec<AnnotatedPath>> {
    PathAnalyzer::compute_filtered_paths(nodes, edges, options, sink_policy)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, TracingProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{OutputFormat, PathQueryRequest, PathQueryResponse};
    pub use crate::application::read_models::{PathReport, PathReportBuilder};
    pub use crate::application::use_cases::AnalyzePathsUseCase;
    pub use crate::compute_filtered_paths;
    pub use crate::path_analysis::domain::{
        AnnotatedNode, AnnotatedPath, ArchitectureSnapshot, Edge, FilterOptions, ServiceNode,
        Vulnerability,
    };
    pub use crate::path_analysis::policies::SinkPolicy;
    pub use crate::path_analysis::services::{
        GraphBuilder, PathAnalyzer, PathEnumerator, PathFilter, ResultProjector,
    };
    pub use crate::ports::inbound::PathQueryPort;
    pub use crate::ports::outbound::{
        ArchitectureReader, OutputPresenter, PathFormatter, ProgressReporter,
    };
    pub use crate::shared::error::AnalysisError;
    pub use crate::shared::Result;
}
