pub mod analysis_metadata;
pub mod annotated_path;
pub mod architecture;
pub mod edge;
pub mod filter_options;
pub mod service_graph;
pub mod service_node;
pub mod service_path;

pub use analysis_metadata::AnalysisMetadata;
pub use annotated_path::{AnnotatedNode, AnnotatedPath};
pub use architecture::{ArchitectureSnapshot, NodeLookup};
pub use edge::{Edge, EdgeTarget};
pub use filter_options::FilterOptions;
pub use service_graph::ServiceGraph;
pub use service_node::{validate_node_name, ServiceNode, Vulnerability};
pub use service_path::ServicePath;
