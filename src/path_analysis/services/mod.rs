mod graph_builder;
mod metadata_generator;
mod path_analyzer;
mod path_enumerator;
mod path_filter;
mod result_projector;

pub use graph_builder::GraphBuilder;
pub use metadata_generator::MetadataGenerator;
pub use path_analyzer::{PathAnalysis, PathAnalyzer};
pub use path_enumerator::PathEnumerator;
pub use path_filter::PathFilter;
pub use result_projector::ResultProjector;
