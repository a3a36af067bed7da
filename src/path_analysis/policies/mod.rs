mod sink_policy;

pub use sink_policy::{SinkPolicy, DEFAULT_SINK_KINDS};
