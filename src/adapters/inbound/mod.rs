/// Inbound adapters - Driving side of the application
///
/// The one-shot CLI lives in `main.rs`; the long-running HTTP service is here.
pub mod http;
