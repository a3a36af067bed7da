/// Console and log adapters implementing the ProgressReporter port
mod progress_reporter;
mod tracing_reporter;

pub use progress_reporter::StderrProgressReporter;
pub use tracing_reporter::TracingProgressReporter;
