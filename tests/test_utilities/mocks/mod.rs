/// Mock implementations for testing
mod mock_architecture_reader;
mod mock_progress_reporter;

pub use mock_architecture_reader::MockArchitectureReader;
pub use mock_progress_reporter::MockProgressReporter;
