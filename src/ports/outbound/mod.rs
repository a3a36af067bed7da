/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, logs).
pub mod architecture_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use architecture_reader::ArchitectureReader;
pub use formatter::PathFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
