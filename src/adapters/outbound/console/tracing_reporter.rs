use crate::ports::outbound::ProgressReporter;

/// TracingProgressReporter adapter for the HTTP service
///
/// Progress becomes structured log events instead of terminal output.
/// Per-service progress is logged at TRACE since a large graph produces one
/// event per declared service on every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgressReporter;

impl TracingProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for TracingProgressReporter {
    fn report(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        tracing::trace!(current, total, service = message.unwrap_or(""), "enumerating");
    }

    fn report_error(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
