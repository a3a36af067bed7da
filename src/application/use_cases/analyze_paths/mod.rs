use crate::application::dto::{PathQueryRequest, PathQueryResponse};
use crate::path_analysis::domain::ArchitectureSnapshot;
use crate::path_analysis::services::{MetadataGenerator, PathAnalyzer};
use crate::ports::inbound::PathQueryPort;
use crate::ports::outbound::{ArchitectureReader, ProgressReporter};
use crate::shared::Result;

/// AnalyzePathsUseCase - Core use case for attack-path queries
///
/// Loads a fresh snapshot through the reader on every call, then runs the
/// analysis pipeline. Nothing is cached between executions.
///
/// # Type Parameters
/// * `R` - ArchitectureReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzePathsUseCase<R, PR> {
    architecture_reader: R,
    progress_reporter: PR,
}

impl<R, PR> AnalyzePathsUseCase<R, PR>
where
    R: ArchitectureReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzePathsUseCase with injected dependencies
    pub fn new(architecture_reader: R, progress_reporter: PR) -> Self {
        Self {
            architecture_reader,
            progress_reporter,
        }
    }

    /// Executes the path query
    pub fn execute(&self, request: PathQueryRequest) -> Result<PathQueryResponse> {
        // Step 1: Load the snapshot
        let snapshot = self.load_snapshot(&request)?;

        // Step 2: Build, enumerate, filter, project
        let analysis = PathAnalyzer::analyze(
            &snapshot.nodes,
            &snapshot.edges,
            request.options,
            &request.sink_policy,
            // `index` start services are finished when `service` begins
            |service, index, total| {
                self.progress_reporter
                    .report_progress(index, total, Some(service));
            },
        )?;

        self.progress_reporter.report_completion(&format!(
            "Found {} matching path(s) out of {} enumerated (filters: {})",
            analysis.paths.len(),
            analysis.enumerated_count,
            request.options
        ));

        // Step 3: Build response
        Ok(PathQueryResponse {
            paths: analysis.paths,
            enumerated_count: analysis.enumerated_count,
            service_count: snapshot.node_count(),
            options: request.options,
            sink_kinds: request.sink_policy.kinds().to_vec(),
            data_path: request.data_path,
            metadata: MetadataGenerator::generate(),
        })
    }

    fn load_snapshot(&self, request: &PathQueryRequest) -> Result<ArchitectureSnapshot> {
        self.progress_reporter.report(&format!(
            "📖 Loading architecture snapshot from: {}",
            request.data_path.display()
        ));

        let snapshot = self.architecture_reader.read_snapshot(&request.data_path)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} service(s) and {} edge(s)",
            snapshot.node_count(),
            snapshot.edge_count()
        ));

        Ok(snapshot)
    }
}

impl<R, PR> PathQueryPort for AnalyzePathsUseCase<R, PR>
where
    R: ArchitectureReader,
    PR: ProgressReporter,
{
    fn query_paths(&self, request: PathQueryRequest) -> Result<PathQueryResponse> {
        self.execute(request)
    }
}
