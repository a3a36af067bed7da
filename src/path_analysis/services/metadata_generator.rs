use crate::path_analysis::domain::AnalysisMetadata;

const TOOL_NAME: &str = "attack-paths";
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MetadataGenerator service stamping reports with time and a unique id
pub struct MetadataGenerator;

impl MetadataGenerator {
    pub fn generate() -> AnalysisMetadata {
        AnalysisMetadata::new(
            Self::timestamp(),
            TOOL_NAME.to_string(),
            TOOL_VERSION.to_string(),
            Self::report_id(),
        )
    }

    fn timestamp() -> String {
        chrono::Utc::now().to_rfc3339()
    }

    fn report_id() -> String {
        format!("urn:uuid:{}", uuid::Uuid::new_v4())
    }
}
