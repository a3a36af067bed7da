/// Use cases module containing application business logic orchestration
mod analyze_paths;

pub use analyze_paths::AnalyzePathsUseCase;
