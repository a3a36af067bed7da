//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that the formatters render.

pub mod path_report;
pub mod path_report_builder;

pub use path_report::{PathReport, PathSummaryView, ReportMetadataView};
pub use path_report_builder::PathReportBuilder;
