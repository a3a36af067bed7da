/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod path_query_request;
mod path_query_response;

pub use output_format::OutputFormat;
pub use path_query_request::PathQueryRequest;
pub use path_query_response::PathQueryResponse;
