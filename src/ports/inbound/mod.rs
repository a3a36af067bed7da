/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (CLI, HTTP)
/// use to interact with the application core.
pub mod path_query_port;

pub use path_query_port::PathQueryPort;
