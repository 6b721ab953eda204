/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the collaborators a build host would normally
/// provide: the collector connection, the log sink, configuration binding
/// and the global settings store.
pub mod outbound;
