/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the audit is driven directly by the
/// CLI through the use case.
pub mod outbound;
