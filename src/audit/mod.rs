/// Audit domain layer
///
/// Pure business logic: the scan target, repository snapshots, manifest
/// kinds, outcomes, and the services that turn a manifest into a verdict.
/// Nothing in here touches the network or the console.
pub mod domain;
pub mod policies;
pub mod services;
