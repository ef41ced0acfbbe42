/// Use cases module containing application business logic orchestration
mod audit_repositories;

pub use audit_repositories::{AuditRepositoriesUseCase, MAX_REPOSITORIES};
