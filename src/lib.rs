//! dep-audit - dependency version audit across every repository of a GitHub owner
//!
//! This library lists the repositories of a GitHub user or organization,
//! reads one root-level manifest (`composer.json` or `package.json`) from
//! each, and reports the repositories that declare a package below a target
//! major version. It follows hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`audit`): scan target, outcomes, version reduction
//! - **Application Layer** (`application`): the audit use case and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): GitHub client, console, formatters, file output
//! - **Shared** (`shared`): Error types and common helpers
//!
//! # Example
//!
//! ```no_run
//! use dep_audit::prelude::*;
//! use std::time::Duration;
//!
//! # fn main() -> Result<()> {
//! let host = GitHubClient::from_env(None)?;
//! let use_case = AuditRepositoriesUseCase::new(host, StderrProgressReporter::new());
//!
//! let request = AuditRequest::new(
//!     "https://github.com/orgs/acme/repositories",
//!     ManifestKind::Composer,
//!     "livewire/livewire",
//!     4,
//! )
//! .with_delay(Duration::from_secs(1));
//!
//! let response = use_case.execute(request)?;
//! println!("{}", TableFormatter::new(false).format(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod audit;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::ConsolePrompter;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::adapters::outbound::network::GitHubClient;
    pub use crate::application::dto::{AuditRequest, AuditResponse, OutputFormat};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{AuditRepositoriesUseCase, MAX_REPOSITORIES};
    pub use crate::audit::domain::{
        ManifestFetch, ManifestKind, OwnerKind, OwnerLocator, RepositoryRecord, ScanOutcome,
        ScanResult, ScanSummary, ScanTarget,
    };
    pub use crate::audit::policies::BranchPolicy;
    pub use crate::audit::services::{MajorVersionReducer, VersionExtractor};
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportFormatter, RepositoryHost,
    };
    pub use crate::shared::error::{AuditError, ExitCode};
    pub use crate::shared::Result;
}
