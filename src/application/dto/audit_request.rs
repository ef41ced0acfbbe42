use crate::audit::domain::ManifestKind;
use std::time::Duration;

/// Default pause between repositories
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// AuditRequest - Internal request DTO for the audit use case
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Owner URL or bare account name
    pub target_url: String,
    /// Which manifest to read
    pub manifest_kind: ManifestKind,
    /// Package key looked up in the manifest
    pub package: String,
    /// Target major version; anything lower is reported
    pub below: u64,
    /// Branch to read instead of each repository's default branch
    pub branch: Option<String>,
    /// Pause between two repositories
    pub delay: Duration,
}

impl AuditRequest {
    pub fn new(
        target_url: impl Into<String>,
        manifest_kind: ManifestKind,
        package: impl Into<String>,
        below: u64,
    ) -> Self {
        Self {
            target_url: target_url.into(),
            manifest_kind,
            package: package.into(),
            below,
            branch: None,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_branch(mut self, branch: Option<String>) -> Self {
        self.branch = branch;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}
