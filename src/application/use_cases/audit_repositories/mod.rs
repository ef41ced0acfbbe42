use crate::application::dto::{AuditRequest, AuditResponse};
use crate::audit::domain::{
    ManifestFetch, OwnerKind, OwnerLocator, RepositoryRecord, ScanReport, ScanResult, ScanTarget,
};
use crate::audit::policies::BranchPolicy;
use crate::audit::services::{MajorVersionReducer, VersionExtractor};
use crate::ports::outbound::{ProgressReporter, RepositoryHost};
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::thread;
use tracing::debug;

/// Maximum number of repositories listed for one owner
pub const MAX_REPOSITORIES: usize = 1000;

/// AuditRepositoriesUseCase - Core use case of the audit
///
/// Resolves the owner, lists its repositories and classifies each one,
/// strictly sequentially, pausing between repositories to stay clear of
/// the API rate limit.
///
/// # Type Parameters
/// * `H` - RepositoryHost implementation
/// * `PR` - ProgressReporter implementation
pub struct AuditRepositoriesUseCase<H, PR> {
    host: H,
    progress_reporter: PR,
}

impl<H, PR> AuditRepositoriesUseCase<H, PR>
where
    H: RepositoryHost,
    PR: ProgressReporter,
{
    /// Creates a new AuditRepositoriesUseCase with injected dependencies
    pub fn new(host: H, progress_reporter: PR) -> Self {
        Self {
            host,
            progress_reporter,
        }
    }

    /// Executes the audit
    ///
    /// # Errors
    /// Fails before any repository is scanned if the client is not
    /// authenticated, the URL cannot be resolved, or listing fails.
    /// Per-repository problems are never errors; they become outcomes.
    pub fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Precondition - authenticated client
        let viewer = self.verify_authentication()?;

        // Step 2: Resolve owner
        let target = self.resolve_target(&request.target_url)?;

        // Step 3: List repositories
        let repositories = self.list_repositories(&target, &viewer)?;

        if repositories.is_empty() {
            self.progress_reporter.report(&format!(
                "ℹ️  No repositories found for {} '{}'. Nothing to scan.",
                target.kind(),
                target.owner()
            ));
            return Ok(self.build_response(target, &request, ScanReport::new()));
        }

        // Step 4: Scan every repository
        let report = self.scan_repositories(&target, &repositories, &request);

        self.progress_reporter.report_completion(&format!(
            "✅ Scanned {} repositories",
            report.summary().total
        ));

        // Step 5: Build response
        Ok(self.build_response(target, &request, report))
    }

    fn verify_authentication(&self) -> Result<String> {
        let login = self
            .host
            .authenticated_user()
            .map_err(|e| AuditError::AuthenticationFailed {
                details: format!("{:#}", e),
            })?;

        self.progress_reporter
            .report(&format!("🔑 Authenticated as {}", login));
        Ok(login)
    }

    /// Turns the input URL into a ScanTarget, probing the API when the URL
    /// does not say whether the owner is an organization
    pub fn resolve_target(&self, target_url: &str) -> Result<ScanTarget> {
        let target = match OwnerLocator::parse(target_url)? {
            OwnerLocator::Organization(name) => ScanTarget::new(name, OwnerKind::Organization),
            OwnerLocator::Ambiguous(name) => {
                let kind = if self.host.is_organization(&name) {
                    OwnerKind::Organization
                } else {
                    OwnerKind::User
                };
                ScanTarget::new(name, kind)
            }
        };

        self.progress_reporter.report(&format!(
            "🎯 Target: {} ({})",
            target.owner(),
            target.kind()
        ));
        Ok(target)
    }

    fn list_repositories(
        &self,
        target: &ScanTarget,
        viewer: &str,
    ) -> Result<Vec<RepositoryRecord>> {
        self.progress_reporter.report(&format!(
            "📚 Listing repositories for {}...",
            target.owner()
        ));

        let repositories = self
            .host
            .list_repositories(target, viewer, MAX_REPOSITORIES)
            .map_err(|e| AuditError::RepositoryListError {
                owner: target.owner().to_string(),
                details: format!("{:#}", e),
            })?;

        self.progress_reporter.report(&format!(
            "✅ Found {} repositories",
            repositories.len()
        ));
        Ok(repositories)
    }

    /// Scans repositories in listing order, pausing `request.delay` between
    /// two consecutive repositories; no pause follows the last one.
    fn scan_repositories(
        &self,
        target: &ScanTarget,
        repositories: &[RepositoryRecord],
        request: &AuditRequest,
    ) -> ScanReport {
        let total = repositories.len();
        let mut report = ScanReport::new();

        for (index, repository) in repositories.iter().enumerate() {
            let result = self.scan_repository(target.owner(), repository, request);
            report.push(result);

            self.progress_reporter
                .report_progress(index + 1, total, Some(&repository.name));

            // Courtesy throttle against the API rate limit
            if index + 1 < total && !request.delay.is_zero() {
                thread::sleep(request.delay);
            }
        }

        report
    }

    /// Classifies a single repository
    pub fn scan_repository(
        &self,
        owner: &str,
        repository: &RepositoryRecord,
        request: &AuditRequest,
    ) -> ScanResult {
        let branch = BranchPolicy::effective_branch(
            request.branch.as_deref(),
            repository.default_branch.as_deref(),
        );

        let manifest = self.host.fetch_file(
            owner,
            &repository.name,
            branch,
            request.manifest_kind.file_name(),
        );

        let result = match manifest {
            ManifestFetch::Missing => ScanResult::manifest_missing(repository.clone()),
            ManifestFetch::ParseError => ScanResult::manifest_parse_error(repository.clone()),
            ManifestFetch::Content(text) => {
                match VersionExtractor::extract(&text, &request.package, request.manifest_kind) {
                    None => ScanResult::not_declared(repository.clone()),
                    Some(constraint) => {
                        let major = MajorVersionReducer::reduce(&constraint);
                        ScanResult::declared(repository.clone(), constraint, major, request.below)
                    }
                }
            }
        };

        debug!(
            repository = %repository.name,
            branch,
            outcome = ?result.outcome,
            "classified repository"
        );
        result
    }

    fn build_response(
        &self,
        target: ScanTarget,
        request: &AuditRequest,
        report: ScanReport,
    ) -> AuditResponse {
        let (results, summary) = report.into_parts();
        AuditResponse::new(
            target,
            request.manifest_kind,
            request.package.clone(),
            request.below,
            results,
            summary,
        )
    }
}
