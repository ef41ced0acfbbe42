use crate::audit::domain::{ManifestFetch, RepositoryRecord, ScanTarget};
use crate::shared::Result;

/// RepositoryHost port for the hosted Git service (GitHub)
///
/// This port abstracts the pre-authenticated API client used to discover
/// the owner, list its repositories and read one file per repository.
/// All calls are blocking; the audit issues them strictly one at a time.
pub trait RepositoryHost {
    /// Returns the login of the account the client is authenticated as
    ///
    /// # Errors
    /// Returns an error if the token is rejected or the API is unreachable
    fn authenticated_user(&self) -> Result<String>;

    /// Probes whether `name` is an organization
    ///
    /// Any failure of the probe, including "not found", means `false`.
    fn is_organization(&self, name: &str) -> bool;

    /// Lists the repositories owned by `target`, in API order, up to `limit`
    ///
    /// `viewer` is the login returned by `authenticated_user`; when it names
    /// the target, the caller's private repositories are included.
    ///
    /// # Errors
    /// Returns an error if the owner does not exist, the token lacks
    /// permission, or the request fails
    fn list_repositories(
        &self,
        target: &ScanTarget,
        viewer: &str,
        limit: usize,
    ) -> Result<Vec<RepositoryRecord>>;

    /// Fetches and decodes a single file at `branch`
    ///
    /// Never fails: a missing file or failed request is `ManifestFetch::Missing`,
    /// an undecodable payload is `ManifestFetch::ParseError`.
    fn fetch_file(&self, owner: &str, repository: &str, branch: &str, path: &str)
        -> ManifestFetch;
}
