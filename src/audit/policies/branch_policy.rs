/// Branch used when neither an override nor a default branch is known
pub const FALLBACK_BRANCH: &str = "main";

/// BranchPolicy decides which ref a manifest is read from
///
/// Priority order:
/// 1. explicit override (`--branch`)
/// 2. the repository's default branch
/// 3. `main`
///
/// The `main` fallback is an approximation for repositories whose default
/// branch the API did not report.
pub struct BranchPolicy;

impl BranchPolicy {
    pub fn effective_branch<'a>(
        override_branch: Option<&'a str>,
        default_branch: Option<&'a str>,
    ) -> &'a str {
        override_branch
            .filter(|b| !b.trim().is_empty())
            .or_else(|| default_branch.filter(|b| !b.trim().is_empty()))
            .unwrap_or(FALLBACK_BRANCH)
    }
}
