use crate::audit::domain::{ManifestKind, ScanOutcome, ScanResult, ScanSummary, ScanTarget};

/// AuditResponse - Internal response DTO from the audit use case
///
/// Carries everything a formatter needs; formatters never call back into
/// the use case.
#[derive(Debug, Clone)]
pub struct AuditResponse {
    pub target: ScanTarget,
    pub manifest_kind: ManifestKind,
    pub package: String,
    pub below: u64,
    /// One result per listed repository, in listing order
    pub results: Vec<ScanResult>,
    pub summary: ScanSummary,
}

impl AuditResponse {
    pub fn new(
        target: ScanTarget,
        manifest_kind: ManifestKind,
        package: String,
        below: u64,
        results: Vec<ScanResult>,
        summary: ScanSummary,
    ) -> Self {
        Self {
            target,
            manifest_kind,
            package,
            below,
            results,
            summary,
        }
    }

    /// Results with the given outcome, listing order preserved
    pub fn results_with(&self, outcome: ScanOutcome) -> impl Iterator<Item = &ScanResult> {
        self.results.iter().filter(move |r| r.outcome == outcome)
    }

    /// Used for the `--fail-on-below` exit code
    pub fn has_below_target(&self) -> bool {
        self.summary.below > 0
    }
}
