use super::RepositoryRecord;
use serde::Serialize;

/// Placeholder shown when the manifest could not be fetched
pub const MISSING_PLACEHOLDER: &str = "N/A";
/// Placeholder shown when the manifest could not be decoded
pub const PARSE_ERROR_PLACEHOLDER: &str = "Parse error";
/// Placeholder shown when the package is declared in neither section
pub const NOT_DECLARED_PLACEHOLDER: &str = "Not found";

/// Final classification of one repository. Every repository gets exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOutcome {
    BelowTarget,
    AtOrAboveTarget,
    ManifestMissing,
    ManifestParseError,
    DependencyNotDeclared,
}

impl ScanOutcome {
    /// Whether the repository shows up in the worklist
    pub fn is_actionable(&self) -> bool {
        !matches!(self, ScanOutcome::AtOrAboveTarget)
    }
}

/// Per-repository scan result, never mutated after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub repository: RepositoryRecord,
    /// Raw constraint string as declared, if any
    pub constraint: Option<String>,
    /// Major version derived from `constraint`
    pub effective_major: Option<u64>,
    pub outcome: ScanOutcome,
}

impl ScanResult {
    pub fn manifest_missing(repository: RepositoryRecord) -> Self {
        Self::without_constraint(repository, ScanOutcome::ManifestMissing)
    }

    pub fn manifest_parse_error(repository: RepositoryRecord) -> Self {
        Self::without_constraint(repository, ScanOutcome::ManifestParseError)
    }

    pub fn not_declared(repository: RepositoryRecord) -> Self {
        Self::without_constraint(repository, ScanOutcome::DependencyNotDeclared)
    }

    /// Classifies a declared dependency against the target major version
    pub fn declared(
        repository: RepositoryRecord,
        constraint: String,
        effective_major: u64,
        target_major: u64,
    ) -> Self {
        let outcome = if effective_major < target_major {
            ScanOutcome::BelowTarget
        } else {
            ScanOutcome::AtOrAboveTarget
        };

        Self {
            repository,
            constraint: Some(constraint),
            effective_major: Some(effective_major),
            outcome,
        }
    }

    fn without_constraint(repository: RepositoryRecord, outcome: ScanOutcome) -> Self {
        Self {
            repository,
            constraint: None,
            effective_major: None,
            outcome,
        }
    }

    /// Constraint string, or the placeholder matching the outcome
    pub fn display_version(&self) -> &str {
        match self.outcome {
            ScanOutcome::ManifestMissing => MISSING_PLACEHOLDER,
            ScanOutcome::ManifestParseError => PARSE_ERROR_PLACEHOLDER,
            ScanOutcome::DependencyNotDeclared => NOT_DECLARED_PLACEHOLDER,
            ScanOutcome::BelowTarget | ScanOutcome::AtOrAboveTarget => {
                self.constraint.as_deref().unwrap_or(MISSING_PLACEHOLDER)
            }
        }
    }
}

/// Outcome tallies for the final report.
///
/// `no_manifest` covers both missing and undecodable manifests, so the four
/// counters always add up to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub total: usize,
    pub below: usize,
    pub at_or_above: usize,
    pub no_manifest: usize,
    pub not_declared: usize,
}

impl ScanSummary {
    pub fn record(&mut self, outcome: ScanOutcome) {
        self.total += 1;
        match outcome {
            ScanOutcome::BelowTarget => self.below += 1,
            ScanOutcome::AtOrAboveTarget => self.at_or_above += 1,
            ScanOutcome::ManifestMissing | ScanOutcome::ManifestParseError => {
                self.no_manifest += 1
            }
            ScanOutcome::DependencyNotDeclared => self.not_declared += 1,
        }
    }

    pub fn from_results(results: &[ScanResult]) -> Self {
        results.iter().fold(Self::default(), |mut summary, result| {
            summary.record(result.outcome);
            summary
        })
    }
}

/// Append-only accumulator owned by a single scan
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    results: Vec<ScanResult>,
    summary: ScanSummary,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: ScanResult) {
        self.summary.record(result.outcome);
        self.results.push(result);
    }

    pub fn results(&self) -> &[ScanResult] {
        &self.results
    }

    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    pub fn into_parts(self) -> (Vec<ScanResult>, ScanSummary) {
        (self.results, self.summary)
    }
}
