use crate::application::dto::AuditResponse;
use crate::audit::domain::{ManifestKind, OwnerKind, ScanResult, ScanSummary};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    owner: &'a str,
    owner_kind: OwnerKind,
    package: &'a str,
    manifest: ManifestKind,
    manifest_file: &'static str,
    below: u64,
    results: &'a [ScanResult],
    summary: ScanSummary,
}

/// JsonFormatter adapter producing a machine-readable report
///
/// Unlike the table, every repository is included, at-or-above ones too.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &AuditResponse) -> Result<String> {
        let report = JsonReport {
            generated_at: Utc::now(),
            owner: response.target.owner(),
            owner_kind: response.target.kind(),
            package: &response.package,
            manifest: response.manifest_kind,
            manifest_file: response.manifest_kind.file_name(),
            below: response.below,
            results: &response.results,
            summary: response.summary,
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
