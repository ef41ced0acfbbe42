use crate::application::dto::AuditResponse;
use crate::audit::domain::{ScanOutcome, ScanResult};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::{AnsiColors, OwoColorize};

const URL_HEADER: &str = "Repository URL";
const NAME_HEADER: &str = "Name";
const VERSION_HEADER: &str = "Version";
const VISIBILITY_HEADER: &str = "Visibility";

/// One block of the worklist
struct Section {
    title: &'static str,
    outcomes: &'static [ScanOutcome],
    color: AnsiColors,
}

const SECTIONS: [Section; 3] = [
    Section {
        title: "Below target",
        outcomes: &[ScanOutcome::BelowTarget],
        color: AnsiColors::Red,
    },
    Section {
        title: "Manifest missing or unreadable",
        outcomes: &[ScanOutcome::ManifestMissing, ScanOutcome::ManifestParseError],
        color: AnsiColors::Yellow,
    },
    Section {
        title: "Dependency not declared",
        outcomes: &[ScanOutcome::DependencyNotDeclared],
        color: AnsiColors::Blue,
    },
];

/// Column widths shared by every section so the tables line up
struct ColumnWidths {
    url: usize,
    name: usize,
    version: usize,
}

impl ColumnWidths {
    fn measure<'a>(rows: impl Iterator<Item = &'a ScanResult>) -> Self {
        rows.fold(
            Self {
                url: URL_HEADER.len(),
                name: NAME_HEADER.len(),
                version: VERSION_HEADER.len(),
            },
            |widths, row| Self {
                url: widths.url.max(row.repository.url.chars().count()),
                name: widths.name.max(row.repository.name.chars().count()),
                version: widths.version.max(row.display_version().chars().count()),
            },
        )
    }
}

/// TableFormatter adapter rendering the worklist as fixed-width tables
///
/// Only actionable repositories are listed; those at or above the target
/// are counted in the summary.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, color: AnsiColors) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn emphasize(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn row(widths: &ColumnWidths, url: &str, name: &str, version: &str, visibility: &str) -> String {
        format!(
            "{:<url_w$}  {:<name_w$}  {:<version_w$}  {}",
            url,
            name,
            version,
            visibility,
            url_w = widths.url,
            name_w = widths.name,
            version_w = widths.version,
        )
    }

    fn render_header(&self, output: &mut String, response: &AuditResponse) {
        output.push_str(&self.emphasize(&format!(
            "Dependency audit: {} below {} ({})",
            response.package,
            response.below,
            response.manifest_kind.file_name()
        )));
        output.push('\n');
        output.push_str(&format!(
            "Owner: {} ({})\n\n",
            response.target.owner(),
            response.target.kind()
        ));
    }

    fn render_section(
        &self,
        output: &mut String,
        section: &Section,
        rows: &[&ScanResult],
        widths: &ColumnWidths,
    ) {
        output.push_str(&self.paint(
            &format!("{} ({})", section.title, rows.len()),
            section.color,
        ));
        output.push('\n');

        let header = Self::row(widths, URL_HEADER, NAME_HEADER, VERSION_HEADER, VISIBILITY_HEADER);
        output.push_str(&self.emphasize(&header));
        output.push('\n');
        output.push_str(&Self::row(
            widths,
            &"-".repeat(widths.url),
            &"-".repeat(widths.name),
            &"-".repeat(widths.version),
            &"-".repeat(VISIBILITY_HEADER.len()),
        ));
        output.push('\n');

        for result in rows {
            let line = Self::row(
                widths,
                &result.repository.url,
                &result.repository.name,
                result.display_version(),
                result.repository.visibility(),
            );
            output.push_str(&self.paint(&line, section.color));
            output.push('\n');
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, response: &AuditResponse) {
        let summary = &response.summary;
        output.push_str(&self.emphasize("Summary"));
        output.push('\n');

        let below_label = format!("Below target (< {}):", response.below);
        let lines = [
            ("Total repositories scanned:".to_string(), summary.total, None),
            (below_label, summary.below, Some(AnsiColors::Red)),
            ("At or above target:".to_string(), summary.at_or_above, Some(AnsiColors::Green)),
            ("Missing manifest:".to_string(), summary.no_manifest, Some(AnsiColors::Yellow)),
            ("Not declared:".to_string(), summary.not_declared, Some(AnsiColors::Blue)),
        ];
        let label_width = lines.iter().map(|(label, _, _)| label.len()).max().unwrap_or(0);

        for (label, count, color) in lines {
            let line = format!("  {:<width$} {}", label, count, width = label_width);
            match color {
                Some(color) if count > 0 => output.push_str(&self.paint(&line, color)),
                _ => output.push_str(&line),
            }
            output.push('\n');
        }
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, response: &AuditResponse) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, response);

        let actionable: Vec<&ScanResult> = response
            .results
            .iter()
            .filter(|r| r.outcome.is_actionable())
            .collect();

        if actionable.is_empty() {
            output.push_str("No repositories need attention.\n\n");
        } else {
            let widths = ColumnWidths::measure(actionable.iter().copied());
            for section in &SECTIONS {
                let rows: Vec<&ScanResult> = actionable
                    .iter()
                    .copied()
                    .filter(|r| section.outcomes.contains(&r.outcome))
                    .collect();
                if !rows.is_empty() {
                    self.render_section(&mut output, section, &rows, &widths);
                }
            }
        }

        self.render_summary(&mut output, response);
        Ok(output)
    }
}
