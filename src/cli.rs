use clap::{ArgAction, Parser};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::ConfigFile;
use dep_audit::application::dto::DEFAULT_DELAY;
use dep_audit::prelude::*;

/// Report GitHub repositories that declare a package below a major version
#[derive(Parser, Debug)]
#[command(name = "dep-audit")]
#[command(version)]
#[command(
    about = "Report GitHub repositories that declare a package below a target major version",
    long_about = None
)]
pub struct Args {
    /// GitHub user or organization URL (or a bare account name)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Manifest to read: composer or node
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub manifest_type: Option<ManifestKind>,

    /// Package name as written in the manifest (e.g. livewire/livewire)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Report repositories whose declared major version is lower than this
    #[arg(short, long, value_name = "MAJOR")]
    pub below: Option<u64>,

    /// Branch to read instead of each repository's default branch
    #[arg(long)]
    pub branch: Option<String>,

    /// Seconds to wait between repositories (fractions allowed)
    #[arg(long, value_name = "SECONDS", value_parser = parse_delay)]
    pub delay: Option<Duration>,

    /// Output format: table or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./dep-audit.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// GitHub API base URL, for GitHub Enterprise
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Exit with code 1 when any repository is below the target
    #[arg(long)]
    pub fail_on_below: bool,

    /// Increase diagnostic logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Run settings after merging flags, config file and prompts
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub url: String,
    pub manifest_kind: ManifestKind,
    pub package: String,
    pub below: u64,
    pub branch: Option<String>,
    pub delay: Duration,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// API base URL from the flag or the config file
    pub fn api_url<'a>(&'a self, config: &'a ConfigFile) -> Option<&'a str> {
        self.api_url.as_deref().or(config.api_url.as_deref())
    }

    /// Merges flags over the config file and asks for whatever is still missing
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        config: ConfigFile,
        prompter: &mut ConsolePrompter<R, W>,
    ) -> Result<Settings> {
        let url = match self.url.clone().or(config.url) {
            Some(url) => url,
            None => prompter.ask("url", "GitHub user or organization URL")?,
        };

        let manifest_kind = match self.manifest_type {
            Some(kind) => kind,
            None => match config.manifest_type {
                Some(value) => config_value("manifest_type", &value)?,
                None => prompter.ask_parsed("type", "Manifest type (composer/node)")?,
            },
        };

        let package = match self.package.clone().or(config.package) {
            Some(package) => package,
            None => prompter.ask("package", "Package name")?,
        };
        let package = package.trim().to_string();
        if package.is_empty() {
            return Err(invalid("package", "must not be empty").into());
        }

        let below = match self.below.or(config.below) {
            Some(below) => below,
            None => prompter.ask_parsed("below", "Report versions below major")?,
        };

        let delay = match (self.delay, config.delay) {
            (Some(delay), _) => delay,
            (None, Some(seconds)) => seconds_to_delay(seconds)
                .map_err(|e| anyhow::anyhow!("Invalid config: delay: {}", e))?,
            (None, None) => DEFAULT_DELAY,
        };

        let format = match (self.format, config.format) {
            (Some(format), _) => format,
            (None, Some(value)) => config_value("format", &value)?,
            (None, None) => OutputFormat::default(),
        };

        Ok(Settings {
            url,
            manifest_kind,
            package,
            below,
            branch: self.branch.clone().or(config.branch),
            delay,
            format,
            output: self.output.clone(),
        })
    }
}

/// Parses a config file value; a bad one is a config error, not bad input
fn config_value<T>(field: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|e: String| anyhow::anyhow!("Invalid config: {}: {}", field, e))
}

fn invalid(field: &str, reason: &str) -> AuditError {
    AuditError::InvalidInput {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_delay(s: &str) -> std::result::Result<Duration, String> {
    let seconds: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", s))?;
    seconds_to_delay(seconds)
}

fn seconds_to_delay(seconds: f64) -> std::result::Result<Duration, String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("delay must be finite and non-negative, got {}", seconds));
    }
    Duration::try_from_secs_f64(seconds).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["dep-audit"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    fn prompter(input: &str) -> ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_full_command_line() {
        let args = args(&[
            "--url",
            "https://github.com/orgs/acme",
            "--type",
            "composer",
            "--package",
            "livewire/livewire",
            "--below",
            "4",
            "--delay",
            "0.25",
            "--format",
            "json",
            "-vv",
        ]);
        assert_eq!(args.manifest_type, Some(ManifestKind::Composer));
        assert_eq!(args.below, Some(4));
        assert_eq!(args.delay, Some(Duration::from_millis(250)));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.verbose, 2);
        assert!(!args.fail_on_below);
    }

    #[test]
    fn test_parse_rejects_invalid_type() {
        let result = Args::try_parse_from(["dep-audit", "--type", "cargo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_below() {
        let result = Args::try_parse_from(["dep-audit", "--below", "four"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_delay("1.5").unwrap(), Duration::from_millis(1500));
        assert!(parse_delay("-1").is_err());
        assert!(parse_delay("NaN").is_err());
        assert!(parse_delay("inf").is_err());
        assert!(parse_delay("soon").is_err());
    }

    #[test]
    fn test_resolve_from_flags_only() {
        let args = args(&["--url", "acme", "-t", "node", "-p", "react", "-b", "18"]);
        let mut prompter = prompter("");

        let settings = args.resolve(ConfigFile::default(), &mut prompter).unwrap();
        assert_eq!(settings.url, "acme");
        assert_eq!(settings.manifest_kind, ManifestKind::Node);
        assert_eq!(settings.package, "react");
        assert_eq!(settings.below, 18);
        assert_eq!(settings.delay, DEFAULT_DELAY);
        assert_eq!(settings.format, OutputFormat::Table);
        assert!(settings.branch.is_none());
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let args = args(&["--package", "laravel/framework", "--delay", "0"]);
        let config = ConfigFile {
            url: Some("https://github.com/orgs/acme".to_string()),
            manifest_type: Some("composer".to_string()),
            package: Some("livewire/livewire".to_string()),
            below: Some(4),
            branch: Some("develop".to_string()),
            delay: Some(2.0),
            format: Some("json".to_string()),
            ..ConfigFile::default()
        };

        let settings = args.resolve(config, &mut prompter("")).unwrap();
        assert_eq!(settings.url, "https://github.com/orgs/acme");
        assert_eq!(settings.manifest_kind, ManifestKind::Composer);
        assert_eq!(settings.package, "laravel/framework");
        assert_eq!(settings.below, 4);
        assert_eq!(settings.branch.as_deref(), Some("develop"));
        assert_eq!(settings.delay, Duration::ZERO);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_prompts_for_missing_values() {
        let args = args(&["--type", "node"]);
        let mut prompter = prompter("https://github.com/acme\nreact\n18\n");

        let settings = args.resolve(ConfigFile::default(), &mut prompter).unwrap();
        assert_eq!(settings.url, "https://github.com/acme");
        assert_eq!(settings.package, "react");
        assert_eq!(settings.below, 18);
    }

    #[test]
    fn test_resolve_prompt_eof_is_invalid_input() {
        let args = args(&["--url", "acme", "--type", "node"]);
        let err = args
            .resolve(ConfigFile::default(), &mut prompter(""))
            .unwrap_err();
        assert_eq!(ExitCode::for_error(&err), ExitCode::InvalidArguments);
    }

    #[test]
    fn test_resolve_prompted_non_numeric_below() {
        let args = args(&["--url", "acme", "--type", "node", "--package", "react"]);
        let err = args
            .resolve(ConfigFile::default(), &mut prompter("eighteen\n"))
            .unwrap_err();
        assert_eq!(ExitCode::for_error(&err), ExitCode::InvalidArguments);
    }

    #[test]
    fn test_resolve_blank_package_flag() {
        let args = args(&["--url", "acme", "--type", "node", "--package", " ", "-b", "1"]);
        let err = args
            .resolve(ConfigFile::default(), &mut prompter(""))
            .unwrap_err();
        assert!(err.to_string().contains("package"));
    }

    #[test]
    fn test_resolve_invalid_config_format() {
        let args = args(&["--url", "acme", "--type", "node", "--package", "react", "-b", "1"]);
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            ..ConfigFile::default()
        };
        let err = args.resolve(config, &mut prompter("")).unwrap_err();
        assert!(err.to_string().contains("Invalid config: format"));
        assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
    }

    #[test]
    fn test_resolve_invalid_config_manifest_type() {
        let args = args(&["--url", "acme", "--package", "react", "-b", "1"]);
        let config = ConfigFile {
            manifest_type: Some("cargo".to_string()),
            ..ConfigFile::default()
        };
        let err = args.resolve(config, &mut prompter("")).unwrap_err();
        assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
    }

    #[test]
    fn test_api_url_precedence() {
        let config = ConfigFile {
            api_url: Some("https://ghe.example.com/api/v3".to_string()),
            ..ConfigFile::default()
        };
        assert_eq!(
            args(&[]).api_url(&config),
            Some("https://ghe.example.com/api/v3")
        );
        assert_eq!(
            args(&["--api-url", "http://127.0.0.1:1234"]).api_url(&config),
            Some("http://127.0.0.1:1234")
        );
    }
}
