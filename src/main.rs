mod cli;
mod config;

use cli::Args;
use dep_audit::prelude::*;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::for_error(&e).as_i32());
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,dep_audit={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    // Fail on a missing token before asking anything interactively
    let host = GitHubClient::from_env(args.api_url(&config))?;

    let settings = args.resolve(config, &mut ConsolePrompter::stdio())?;
    tracing::debug!(?settings, "resolved settings");

    let use_case = AuditRepositoriesUseCase::new(host, StderrProgressReporter::new());
    let request = AuditRequest::new(
        settings.url,
        settings.manifest_kind,
        settings.package,
        settings.below,
    )
    .with_branch(settings.branch)
    .with_delay(settings.delay);

    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let use_color = !args.no_color
        && settings.output.is_none()
        && std::env::var_os("NO_COLOR").is_none()
        && io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, use_color);
    let report = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&report)?;

    if args.fail_on_below && response.has_below_target() {
        return Ok(ExitCode::BelowTargetDetected);
    }
    Ok(ExitCode::Success)
}
