/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (GitHub API, console, file system).
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod repository_host;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use repository_host::RepositoryHost;
