/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_repository_host;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_host::MockRepositoryHost;
