use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Scan completed (zero matches included)
    Success = 0,
    /// `--fail-on-below` was given and at least one repository is below target
    BelowTargetDetected = 1,
    /// Invalid command-line arguments or interactive input
    InvalidArguments = 2,
    /// Application error (missing token, API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error raised by `run()` to the exit code it should produce
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<AuditError>() {
            Some(AuditError::InvalidInput { .. }) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::BelowTargetDetected => write!(f, "Below Target Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the dependency audit.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Invalid URL format: {input}\nReason: {reason}\n\n💡 Hint: Use https://github.com/<owner> or https://github.com/orgs/<org>/repositories")]
    InvalidUrlFormat { input: String, reason: String },

    #[error("GitHub token not found\n\n💡 Hint: Export GITHUB_TOKEN or GH_TOKEN (for example: export GITHUB_TOKEN=$(gh auth token))")]
    MissingToken,

    #[error("GitHub authentication failed\nDetails: {details}\n\n💡 Hint: Verify that the token is valid and has not expired")]
    AuthenticationFailed { details: String },

    #[error("Failed to list repositories for '{owner}'\nDetails: {details}\n\n💡 Hint: Check that the owner exists and that the token can read its repositories")]
    RepositoryListError { owner: String, details: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::BelowTargetDetected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::BelowTargetDetected),
            "Below Target Detected (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_for_invalid_input() {
        let error: anyhow::Error = AuditError::InvalidInput {
            field: "type".to_string(),
            reason: "must be composer or node".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::InvalidArguments);
    }

    #[test]
    fn test_exit_code_for_application_errors() {
        let error: anyhow::Error = AuditError::MissingToken.into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);

        let error = anyhow::anyhow!("something else");
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);
    }

    #[test]
    fn test_invalid_url_format_display() {
        let error = AuditError::InvalidUrlFormat {
            input: "https://github.com/".to_string(),
            reason: "No owner name found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid URL format"));
        assert!(display.contains("https://github.com/"));
        assert!(display.contains("No owner name found"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_missing_token_display() {
        let display = format!("{}", AuditError::MissingToken);
        assert!(display.contains("GitHub token not found"));
        assert!(display.contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_repository_list_error_display() {
        let error = AuditError::RepositoryListError {
            owner: "acme".to_string(),
            details: "GitHub API returned status code 404 Not Found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to list repositories for 'acme'"));
        assert!(display.contains("404"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = AuditError::FileWriteError {
            path: PathBuf::from("/test/report.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.json"));
        assert!(display.contains("Permission denied"));
    }
}
