use crate::shared::error::AuditError;
use serde::Serialize;

/// Maximum length of a GitHub login
const MAX_OWNER_NAME_LENGTH: usize = 39;

/// Kind of account that owns the scanned repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    Organization,
    User,
}

impl std::fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OwnerKind::Organization => write!(f, "organization"),
            OwnerKind::User => write!(f, "user"),
        }
    }
}

/// The owner whose repositories are scanned. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    owner: String,
    kind: OwnerKind,
}

impl ScanTarget {
    pub fn new(owner: impl Into<String>, kind: OwnerKind) -> Self {
        Self {
            owner: owner.into(),
            kind,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn kind(&self) -> OwnerKind {
        self.kind
    }
}

/// Owner reference parsed out of the user-supplied URL.
///
/// `Organization` is produced when the URL itself says so (`/orgs/<name>`).
/// `Ambiguous` needs an API probe to decide between organization and user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerLocator {
    Organization(String),
    Ambiguous(String),
}

impl OwnerLocator {
    /// Parses a GitHub URL or bare account name.
    ///
    /// Accepted shapes:
    /// - `https://github.com/orgs/<name>/repositories`, `https://github.com/orgs/<name>`
    /// - `https://github.com/<name>`, `https://github.com/<name>?tab=repositories`
    /// - `<name>`
    pub fn parse(input: &str) -> Result<Self, AuditError> {
        let invalid = |reason: &str| AuditError::InvalidUrlFormat {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let without_query = input.trim().split(['?', '#']).next().unwrap_or_default();
        let trimmed = without_query.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(invalid("Input is empty"));
        }

        let (has_scheme, rest) = match trimmed.split_once("://") {
            Some((_, rest)) => (true, rest),
            None => (false, trimmed),
        };

        let mut segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        if has_scheme && !segments.is_empty() {
            // host
            segments.remove(0);
        }

        if let Some(position) = segments.iter().position(|s| *s == "orgs") {
            let name = segments
                .get(position + 1)
                .ok_or_else(|| invalid("Missing organization name after /orgs/"))?;
            validate_owner_name(name).map_err(|reason| invalid(&reason))?;
            return Ok(OwnerLocator::Organization(name.to_string()));
        }

        let name = segments
            .last()
            .ok_or_else(|| invalid("No owner name found in URL"))?;
        validate_owner_name(name).map_err(|reason| invalid(&reason))?;
        Ok(OwnerLocator::Ambiguous(name.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            OwnerLocator::Organization(name) | OwnerLocator::Ambiguous(name) => name,
        }
    }
}

fn validate_owner_name(name: &str) -> std::result::Result<(), String> {
    if name.len() > MAX_OWNER_NAME_LENGTH {
        return Err(format!(
            "Owner name '{}' is too long ({} characters). Maximum allowed: {}",
            name,
            name.len(),
            MAX_OWNER_NAME_LENGTH
        ));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(format!(
            "Owner name '{}' contains invalid characters. Only letters, digits and hyphens are allowed.",
            name
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_org_repositories_url() {
        let locator = OwnerLocator::parse("https://github.com/orgs/acme/repositories").unwrap();
        assert_eq!(locator, OwnerLocator::Organization("acme".to_string()));
    }

    #[test]
    fn test_parse_org_url_with_trailing_slash() {
        let locator = OwnerLocator::parse("https://github.com/orgs/acme/").unwrap();
        assert_eq!(locator, OwnerLocator::Organization("acme".to_string()));
    }

    #[test]
    fn test_parse_profile_url_is_ambiguous() {
        let locator = OwnerLocator::parse("https://github.com/octocat").unwrap();
        assert_eq!(locator, OwnerLocator::Ambiguous("octocat".to_string()));
    }

    #[test]
    fn test_parse_profile_url_with_query() {
        let locator = OwnerLocator::parse("https://github.com/octocat?tab=repositories").unwrap();
        assert_eq!(locator, OwnerLocator::Ambiguous("octocat".to_string()));

        let locator = OwnerLocator::parse("https://github.com/octocat/?tab=repositories").unwrap();
        assert_eq!(locator.name(), "octocat");
    }

    #[test]
    fn test_parse_bare_name() {
        let locator = OwnerLocator::parse("my-org").unwrap();
        assert_eq!(locator, OwnerLocator::Ambiguous("my-org".to_string()));
    }

    #[test]
    fn test_parse_without_scheme() {
        let locator = OwnerLocator::parse("github.com/orgs/acme").unwrap();
        assert_eq!(locator, OwnerLocator::Organization("acme".to_string()));
    }

    #[test]
    fn test_parse_host_only_is_invalid() {
        let result = OwnerLocator::parse("https://github.com/");
        assert!(matches!(result, Err(AuditError::InvalidUrlFormat { .. })));
    }

    #[test]
    fn test_parse_empty_is_invalid() {
        assert!(OwnerLocator::parse("").is_err());
        assert!(OwnerLocator::parse("   ").is_err());
        assert!(OwnerLocator::parse("///").is_err());
    }

    #[test]
    fn test_parse_orgs_without_name_is_invalid() {
        let err = OwnerLocator::parse("https://github.com/orgs/").unwrap_err();
        assert!(err.to_string().contains("Invalid URL format"));
    }

    #[test]
    fn test_parse_rejects_invalid_characters() {
        let err = OwnerLocator::parse("https://github.com/bad_name!").unwrap_err();
        assert!(err.to_string().contains("invalid characters"));
    }

    #[test]
    fn test_parse_rejects_overlong_name() {
        let name = "a".repeat(40);
        let err = OwnerLocator::parse(&name).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn test_owner_kind_display() {
        assert_eq!(OwnerKind::Organization.to_string(), "organization");
        assert_eq!(OwnerKind::User.to_string(), "user");
    }

    #[test]
    fn test_scan_target_accessors() {
        let target = ScanTarget::new("acme", OwnerKind::Organization);
        assert_eq!(target.owner(), "acme");
        assert_eq!(target.kind(), OwnerKind::Organization);
    }
}
