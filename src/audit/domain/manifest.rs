use serde::Serialize;

/// Dependency manifest flavour being audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestKind {
    /// PHP Composer (`composer.json`)
    Composer,
    /// Node.js (`package.json`)
    Node,
}

impl ManifestKind {
    /// Root-level file name fetched from every repository
    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::Composer => "composer.json",
            ManifestKind::Node => "package.json",
        }
    }

    /// Runtime dependency section, consulted first
    pub fn primary_section(&self) -> &'static str {
        match self {
            ManifestKind::Composer => "require",
            ManifestKind::Node => "dependencies",
        }
    }

    /// Development dependency section, consulted when the primary one lacks the package
    pub fn secondary_section(&self) -> &'static str {
        match self {
            ManifestKind::Composer => "require-dev",
            ManifestKind::Node => "devDependencies",
        }
    }
}

impl std::str::FromStr for ManifestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "composer" => Ok(ManifestKind::Composer),
            "node" => Ok(ManifestKind::Node),
            _ => Err(format!(
                "Invalid manifest type: {}. Please specify 'composer' or 'node'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestKind::Composer => write!(f, "composer"),
            ManifestKind::Node => write!(f, "node"),
        }
    }
}

/// Result of fetching a manifest from the hosted API.
///
/// Missing and unreadable manifests are values, not errors, so every
/// repository can be classified without aborting the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestFetch {
    /// Decoded file text
    Content(String),
    /// File absent, or the request failed
    Missing,
    /// File present but its transport encoding could not be decoded
    ParseError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_manifest_kind_from_str() {
        assert_eq!(
            ManifestKind::from_str("composer").unwrap(),
            ManifestKind::Composer
        );
        assert_eq!(ManifestKind::from_str("NODE").unwrap(), ManifestKind::Node);
    }

    #[test]
    fn test_manifest_kind_from_str_invalid() {
        let error = ManifestKind::from_str("cargo").unwrap_err();
        assert!(error.contains("Invalid manifest type"));
        assert!(error.contains("composer"));
        assert!(error.contains("node"));
    }

    #[test]
    fn test_composer_layout() {
        let kind = ManifestKind::Composer;
        assert_eq!(kind.file_name(), "composer.json");
        assert_eq!(kind.primary_section(), "require");
        assert_eq!(kind.secondary_section(), "require-dev");
    }

    #[test]
    fn test_node_layout() {
        let kind = ManifestKind::Node;
        assert_eq!(kind.file_name(), "package.json");
        assert_eq!(kind.primary_section(), "dependencies");
        assert_eq!(kind.secondary_section(), "devDependencies");
    }

    #[test]
    fn test_manifest_kind_display() {
        assert_eq!(ManifestKind::Composer.to_string(), "composer");
        assert_eq!(ManifestKind::Node.to_string(), "node");
    }
}
