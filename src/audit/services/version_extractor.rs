use crate::audit::domain::ManifestKind;
use serde_json::Value;

/// VersionExtractor looks up a package's constraint string in a manifest
///
/// The primary (runtime) section always wins over the secondary
/// (development) section. Malformed JSON is treated the same as an
/// undeclared package.
pub struct VersionExtractor;

impl VersionExtractor {
    /// Returns the raw constraint declared for `package`, if any
    pub fn extract(manifest: &str, package: &str, kind: ManifestKind) -> Option<String> {
        let document: Value = serde_json::from_str(manifest).ok()?;

        Self::lookup(&document, kind.primary_section(), package)
            .or_else(|| Self::lookup(&document, kind.secondary_section(), package))
    }

    fn lookup(document: &Value, section: &str, package: &str) -> Option<String> {
        match document.get(section)?.as_object()?.get(package)? {
            Value::Null => None,
            Value::String(constraint) => Some(constraint.clone()),
            other => Some(other.to_string()),
        }
    }
}
