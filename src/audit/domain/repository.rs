use serde::Serialize;

/// Read-only snapshot of a repository as returned by the lister
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub url: String,
    pub is_private: bool,
    /// `None` when the API did not report a default branch
    pub default_branch: Option<String>,
}

impl RepositoryRecord {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        is_private: bool,
        default_branch: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            is_private,
            default_branch,
        }
    }

    pub fn visibility(&self) -> &'static str {
        if self.is_private {
            "private"
        } else {
            "public"
        }
    }
}
