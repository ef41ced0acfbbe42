use dep_audit::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock RepositoryHost serving canned repositories and manifests
///
/// Manifests are keyed by repository and branch; anything not registered
/// is reported as missing.
#[derive(Default, Clone)]
pub struct MockRepositoryHost {
    login: Option<String>,
    organizations: HashSet<String>,
    repositories: Vec<RepositoryRecord>,
    files: HashMap<(String, String), ManifestFetch>,
    pub fetched: Arc<Mutex<Vec<String>>>,
}

impl MockRepositoryHost {
    pub fn new() -> Self {
        Self {
            login: Some("auditor".to_string()),
            ..Self::default()
        }
    }

    pub fn unauthenticated() -> Self {
        Self::default()
    }

    pub fn with_organization(mut self, name: &str) -> Self {
        self.organizations.insert(name.to_string());
        self
    }

    pub fn with_repository(mut self, name: &str, private: bool, default_branch: Option<&str>) -> Self {
        self.repositories.push(RepositoryRecord::new(
            name,
            format!("https://github.com/acme/{}", name),
            private,
            default_branch.map(str::to_string),
        ));
        self
    }

    pub fn with_manifest(mut self, repository: &str, branch: &str, content: &str) -> Self {
        self.files.insert(
            (repository.to_string(), branch.to_string()),
            ManifestFetch::Content(content.to_string()),
        );
        self
    }

    pub fn fetched_paths(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl RepositoryHost for MockRepositoryHost {
    fn authenticated_user(&self) -> Result<String> {
        self.login
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Bad credentials"))
    }

    fn is_organization(&self, name: &str) -> bool {
        self.organizations.contains(name)
    }

    fn list_repositories(
        &self,
        _target: &ScanTarget,
        _viewer: &str,
        limit: usize,
    ) -> Result<Vec<RepositoryRecord>> {
        Ok(self.repositories.iter().take(limit).cloned().collect())
    }

    fn fetch_file(&self, owner: &str, repository: &str, branch: &str, path: &str) -> ManifestFetch {
        self.fetched
            .lock()
            .unwrap()
            .push(format!("{}/{}@{}:{}", owner, repository, branch, path));
        self.files
            .get(&(repository.to_string(), branch.to_string()))
            .cloned()
            .unwrap_or(ManifestFetch::Missing)
    }
}
