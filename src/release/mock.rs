use crate::domain::Project;
use crate::error::{Result, TryReleaseError};
use crate::release::ReleaseSource;
use std::collections::HashMap;

/// Mock release source for testing without network access
///
/// Projects never registered answer as "no release found"; projects
/// registered without a tag answer with a missing-tag error.
pub struct MockReleaseSource {
    releases: HashMap<String, Option<String>>,
}

impl MockReleaseSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        MockReleaseSource {
            releases: HashMap::new(),
        }
    }

    /// Publish a release with the given tag
    pub fn with_release(mut self, owner: &str, repo: &str, tag: impl Into<String>) -> Self {
        self.releases.insert(key(owner, repo), Some(tag.into()));
        self
    }

    /// Publish a release whose response carries no tag
    pub fn with_untagged_release(mut self, owner: &str, repo: &str) -> Self {
        self.releases.insert(key(owner, repo), None);
        self
    }
}

fn key(owner: &str, repo: &str) -> String {
    format!("{}/{}", owner, repo)
}

impl Default for MockReleaseSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseSource for MockReleaseSource {
    fn latest_tag(&self, owner: &str, repo: &str) -> Result<String> {
        match self.releases.get(&key(owner, repo)) {
            Some(Some(tag)) if !tag.is_empty() => Ok(tag.clone()),
            Some(_) => Err(TryReleaseError::MissingTag),
            None => Err(TryReleaseError::NotFound(
                Project::new(owner, repo).human_url(),
            )),
        }
    }
}
