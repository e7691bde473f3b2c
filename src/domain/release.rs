use serde::Deserialize;

/// The subset of a "latest release" API response we care about.
///
/// `tag_name` is optional here so an absent or null field decodes cleanly and
/// can be reported as a missing tag instead of a generic JSON error.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Release {
    #[serde(default)]
    pub tag_name: Option<String>,
}

impl Release {
    /// The release tag, if present and non-empty
    pub fn tag(&self) -> Option<&str> {
        self.tag_name.as_deref().filter(|tag| !tag.is_empty())
    }
}

/// An `owner/repo` pair on the hosting provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub owner: String,
    pub repo: String,
}

impl Project {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Project {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Web page of the project, shown to users as the upgrade location
    pub fn human_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}
