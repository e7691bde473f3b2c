//! Release lookup abstraction layer
//!
//! The [ReleaseSource] trait answers one question: what is the tag of the
//! latest published release of `owner/repo`? Implementations:
//!
//! - [github::GitHubReleases]: the GitHub REST API over a blocking `reqwest` client
//! - [mock::MockReleaseSource]: in-memory answers for tests
//!
//! Callers such as [crate::check::check_for_update] depend on the trait so
//! the comparison flow can be exercised without a network.

pub mod github;
pub mod mock;

pub use github::GitHubReleases;
pub use mock::MockReleaseSource;

use crate::error::Result;

/// Source of "latest release" information for a project
///
/// ## Error Handling
///
/// Implementations must keep the failure kinds distinct: a project with no
/// published release is [crate::error::TryReleaseError::NotFound], a release
/// without a usable tag is [crate::error::TryReleaseError::MissingTag].
/// The returned tag is opaque and may or may not be a valid semver.
pub trait ReleaseSource: Send + Sync {
    /// Fetch the tag of the latest release of `owner/repo`
    ///
    /// # Returns
    /// * `Ok(String)` - Non-empty tag, e.g. "v0.0.9"
    /// * `Err` - Request, transport, timeout, not-found, parse or missing-tag error
    fn latest_tag(&self, owner: &str, repo: &str) -> Result<String>;
}
