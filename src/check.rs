//! Online update check
//!
//! Composes a [ReleaseSource] lookup with the version comparison so the CLI
//! only has to render the outcome.

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::{compare, Project};
use crate::error::Result;
use crate::release::ReleaseSource;

/// Outcome of comparing the installed build against the latest release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Installed version equals the latest release
    UpToDate { installed: String, latest: String },
    /// A newer release is published at `url`
    Outdated {
        installed: String,
        latest: String,
        url: String,
    },
    /// Installed version is ahead of the latest release (unexpected)
    Newer { installed: String, latest: String },
}

impl UpdateStatus {
    fn from_ordering(ordering: Ordering, installed: &str, latest: String, url: String) -> Self {
        let installed = installed.to_string();
        match ordering {
            Ordering::Equal => UpdateStatus::UpToDate { installed, latest },
            Ordering::Less => UpdateStatus::Outdated {
                installed,
                latest,
                url,
            },
            Ordering::Greater => UpdateStatus::Newer { installed, latest },
        }
    }

    pub fn is_outdated(&self) -> bool {
        matches!(self, UpdateStatus::Outdated { .. })
    }
}

/// Fetch the latest release of `project` and compare it with `installed`.
///
/// # Returns
/// * `Ok(UpdateStatus)` - The comparison outcome
/// * `Err` - Any fetch error, or an invalid semver on either side
pub fn check_for_update<S: ReleaseSource + ?Sized>(
    source: &S,
    project: &Project,
    installed: &str,
) -> Result<UpdateStatus> {
    let latest = source.latest_tag(&project.owner, &project.repo)?;
    let ordering = compare(installed, &latest)?;
    debug!(installed, %latest, ?ordering, "compared versions");

    Ok(UpdateStatus::from_ordering(
        ordering,
        installed,
        latest,
        project.human_url(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TryReleaseError;
    use crate::release::MockReleaseSource;

    fn project() -> Project {
        Project::new("marco-m", "tryrelease")
    }

    #[test]
    fn test_up_to_date() {
        let source = MockReleaseSource::new().with_release("marco-m", "tryrelease", "v0.0.9");
        let status = check_for_update(&source, &project(), "v0.0.9").unwrap();
        assert_eq!(
            status,
            UpdateStatus::UpToDate {
                installed: "v0.0.9".to_string(),
                latest: "v0.0.9".to_string(),
            }
        );
    }

    #[test]
    fn test_outdated_carries_url() {
        let source = MockReleaseSource::new().with_release("marco-m", "tryrelease", "v0.1.0");
        let status = check_for_update(&source, &project(), "v0.0.9").unwrap();
        assert!(status.is_outdated());
        assert_eq!(
            status,
            UpdateStatus::Outdated {
                installed: "v0.0.9".to_string(),
                latest: "v0.1.0".to_string(),
                url: "https://github.com/marco-m/tryrelease".to_string(),
            }
        );
    }

    #[test]
    fn test_newer() {
        let source = MockReleaseSource::new().with_release("marco-m", "tryrelease", "v0.0.8");
        let status = check_for_update(&source, &project(), "v0.0.9").unwrap();
        assert!(matches!(status, UpdateStatus::Newer { .. }));
    }

    #[test]
    fn test_invalid_fetched_tag() {
        let source = MockReleaseSource::new().with_release("marco-m", "tryrelease", "latest");
        let err = check_for_update(&source, &project(), "v0.0.9").unwrap_err();
        assert_eq!(err.to_string(), "latest version is not a valid semver: latest");
    }

    #[test]
    fn test_invalid_installed_version() {
        let source = MockReleaseSource::new().with_release("marco-m", "tryrelease", "v1.0.0");
        let err = check_for_update(&source, &project(), "unknown").unwrap_err();
        assert!(matches!(
            err,
            TryReleaseError::InvalidSemver {
                which: "installed",
                ..
            }
        ));
    }

    #[test]
    fn test_fetch_errors_propagate() {
        let source = MockReleaseSource::new();
        let err = check_for_update(&source, &project(), "v0.0.9").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_works_through_trait_object() {
        let source: Box<dyn ReleaseSource> =
            Box::new(MockReleaseSource::new().with_release("marco-m", "tryrelease", "v2.0.0"));
        let status = check_for_update(source.as_ref(), &project(), "v1.0.0").unwrap();
        assert!(status.is_outdated());
    }
}
