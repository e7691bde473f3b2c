use crate::error::{Result, TryReleaseError};
use std::cmp::Ordering;
use std::fmt;

/// A version string that passed semantic-version validation.
///
/// Keeps the original text (e.g. "v1.2") next to the parsed value
/// (1.2.0) so messages can echo exactly what the user or the API gave us.
#[derive(Debug, Clone)]
pub struct SemVer {
    raw: String,
    parsed: semver::Version,
}

impl SemVer {
    /// Parse a version string, accepting an optional `v`/`V` prefix and the
    /// shorthand forms `v1` and `v1.2`.
    pub fn parse(text: &str) -> Option<Self> {
        let parsed = semver::Version::parse(&normalize(text)?).ok()?;
        Some(SemVer {
            raw: text.to_string(),
            parsed,
        })
    }

    /// Check whether `text` is a well-formed semantic version.
    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_some()
    }

    /// The text this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn version(&self) -> &semver::Version {
        &self.parsed
    }

    /// Semver precedence: major, minor, patch, then pre-release.
    /// Build metadata never affects the result.
    pub fn precedence(&self, other: &SemVer) -> Ordering {
        let (a, b) = (&self.parsed, &other.parsed);
        a.major
            .cmp(&b.major)
            .then(a.minor.cmp(&b.minor))
            .then(a.patch.cmp(&b.patch))
            .then_with(|| a.pre.cmp(&b.pre))
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Rewrite `text` into full `major.minor.patch[-pre][+build]` form.
///
/// Returns `None` for shapes that can never be valid (empty, four numeric
/// components, shorthand carrying a suffix). Component contents are left for
/// the semver parser to reject.
fn normalize(text: &str) -> Option<String> {
    let body = text
        .strip_prefix('v')
        .or_else(|| text.strip_prefix('V'))
        .unwrap_or(text);
    if body.is_empty() {
        return None;
    }

    let core_end = body.find(['-', '+']).unwrap_or(body.len());
    let (core, suffix) = body.split_at(core_end);

    match core.split('.').count() {
        3 => Some(body.to_string()),
        1 if suffix.is_empty() => Some(format!("{}.0.0", core)),
        2 if suffix.is_empty() => Some(format!("{}.0", core)),
        _ => None,
    }
}

/// Compare the installed version against the latest published one.
///
/// Returns `Less` when installed is older, `Equal` when they match and
/// `Greater` when installed is newer. Both strings are validated before any
/// ordering is computed; the error names which side was rejected.
pub fn compare(installed: &str, latest: &str) -> Result<Ordering> {
    let installed = SemVer::parse(installed)
        .ok_or_else(|| TryReleaseError::invalid_semver("installed", installed))?;
    let latest = SemVer::parse(latest)
        .ok_or_else(|| TryReleaseError::invalid_semver("latest", latest))?;
    Ok(installed.precedence(&latest))
}
