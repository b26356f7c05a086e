use crate::domain::prerelease::PreRelease;
use crate::error::{CommitlogError, Result};
use std::fmt;

/// Semantic version with an optional pre-release suffix.
///
/// Whether the source string carried a leading `v` is recorded so that
/// serialization is symmetric with the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<PreRelease>,
    pub v_prefix: bool,
}

impl Version {
    /// Create a plain version without prefix or pre-release suffix
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: None,
            v_prefix: false,
        }
    }

    /// Parse a version of the form `[v]MAJOR.MINOR.PATCH[-PRERELEASE]`.
    ///
    /// The bare string is validated with the `semver` crate before being
    /// broken down into components.
    ///
    /// # Returns
    /// * `Ok(Version)` - Parsed version
    /// * `Err(CommitlogError::InvalidVersion)` - If the string is not a
    ///   syntactically valid semantic version
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let v_prefix = trimmed.starts_with('v');
        let bare = if v_prefix { &trimmed[1..] } else { trimmed };

        let parsed = semver::Version::parse(bare)
            .map_err(|e| CommitlogError::invalid_version(format!("'{}': {}", raw, e)))?;

        if !parsed.build.is_empty() {
            return Err(CommitlogError::invalid_version(format!(
                "'{}': build metadata is not supported",
                raw
            )));
        }

        let prerelease = if parsed.pre.is_empty() {
            None
        } else {
            Some(PreRelease::parse(parsed.pre.as_str())?)
        };

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            prerelease,
            v_prefix,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.v_prefix {
            write!(f, "v")?;
        }
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}
