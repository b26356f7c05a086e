//! Pre-release suffix handling for semantic versioning
//!
//! Supports pre-release identifiers (alpha, beta, rc, and custom) with an
//! optional numeric counter, i.e. the `-label.N` portion of a version.
//! According to semver.org: https://semver.org/#spec-item-9

use crate::error::{CommitlogError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release identifier type (alpha, beta, rc, or custom)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreReleaseType {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
    /// Custom pre-release identifier, preserved verbatim
    Custom(String),
}

impl PreReleaseType {
    /// Parse a pre-release type from a string
    ///
    /// Matching is case-sensitive so that custom labels round-trip exactly.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for PreReleaseType {
    type Err = CommitlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(PreReleaseType::Alpha),
            "beta" => Ok(PreReleaseType::Beta),
            "rc" => Ok(PreReleaseType::ReleaseCandidate),
            other => {
                if !other.is_empty() && other.chars().all(|c| c.is_alphanumeric() || c == '-') {
                    Ok(PreReleaseType::Custom(other.to_string()))
                } else {
                    Err(CommitlogError::invalid_version(format!(
                        "Invalid pre-release identifier: '{}'",
                        s
                    )))
                }
            }
        }
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseType::Alpha => write!(f, "alpha"),
            PreReleaseType::Beta => write!(f, "beta"),
            PreReleaseType::ReleaseCandidate => write!(f, "rc"),
            PreReleaseType::Custom(s) => write!(f, "{}", s),
        }
    }
}

/// Pre-release suffix with an optional numeric counter
///
/// Represents suffixes like "beta.1" or "alpha"
///
/// # Examples
/// - "alpha" -> PreRelease { identifier: Alpha, iteration: None }
/// - "beta.1" -> PreRelease { identifier: Beta, iteration: Some(1) }
/// - "rc.3" -> PreRelease { identifier: ReleaseCandidate, iteration: Some(3) }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    /// The pre-release identifier (alpha, beta, rc, or custom)
    pub identifier: PreReleaseType,
    /// Optional numeric counter (incremented per release cycle)
    pub iteration: Option<u64>,
}

impl PreRelease {
    /// Create a new pre-release suffix
    pub fn new(identifier: PreReleaseType, iteration: Option<u64>) -> Self {
        PreRelease {
            identifier,
            iteration,
        }
    }

    /// Parse a pre-release suffix from a string
    ///
    /// Accepts formats like "beta", "beta.1", "rc.2", or "custom-id.5"
    ///
    /// # Returns
    /// * `Ok(PreRelease)` - Parsed pre-release suffix
    /// * `Err` - If format is invalid
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(CommitlogError::invalid_version(
                "Empty pre-release identifier",
            ));
        }

        let mut parts = s.splitn(2, '.');

        let identifier = PreReleaseType::parse(parts.next().unwrap_or_default())?;

        let iteration = match parts.next() {
            Some(counter) => Some(counter.parse::<u64>().map_err(|_| {
                CommitlogError::invalid_version(format!(
                    "Invalid pre-release counter: '{}'",
                    counter
                ))
            })?),
            None => None,
        };

        Ok(PreRelease {
            identifier,
            iteration,
        })
    }

    /// Counter value with absent counters treated as zero
    pub fn counter(&self) -> u64 {
        self.iteration.unwrap_or(0)
    }

    /// Copy of this suffix with the counter replaced
    pub fn with_counter(&self, counter: u64) -> Self {
        PreRelease {
            identifier: self.identifier.clone(),
            iteration: Some(counter),
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(iter) = self.iteration {
            write!(f, ".{}", iter)?;
        }
        Ok(())
    }
}
