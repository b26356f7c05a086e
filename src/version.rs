//! Version transition engine
//!
//! Parses a stored version string, applies a set of declarative modifiers
//! and serializes the canonical next-version string. Modifiers compose in
//! a fixed precedence regardless of the order they are supplied in, so
//! later-stage resets always see already-incremented values. The engine
//! performs exactly the modifiers it is given; incrementing `major` does
//! not implicitly reset `minor` or `patch`.

use crate::domain::prerelease::PreRelease;
use crate::domain::version::Version;
use crate::error::{CommitlogError, Result};

/// A single declarative change to a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    MajorIncrement,
    MinorIncrement,
    PatchIncrement,
    MinorReset,
    PatchReset,
    /// Replace the pre-release suffix with the given label (e.g. "beta"
    /// or "rc.1")
    Prerelease(String),
    /// Increment the pre-release counter, reading the counter from the
    /// version as originally parsed
    PrereleaseIncrement,
    /// Reset the pre-release counter to 0
    PrereleaseReset,
    /// Drop the pre-release suffix entirely
    PrereleaseClear,
}

impl Modifier {
    /// Fixed application order; lower values apply first
    fn precedence(&self) -> u8 {
        match self {
            Modifier::MajorIncrement => 0,
            Modifier::MinorIncrement => 1,
            Modifier::PatchIncrement => 2,
            Modifier::MinorReset => 3,
            Modifier::PatchReset => 4,
            Modifier::Prerelease(_) => 5,
            Modifier::PrereleaseIncrement => 6,
            Modifier::PrereleaseReset => 7,
            Modifier::PrereleaseClear => 8,
        }
    }
}

/// One version transition: the original parsed value, retained unmutated,
/// and the next value being built up by modifiers.
///
/// Pre-release increments read the counter from the original value so they
/// are unaffected by resets applied earlier in the same transition.
#[derive(Debug, Clone)]
pub struct Transition {
    original: Version,
    next: Version,
}

impl Transition {
    /// Parse a stored version string into a transition with no changes
    /// applied yet.
    pub fn parse(raw: &str) -> Result<Self> {
        let original = Version::parse(raw)?;
        let next = original.clone();
        Ok(Transition { original, next })
    }

    /// Apply a set of modifiers in fixed precedence order.
    pub fn apply(mut self, modifiers: &[Modifier]) -> Result<Self> {
        let mut ordered: Vec<&Modifier> = modifiers.iter().collect();
        ordered.sort_by_key(|m| m.precedence());

        for modifier in ordered {
            self.apply_one(modifier)?;
        }

        Ok(self)
    }

    /// The version as originally parsed
    pub fn original(&self) -> &Version {
        &self.original
    }

    /// The computed next version
    pub fn next(&self) -> &Version {
        &self.next
    }

    fn apply_one(&mut self, modifier: &Modifier) -> Result<()> {
        match modifier {
            Modifier::MajorIncrement => self.next.major += 1,
            Modifier::MinorIncrement => self.next.minor += 1,
            Modifier::PatchIncrement => self.next.patch += 1,
            Modifier::MinorReset => self.next.minor = 0,
            Modifier::PatchReset => self.next.patch = 0,
            Modifier::Prerelease(label) => {
                self.next.prerelease = Some(PreRelease::parse(label)?);
            }
            Modifier::PrereleaseIncrement => {
                let suffix = self.current_prerelease("increment")?;
                let counter = self
                    .original
                    .prerelease
                    .as_ref()
                    .map(|pre| pre.counter() + 1)
                    .unwrap_or(1);
                self.next.prerelease = Some(suffix.with_counter(counter));
            }
            Modifier::PrereleaseReset => {
                let suffix = self.current_prerelease("reset")?;
                self.next.prerelease = Some(suffix.with_counter(0));
            }
            Modifier::PrereleaseClear => self.next.prerelease = None,
        }
        Ok(())
    }

    /// The pre-release suffix a counter modifier should operate on: a
    /// suffix already set on `next` wins over the original's.
    fn current_prerelease(&self, operation: &str) -> Result<PreRelease> {
        self.next
            .prerelease
            .clone()
            .or_else(|| self.original.prerelease.clone())
            .ok_or_else(|| {
                CommitlogError::invalid_version(format!(
                    "cannot {} pre-release counter of '{}': no pre-release suffix",
                    operation, self.original
                ))
            })
    }
}
