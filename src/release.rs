//! Release computation and version-file persistence
//!
//! The current version lives in a single-line text file (by default
//! `.commitlog.release`). A release reads it, maps the requested bump
//! flags onto version-engine modifiers, and atomically overwrites the file
//! with the computed next version.

use crate::domain::version::Version;
use crate::error::Result;
use crate::version::{Modifier, Transition};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the version-counter file
pub const VERSION_FILE: &str = ".commitlog.release";

/// Handle to the version-counter file in a project directory.
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    /// Version file with the default name inside `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::at(dir.as_ref().join(VERSION_FILE))
    }

    /// Version file at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        VersionFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the file with the initial version `0.0.0`
    pub fn init(&self) -> Result<()> {
        self.write("0.0.0")
    }

    /// Read the stored version string, trimmed
    pub fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?.trim().to_string())
    }

    /// Overwrite the stored version atomically via a temp file + rename
    pub fn write(&self, version: &str) -> Result<()> {
        let tmp = self.path.with_extension("release.tmp");
        fs::write(&tmp, format!("{}\n", version))?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Requested release bumps, mapped 1:1 from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ReleaseOptions {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    pub prerelease: bool,
    /// Pre-release label to use when none is stored (e.g. "beta", "canary")
    pub prerelease_suffix: Option<String>,
}

/// Expand release options into version-engine modifiers.
///
/// Increments carry their conventional lower-field resets. A pre-release
/// composed with an increment restarts its counter at 0; on its own it
/// increments the stored counter. A plain increment clears any stored
/// pre-release suffix.
pub fn plan_modifiers(current: &Version, options: &ReleaseOptions) -> Vec<Modifier> {
    let mut modifiers = Vec::new();
    let mut incremented = false;

    if options.major {
        modifiers.push(Modifier::MajorIncrement);
        modifiers.push(Modifier::MinorReset);
        modifiers.push(Modifier::PatchReset);
        incremented = true;
    }
    if options.minor {
        modifiers.push(Modifier::MinorIncrement);
        modifiers.push(Modifier::PatchReset);
        incremented = true;
    }
    if options.patch {
        modifiers.push(Modifier::PatchIncrement);
        incremented = true;
    }

    if options.prerelease {
        if let Some(suffix) = &options.prerelease_suffix {
            modifiers.push(Modifier::Prerelease(suffix.clone()));
        } else if current.prerelease.is_none() {
            modifiers.push(Modifier::Prerelease("beta".to_string()));
        }

        if incremented {
            modifiers.push(Modifier::PrereleaseReset);
        } else {
            modifiers.push(Modifier::PrereleaseIncrement);
        }
    } else if incremented {
        modifiers.push(Modifier::PrereleaseClear);
    }

    modifiers
}

/// Result of one release run.
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    /// Stored version before the release
    pub current: String,
    /// Stored version after the release
    pub next: String,
    /// Whether the version file had to be created for this run
    pub initialized: bool,
}

/// Compute and persist the next version for a project directory.
///
/// Initializes the version file to `0.0.0` when missing (reported through
/// the outcome so the caller can message it), then applies the planned
/// modifiers and writes the result back.
pub fn run(file: &VersionFile, options: &ReleaseOptions) -> Result<ReleaseOutcome> {
    let initialized = !file.exists();
    if initialized {
        file.init()?;
    }

    let current = file.read()?;

    let transition = Transition::parse(&current)?;
    let modifiers = plan_modifiers(transition.original(), options);
    let transition = transition.apply(&modifiers)?;

    let next = transition.next().to_string();
    file.write(&next)?;

    Ok(ReleaseOutcome {
        current,
        next,
        initialized,
    })
}
