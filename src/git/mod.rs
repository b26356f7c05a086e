//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the version-control
//! collaborator, allowing for a real implementation backed by the `git2`
//! crate and a scripted mock for tests.
//!
//! The walker and changelog generation depend only on the [Repository]
//! trait, which covers exactly the read surface they need: HEAD lookup,
//! revision resolution, a newest-first commit log and tag enumeration.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{CommitRecord, TagInfo};
use crate::error::Result;
use git2::Oid;

/// Read-only repository operations consumed by the core engines.
///
/// ## Error mapping
///
/// Implementations map underlying failures to the taxonomy in
/// [crate::error::CommitlogError]: a missing or unborn HEAD is `NoHistory`,
/// an unresolvable revision expression is `RevisionNotFound`, and failures
/// while enumerating tags or resolving their targets are `TagResolution`.
pub trait Repository: Send + Sync {
    /// Object id of the commit HEAD points at
    ///
    /// # Returns
    /// * `Ok(Oid)` - HEAD commit id
    /// * `Err(NoHistory)` - If the repository has no commits
    fn head_oid(&self) -> Result<Oid>;

    /// Resolve a revision expression (hash, tag name, `HEAD~2`, ...) to a
    /// commit id
    ///
    /// # Returns
    /// * `Ok(Oid)` - Resolved commit id
    /// * `Err(RevisionNotFound)` - If the expression does not resolve
    fn resolve_revision(&self, expr: &str) -> Result<Oid>;

    /// Commit log starting at `start`, newest first, finite.
    ///
    /// The sequence is lazy: each commit is resolved as the iterator is
    /// advanced, so a caller that stops at a boundary never pays for the
    /// history behind it. Records are yielded with `is_tag` unset; the
    /// walker fills it in from the tag set of the current invocation.
    fn commits_from(&self, start: Oid)
        -> Result<Box<dyn Iterator<Item = Result<CommitRecord>> + '_>>;

    /// All tag references resolved to their target commit and its
    /// committer timestamp
    ///
    /// # Returns
    /// * `Ok(Vec<TagInfo>)` - One entry per tag, unordered
    /// * `Err(TagResolution)` - If enumeration or target lookup fails
    fn list_tags(&self) -> Result<Vec<TagInfo>>;
}
