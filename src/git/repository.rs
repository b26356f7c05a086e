use crate::domain::{CommitRecord, TagInfo};
use crate::error::{CommitlogError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository implementing the [super::Repository] trait
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository at or above `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn head_oid(&self) -> Result<Oid> {
        let head = self
            .repo
            .head()
            .map_err(|e| CommitlogError::no_history(format!("cannot read HEAD: {}", e)))?;

        head.target()
            .ok_or_else(|| CommitlogError::no_history("HEAD does not point at a commit"))
    }

    fn resolve_revision(&self, expr: &str) -> Result<Oid> {
        let object = self
            .repo
            .revparse_single(expr)
            .map_err(|e| CommitlogError::revision_not_found(format!("'{}': {}", expr, e)))?;

        let commit = object
            .peel_to_commit()
            .map_err(|e| CommitlogError::revision_not_found(format!("'{}': {}", expr, e)))?;

        Ok(commit.id())
    }

    fn commits_from(
        &self,
        start: Oid,
    ) -> Result<Box<dyn Iterator<Item = Result<CommitRecord>> + '_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(start)?;

        // Each commit is looked up as the revwalk is advanced, so callers
        // that stop early never load the rest of the history.
        Ok(Box::new(revwalk.map(move |oid_result| {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            Ok(CommitRecord::new(
                oid,
                commit.message().unwrap_or(""),
                commit.time().seconds(),
            ))
        })))
    }

    fn list_tags(&self) -> Result<Vec<TagInfo>> {
        let names = self
            .repo
            .tag_names(None)
            .map_err(|e| CommitlogError::tag_resolution(format!("cannot list tags: {}", e)))?;

        let mut tags = Vec::new();

        for name in names.iter().flatten() {
            let reference = self
                .repo
                .find_reference(&format!("refs/tags/{}", name))
                .map_err(|e| {
                    CommitlogError::tag_resolution(format!("cannot resolve tag '{}': {}", name, e))
                })?;

            // peel_to_commit handles both lightweight and annotated tags
            let commit = reference.peel_to_commit().map_err(|e| {
                CommitlogError::tag_resolution(format!(
                    "tag '{}' does not point at a commit: {}",
                    name, e
                ))
            })?;

            tags.push(TagInfo::new(name, commit.id(), commit.time().seconds()));
        }

        Ok(tags)
    }
}

// SAFETY: Git2Repository is only used for read operations, which libgit2
// performs in a thread-safe manner.
unsafe impl Sync for Git2Repository {}
