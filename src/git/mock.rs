use crate::domain::{CommitRecord, TagInfo};
use crate::error::{CommitlogError, Result};
use crate::git::Repository;
use git2::Oid;

/// Mock repository with a scripted linear history, for testing the walker
/// without touching disk.
///
/// Commits are appended oldest-first; the most recently added commit is
/// HEAD. Revision expressions resolve against full hashes and tag names.
pub struct MockRepository {
    /// Oldest-first linear history
    commits: Vec<CommitRecord>,
    tags: Vec<TagInfo>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Append a commit to the history; it becomes the new HEAD
    pub fn add_commit(&mut self, id: Oid, message: impl Into<String>, timestamp: i64) {
        self.commits.push(CommitRecord::new(id, message, timestamp));
    }

    /// Add a tag pointing at an existing commit
    pub fn add_tag(&mut self, name: impl Into<String>, target: Oid) {
        let committed_at = self
            .commits
            .iter()
            .find(|c| c.id == target)
            .map(|c| c.timestamp)
            .unwrap_or(0);
        self.tags.push(TagInfo::new(name, target, committed_at));
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        self.commits
            .last()
            .map(|c| c.id)
            .ok_or_else(|| CommitlogError::no_history("mock repository has no commits"))
    }

    fn resolve_revision(&self, expr: &str) -> Result<Oid> {
        if let Some(tag) = self.tags.iter().find(|t| t.name == expr) {
            return Ok(tag.target);
        }

        self.commits
            .iter()
            .find(|c| c.id.to_string() == expr)
            .map(|c| c.id)
            .ok_or_else(|| CommitlogError::revision_not_found(format!("'{}'", expr)))
    }

    fn commits_from(
        &self,
        start: Oid,
    ) -> Result<Box<dyn Iterator<Item = Result<CommitRecord>> + '_>> {
        let position = self
            .commits
            .iter()
            .position(|c| c.id == start)
            .ok_or_else(|| CommitlogError::revision_not_found(format!("'{}'", start)))?;

        // Newest-first from the starting commit down to the root
        Ok(Box::new(
            self.commits[..=position].iter().rev().cloned().map(Ok),
        ))
    }

    fn list_tags(&self) -> Result<Vec<TagInfo>> {
        Ok(self.tags.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(n: u8) -> Oid {
        Oid::from_bytes(&[n; 20]).unwrap()
    }

    #[test]
    fn test_head_is_last_added_commit() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "first", 100);
        repo.add_commit(oid(2), "second", 200);

        assert_eq!(repo.head_oid().unwrap(), oid(2));
    }

    #[test]
    fn test_empty_repo_has_no_history() {
        let repo = MockRepository::new();
        assert!(matches!(
            repo.head_oid(),
            Err(CommitlogError::NoHistory(_))
        ));
    }

    #[test]
    fn test_commits_from_newest_first() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "first", 100);
        repo.add_commit(oid(2), "second", 200);
        repo.add_commit(oid(3), "third", 300);

        let ids: Vec<Oid> = repo
            .commits_from(oid(3))
            .unwrap()
            .map(|c| c.unwrap().id)
            .collect();
        assert_eq!(ids, vec![oid(3), oid(2), oid(1)]);
    }

    #[test]
    fn test_commits_from_mid_history() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "first", 100);
        repo.add_commit(oid(2), "second", 200);
        repo.add_commit(oid(3), "third", 300);

        let log: Vec<CommitRecord> = repo
            .commits_from(oid(2))
            .unwrap()
            .map(|c| c.unwrap())
            .collect();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].id, oid(2));
    }

    #[test]
    fn test_resolve_revision_by_tag_name() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "first", 100);
        repo.add_tag("v1.0.0", oid(1));

        assert_eq!(repo.resolve_revision("v1.0.0").unwrap(), oid(1));
    }

    #[test]
    fn test_resolve_unknown_revision_fails() {
        let repo = MockRepository::new();
        assert!(matches!(
            repo.resolve_revision("nope"),
            Err(CommitlogError::RevisionNotFound(_))
        ));
    }

    #[test]
    fn test_tag_committed_at_matches_target() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), "first", 123);
        repo.add_tag("v1.0.0", oid(1));

        let tags = repo.list_tags().unwrap();
        assert_eq!(tags[0].committed_at, 123);
    }
}
