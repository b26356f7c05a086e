//! Commit range walker
//!
//! Determines the bounded, newest-first sequence of commits that belong in
//! a changelog. Termination precedence:
//!
//! 1. An explicit end revision stops the walk as soon as it is reached; the
//!    end commit itself is excluded.
//! 2. Otherwise the walk stops at the nearest tag boundary: the latest
//!    tag's target commit, or the previous tag's target when the walk
//!    starts exactly on the latest tag. The boundary commit is excluded.
//! 3. Without an applicable end or tag, the entire history is returned.
//!
//! The tag pair is resolved once per walk and passed around as a value;
//! nothing here caches state across invocations.

use crate::domain::{CommitRecord, TagPair};
use crate::error::Result;
use crate::git::Repository;
use git2::Oid;
use std::collections::HashSet;

/// Collect the commit range for a changelog.
///
/// `start_ref` replaces HEAD as the walk's starting point; `end_ref` stops
/// the walk exclusively. Empty strings are treated the same as absent
/// references.
///
/// # Returns
/// * `Ok(Vec<CommitRecord>)` - Bounded range, newest first
/// * `Err(NoHistory)` - If the repository has no commits
/// * `Err(RevisionNotFound)` - If a supplied reference does not resolve
/// * `Err(TagResolution)` - If tag enumeration fails
pub fn collect_commits(
    repo: &dyn Repository,
    start_ref: Option<&str>,
    end_ref: Option<&str>,
) -> Result<Vec<CommitRecord>> {
    let head = repo.head_oid()?;

    let start = match start_ref.filter(|s| !s.is_empty()) {
        Some(expr) => repo.resolve_revision(expr)?,
        None => head,
    };

    let end = end_ref
        .filter(|s| !s.is_empty())
        .map(|expr| repo.resolve_revision(expr))
        .transpose()?;

    // Resolved once per invocation; the backing history is assumed
    // immutable for the duration of one walk.
    let tags = repo.list_tags()?;
    let tag_targets: HashSet<Oid> = tags.iter().map(|t| t.target).collect();

    let boundary = if end.is_none() {
        TagPair::from_tags(tags).boundary_for(start)
    } else {
        None
    };

    let stop = end.or(boundary);

    let mut records = Vec::new();

    // The log is lazy; breaking here stops resolution at the boundary.
    for record in repo.commits_from(start)? {
        let mut record = record?;
        if Some(record.id) == stop {
            break;
        }
        record.is_tag = tag_targets.contains(&record.id);
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagInfo;
    use crate::error::CommitlogError;
    use crate::git::MockRepository;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn oid(n: u8) -> Oid {
        Oid::from_bytes(&[n; 20]).unwrap()
    }

    /// Counts how many commits the walker actually pulls from the log.
    struct MeteredRepository {
        inner: MockRepository,
        pulled: AtomicUsize,
    }

    impl Repository for MeteredRepository {
        fn head_oid(&self) -> Result<Oid> {
            self.inner.head_oid()
        }

        fn resolve_revision(&self, expr: &str) -> Result<Oid> {
            self.inner.resolve_revision(expr)
        }

        fn commits_from(
            &self,
            start: Oid,
        ) -> Result<Box<dyn Iterator<Item = Result<CommitRecord>> + '_>> {
            let commits = self.inner.commits_from(start)?;
            Ok(Box::new(commits.inspect(|_| {
                self.pulled.fetch_add(1, Ordering::Relaxed);
            })))
        }

        fn list_tags(&self) -> Result<Vec<TagInfo>> {
            self.inner.list_tags()
        }
    }

    fn linear_repo(count: u8) -> MockRepository {
        let mut repo = MockRepository::new();
        for n in 1..=count {
            repo.add_commit(oid(n), format!("commit {}", n), i64::from(n) * 100);
        }
        repo
    }

    #[test]
    fn test_no_tags_walks_entire_history() {
        let repo = linear_repo(5);

        let records = collect_commits(&repo, None, None).unwrap();
        let ids: Vec<Oid> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![oid(5), oid(4), oid(3), oid(2), oid(1)]);
    }

    #[test]
    fn test_stops_before_latest_tag() {
        // c1..c5 with a tag on c4; HEAD at c5. Only c5 is newer than the tag.
        let mut repo = linear_repo(5);
        repo.add_tag("0.0.0", oid(4));

        let records = collect_commits(&repo, None, None).unwrap();
        let ids: Vec<Oid> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![oid(5)]);
    }

    #[test]
    fn test_head_at_latest_tag_uses_previous_boundary() {
        let mut repo = linear_repo(5);
        repo.add_tag("v0.1.0", oid(2));
        repo.add_tag("v0.2.0", oid(5));

        let records = collect_commits(&repo, None, None).unwrap();
        let ids: Vec<Oid> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![oid(5), oid(4), oid(3)]);
    }

    #[test]
    fn test_head_at_only_tag_walks_entire_history() {
        let mut repo = linear_repo(3);
        repo.add_tag("v0.1.0", oid(3));

        let records = collect_commits(&repo, None, None).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_end_ref_is_exclusive() {
        let repo = linear_repo(5);

        let records = collect_commits(&repo, None, Some(&oid(2).to_string())).unwrap();
        let ids: Vec<Oid> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![oid(5), oid(4), oid(3)]);
    }

    #[test]
    fn test_end_ref_overrides_tag_boundary() {
        let mut repo = linear_repo(5);
        repo.add_tag("v1.0.0", oid(4));

        // The explicit end wins over the tag on c4
        let records = collect_commits(&repo, None, Some(&oid(2).to_string())).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_start_ref_moves_walk_start() {
        let repo = linear_repo(5);

        let records = collect_commits(&repo, Some(&oid(3).to_string()), None).unwrap();
        let ids: Vec<Oid> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![oid(3), oid(2), oid(1)]);
    }

    #[test]
    fn test_start_at_latest_tag_shifts_boundary() {
        let mut repo = linear_repo(5);
        repo.add_tag("v0.1.0", oid(1));
        repo.add_tag("v0.2.0", oid(4));

        // Walk starts exactly on the latest tag, so the previous one bounds it
        let records = collect_commits(&repo, Some("v0.2.0"), None).unwrap();
        let ids: Vec<Oid> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![oid(4), oid(3), oid(2)]);
    }

    #[test]
    fn test_empty_refs_are_treated_as_absent() {
        let repo = linear_repo(2);

        let records = collect_commits(&repo, Some(""), Some("")).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_tagged_commits_are_marked() {
        let mut repo = linear_repo(4);
        repo.add_tag("v0.1.0", oid(2));

        let records = collect_commits(&repo, None, Some(&oid(1).to_string())).unwrap();
        let tagged: Vec<bool> = records.iter().map(|r| r.is_tag).collect();
        assert_eq!(tagged, vec![false, false, true]);
    }

    #[test]
    fn test_unresolvable_start_ref_fails() {
        let repo = linear_repo(2);

        let err = collect_commits(&repo, Some("no-such-ref"), None).unwrap_err();
        assert!(matches!(err, CommitlogError::RevisionNotFound(_)));
    }

    #[test]
    fn test_unresolvable_end_ref_fails() {
        let repo = linear_repo(2);

        let err = collect_commits(&repo, None, Some("no-such-ref")).unwrap_err();
        assert!(matches!(err, CommitlogError::RevisionNotFound(_)));
    }

    #[test]
    fn test_walk_resolves_only_the_bounded_range() {
        let mut inner = linear_repo(50);
        inner.add_tag("v1.0.0", oid(48));
        let repo = MeteredRepository {
            inner,
            pulled: AtomicUsize::new(0),
        };

        let records = collect_commits(&repo, None, None).unwrap();
        assert_eq!(records.len(), 2);
        // c50, c49, then the boundary commit itself; nothing older is
        // resolved
        assert_eq!(repo.pulled.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_empty_repository_fails_with_no_history() {
        let repo = MockRepository::new();

        let err = collect_commits(&repo, None, None).unwrap_err();
        assert!(matches!(err, CommitlogError::NoHistory(_)));
    }
}
