use git2::Oid;

/// Immutable record of a single commit, produced by the range walker.
///
/// The `is_tag` flag marks commits that are the target of at least one tag
/// reference; it is filled in by the walker from the tag set resolved for
/// the current invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full object id of the commit
    pub id: Oid,
    /// Complete commit message (summary plus body)
    pub message: String,
    /// Committer timestamp, seconds since epoch
    pub timestamp: i64,
    /// Whether a tag points at this commit
    pub is_tag: bool,
}

impl CommitRecord {
    /// Create a new commit record
    pub fn new(id: Oid, message: impl Into<String>, timestamp: i64) -> Self {
        CommitRecord {
            id,
            message: message.into(),
            timestamp,
            is_tag: false,
        }
    }

    /// First line of the commit message, without the body
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
