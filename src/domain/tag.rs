use git2::Oid;

/// A tag reference resolved to its target commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    pub name: String,
    /// Object id of the commit the tag points at (annotated tags peeled)
    pub target: Oid,
    /// Committer timestamp of the target commit, seconds since epoch
    pub committed_at: i64,
}

impl TagInfo {
    pub fn new(name: impl Into<String>, target: Oid, committed_at: i64) -> Self {
        TagInfo {
            name: name.into(),
            target,
            committed_at,
        }
    }
}

/// The two most recently *committed* tags in a repository.
///
/// Recency is decided by the committer timestamp of the target commit, not
/// by tag name. Either side may be absent. The pair is resolved once per
/// walk and passed in as a value; it is never cached across invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPair {
    pub latest: Option<TagInfo>,
    pub previous: Option<TagInfo>,
}

impl TagPair {
    /// Pick the latest and second-latest tags from an unordered tag list.
    ///
    /// Ties on timestamp fall back to tag name so repeated resolution over
    /// the same repository state is deterministic.
    pub fn from_tags(mut tags: Vec<TagInfo>) -> Self {
        tags.sort_by(|a, b| {
            b.committed_at
                .cmp(&a.committed_at)
                .then_with(|| a.name.cmp(&b.name))
        });

        let mut iter = tags.into_iter();
        TagPair {
            latest: iter.next(),
            previous: iter.next(),
        }
    }

    /// Determine the stop commit for a walk beginning at `walk_start`.
    ///
    /// The boundary is the latest tag's target, unless the walk starts
    /// exactly on that tag, in which case it shifts to the previous tag.
    /// Returns `None` when no applicable tag exists, meaning the walk
    /// consumes the entire history.
    pub fn boundary_for(&self, walk_start: Oid) -> Option<Oid> {
        match &self.latest {
            Some(latest) if latest.target != walk_start => Some(latest.target),
            Some(_) => self.previous.as_ref().map(|previous| previous.target),
            None => None,
        }
    }
}
