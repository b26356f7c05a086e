//! Core value types shared across the walker, classifier and version engine.

pub mod commit;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use commit::CommitRecord;
pub use prerelease::{PreRelease, PreReleaseType};
pub use tag::{TagInfo, TagPair};
pub use version::Version;
