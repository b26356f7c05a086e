//! Commit message classification
//!
//! Extracts the leading prefix token of a commit message (optionally with a
//! parenthesized scope, e.g. `feat(ui): ...`) and maps it onto a fixed
//! category set. Matching is anchored at the start of the message and
//! case-sensitive; the scoped form is preferred over the bare form when
//! both could apply.

use regex::Regex;
use std::sync::OnceLock;

/// Prefix keys recognized by the classifier
pub const SUPPORTED_KEYS: &str = "ci|refactor|docs|fix|feat|feature|test|chore";

/// Changelog category
///
/// The declaration order is the rendering order, except `Unclassified`
/// which only appears when classification is skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Feature,
    Fix,
    Refactor,
    Ci,
    Docs,
    Chore,
    Test,
    Other,
    Unclassified,
}

impl Category {
    /// Categories rendered in normal (non-skip) mode, in display order
    pub const DISPLAY_ORDER: [Category; 8] = [
        Category::Feature,
        Category::Fix,
        Category::Refactor,
        Category::Ci,
        Category::Docs,
        Category::Chore,
        Category::Test,
        Category::Other,
    ];

    /// Map a recognized prefix key onto its category; anything else is Other
    pub fn from_key(key: &str) -> Category {
        match key {
            "ci" => Category::Ci,
            "fix" => Category::Fix,
            "refactor" => Category::Refactor,
            "feat" | "feature" => Category::Feature,
            "docs" => Category::Docs,
            "test" => Category::Test,
            "chore" => Category::Chore,
            _ => Category::Other,
        }
    }

    /// Markdown heading title
    pub fn title(self) -> &'static str {
        match self {
            Category::Feature => "Features",
            Category::Fix => "Fixes",
            Category::Refactor => "Performance",
            Category::Ci => "CI",
            Category::Docs => "Docs",
            Category::Chore => "Chores",
            Category::Test => "Tests",
            Category::Other => "Other Changes",
            Category::Unclassified => "Unclassified Changes",
        }
    }

    /// Whether an inclusion flag selects this category
    pub fn matches_inclusion(self, flag: &str) -> bool {
        match self {
            Category::Feature => flag == "feat" || flag == "feature",
            Category::Ci => flag == "ci",
            Category::Fix => flag == "fix",
            Category::Refactor => flag == "refactor",
            Category::Docs => flag == "docs",
            Category::Chore => flag == "chore",
            Category::Test => flag == "test",
            Category::Other => flag == "other",
            Category::Unclassified => true,
        }
    }
}

/// A recognized prefix match in a commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedKey {
    /// The bare key, without scope or colon (e.g. "feat")
    pub key: String,
    /// The full matched token, including scope and colon (e.g. "feat(ui):")
    pub prefix: String,
}

fn key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // The optional scope group makes the scoped form win deterministically
        // whenever it is present.
        Regex::new(&format!(r"^({})(\([^)]*\))?:", SUPPORTED_KEYS))
            .expect("supported-key pattern is valid")
    })
}

/// Find the recognized prefix key at the start of a commit message.
///
/// Returns `None` when the message does not begin with a recognized key,
/// in which case the commit classifies as [Category::Other].
pub fn find_key(message: &str) -> Option<MatchedKey> {
    key_regex().captures(message).map(|captures| MatchedKey {
        key: captures[1].to_string(),
        prefix: captures[0].to_string(),
    })
}

/// Reduce a commit summary line to its rendered form: the matched prefix
/// (including any scope) stripped, surrounding whitespace trimmed.
pub fn normalize_summary(summary: &str, matched: Option<&MatchedKey>) -> String {
    let stripped = match matched {
        Some(m) => summary.strip_prefix(m.prefix.as_str()).unwrap_or(summary),
        None => summary,
    };

    stripped.trim().to_string()
}
