//! Category buckets and markdown rendering
//!
//! Every walked commit lands in exactly one bucket: its natural category,
//! `Other` when no prefix matches, or `Unclassified` when classification is
//! skipped entirely. Excluded categories still accumulate commits so the
//! classification result stays total, but they are omitted from output.

use crate::classifier::{self, Category};
use crate::domain::CommitRecord;
use std::collections::BTreeMap;

/// Commit lines accumulated for one category
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    /// Whether this category may appear in rendered output
    pub include: bool,
    commits: Vec<String>,
}

/// Classification result: mapping from category to its commit lines,
/// plus the rendering mode.
#[derive(Debug, Clone)]
pub struct Changelog {
    buckets: BTreeMap<Category, Bucket>,
    skip_classification: bool,
}

impl Changelog {
    /// Create an empty changelog.
    ///
    /// `inclusions` is a list of category keys joined by `|` or `,`; only
    /// listed categories are rendered in normal mode. The catch-all bucket
    /// is always included.
    pub fn new(inclusions: &str, skip_classification: bool) -> Self {
        let flags: Vec<&str> = inclusions
            .split(['|', ','])
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();

        let mut buckets = BTreeMap::new();

        for category in Category::DISPLAY_ORDER {
            buckets.insert(
                category,
                Bucket {
                    include: flags.iter().any(|f| category.matches_inclusion(f)),
                    commits: Vec::new(),
                },
            );
        }
        buckets.insert(
            Category::Unclassified,
            Bucket {
                include: true,
                commits: Vec::new(),
            },
        );

        Changelog {
            buckets,
            skip_classification,
        }
    }

    /// Classify a commit record and append its rendered line.
    ///
    /// Insertion order reflects walk order, newest first.
    pub fn add(&mut self, record: &CommitRecord) {
        let summary = record.summary();
        let matched = classifier::find_key(summary);
        let line = format!(
            "{} - {}",
            record.id,
            classifier::normalize_summary(summary, matched.as_ref())
        );

        let category = if self.skip_classification {
            Category::Unclassified
        } else {
            matched
                .map(|m| Category::from_key(&m.key))
                .unwrap_or(Category::Other)
        };

        if let Some(bucket) = self.buckets.get_mut(&category) {
            bucket.commits.push(line);
        }
    }

    /// Rendered lines collected for a category
    pub fn lines(&self, category: Category) -> &[String] {
        self.buckets
            .get(&category)
            .map(|b| b.commits.as_slice())
            .unwrap_or(&[])
    }

    /// Render the grouped markdown output.
    ///
    /// Normal mode emits one `##` heading per non-empty included category
    /// in display order. Skip mode emits a single catch-all heading with
    /// every commit line in walk order.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();

        if self.skip_classification {
            self.render_category(&mut out, Category::Unclassified);
        } else {
            for category in Category::DISPLAY_ORDER {
                self.render_category(&mut out, category);
            }
        }

        out
    }

    fn render_category(&self, out: &mut String, category: Category) {
        let bucket = match self.buckets.get(&category) {
            Some(bucket) if bucket.include && !bucket.commits.is_empty() => bucket,
            _ => return,
        };

        out.push_str(&format!("\n\n## {}  \n", category.title()));
        for line in &bucket.commits {
            out.push_str(line);
            out.push_str("  \n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Oid;

    fn oid(n: u8) -> Oid {
        Oid::from_bytes(&[n; 20]).unwrap()
    }

    fn record(n: u8, message: &str) -> CommitRecord {
        CommitRecord::new(oid(n), message, i64::from(n))
    }

    const ALL: &str = "ci|refactor|docs|fix|feat|feature|test|chore|other";

    #[test]
    fn test_commit_lines_carry_full_hash() {
        let mut log = Changelog::new(ALL, false);
        let rec = record(1, "fix: a bug");
        log.add(&rec);

        let lines = log.lines(Category::Fix);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], format!("{} - a bug", rec.id));
    }

    #[test]
    fn test_unmatched_message_goes_to_other() {
        let mut log = Changelog::new(ALL, false);
        log.add(&record(1, "update readme"));

        assert_eq!(log.lines(Category::Other).len(), 1);
        assert!(log.lines(Category::Other)[0].ends_with("update readme"));
    }

    #[test]
    fn test_body_is_dropped_from_rendered_line() {
        let mut log = Changelog::new(ALL, false);
        let rec = record(1, "fix: a bug\n\nlong body here");
        log.add(&rec);

        assert_eq!(log.lines(Category::Fix)[0], format!("{} - a bug", rec.id));
    }

    #[test]
    fn test_scope_is_stripped_from_rendered_line() {
        let mut log = Changelog::new(ALL, false);
        log.add(&record(1, "feat(auth): add login"));

        assert!(log.lines(Category::Feature)[0].ends_with(" - add login"));
    }

    #[test]
    fn test_only_included_headings_rendered() {
        let mut log = Changelog::new("feat", false);
        log.add(&record(1, "feat: add login"));
        log.add(&record(2, "fix: broken thing"));
        log.add(&record(3, "docs: typo"));

        let markdown = log.to_markdown();
        assert!(markdown.contains("## Features"));
        assert!(!markdown.contains("## Fixes"));
        assert!(!markdown.contains("## Docs"));
        // Excluded commits are dropped from output entirely
        assert!(!markdown.contains("broken thing"));
    }

    #[test]
    fn test_excluded_commits_stay_in_result_mapping() {
        let mut log = Changelog::new("feat", false);
        log.add(&record(1, "fix: broken thing"));

        // Not rendered, but still classified
        assert_eq!(log.lines(Category::Fix).len(), 1);
        assert!(log.to_markdown().is_empty());
    }

    #[test]
    fn test_skip_mode_single_catchall_heading() {
        let mut log = Changelog::new("feat", true);
        let recs = [
            record(1, "feat: one"),
            record(2, "fix: two"),
            record(3, "unmatched three"),
        ];
        for rec in &recs {
            log.add(rec);
        }

        let markdown = log.to_markdown();
        let headings = markdown.matches("## ").count();
        assert_eq!(headings, 1);
        assert!(markdown.contains("## Unclassified Changes"));
        for rec in &recs {
            assert!(markdown.contains(&rec.id.to_string()));
        }
    }

    #[test]
    fn test_skip_mode_preserves_walk_order() {
        let mut log = Changelog::new(ALL, true);
        log.add(&record(3, "fix: newest"));
        log.add(&record(2, "feat: middle"));
        log.add(&record(1, "docs: oldest"));

        let lines = log.lines(Category::Unclassified);
        assert!(lines[0].ends_with("newest"));
        assert!(lines[2].ends_with("oldest"));
    }

    #[test]
    fn test_display_order_of_headings() {
        let mut log = Changelog::new(ALL, false);
        log.add(&record(1, "chore: tidy"));
        log.add(&record(2, "fix: bug"));
        log.add(&record(3, "feat: thing"));
        log.add(&record(4, "refactor: speed"));

        let markdown = log.to_markdown();
        let features = markdown.find("## Features").unwrap();
        let fixes = markdown.find("## Fixes").unwrap();
        let performance = markdown.find("## Performance").unwrap();
        let chores = markdown.find("## Chores").unwrap();
        assert!(features < fixes && fixes < performance && performance < chores);
    }

    #[test]
    fn test_refactor_renders_as_performance() {
        let mut log = Changelog::new(ALL, false);
        log.add(&record(1, "refactor: tighten loop"));

        assert!(log.to_markdown().contains("## Performance"));
    }

    #[test]
    fn test_empty_categories_emit_no_heading() {
        let log = Changelog::new(ALL, false);
        assert_eq!(log.to_markdown(), "");
    }

    #[test]
    fn test_comma_separated_inclusions() {
        let mut log = Changelog::new("feat,fix", false);
        log.add(&record(1, "feat: one"));
        log.add(&record(2, "fix: two"));
        log.add(&record(3, "docs: three"));

        let markdown = log.to_markdown();
        assert!(markdown.contains("## Features"));
        assert!(markdown.contains("## Fixes"));
        assert!(!markdown.contains("## Docs"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let build = || {
            let mut log = Changelog::new(ALL, false);
            log.add(&record(1, "feat: one"));
            log.add(&record(2, "fix: two"));
            log.to_markdown()
        };

        assert_eq!(build(), build());
    }
}
