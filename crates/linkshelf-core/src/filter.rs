//! Bookmark listing filter.
//!
//! A listing takes two optional constraints:
//!
//! - `tag`: the bookmark's `tags` string must contain it.
//! - `query`: the bookmark's `title` or `url` must contain it.
//!
//! Both are plain, case-sensitive substring tests. There is no tokenization,
//! so a tag of `web` also matches a stored `webdev`. When both are set a
//! bookmark must satisfy both. An empty string is the same as no constraint.
//!
//! [`BookmarkFilter::matches`] is the reference predicate. SQL backends
//! express the same rule as `LIKE '%value%'` clauses with wildcards escaped.

use crate::models::Bookmark;

/// Optional tag and free-text constraints for listing bookmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkFilter {
    tag: Option<String>,
    query: Option<String>,
}

impl BookmarkFilter {
    /// Build a filter, treating empty strings as absent.
    pub fn new(tag: Option<String>, query: Option<String>) -> Self {
        Self {
            tag: non_empty(tag),
            query: non_empty(query),
        }
    }

    /// A filter that matches every bookmark.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to bookmarks whose tags contain `tag`.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = non_empty(Some(tag.into()));
        self
    }

    /// Restrict to bookmarks whose title or url contain `query`.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = non_empty(Some(query.into()));
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.query.is_none()
    }

    /// Whether `bookmark` satisfies every constraint of this filter.
    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        let tag_ok = self
            .tag
            .as_deref()
            .map_or(true, |tag| bookmark.tags.contains(tag));
        let query_ok = self.query.as_deref().map_or(true, |q| {
            bookmark.title.contains(q) || bookmark.url.contains(q)
        });
        tag_ok && query_ok
    }

    /// Keep the matching bookmarks, preserving input order.
    pub fn apply<'a, I>(&self, bookmarks: I) -> Vec<Bookmark>
    where
        I: IntoIterator<Item = &'a Bookmark>,
    {
        bookmarks
            .into_iter()
            .filter(|b| self.matches(b))
            .cloned()
            .collect()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
