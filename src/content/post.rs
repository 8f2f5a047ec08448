//! Post model

use chrono::NaiveDateTime;
use serde::Serialize;

use super::PostFrontmatter;

/// A validated blog post
///
/// `content` is whatever the content source produced for the body; the
/// registry never looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post<C> {
    /// URL-safe identifier derived from the source file name
    pub slug: String,

    /// Location of the source document
    pub source: String,

    /// Validated front-matter
    pub frontmatter: PostFrontmatter,

    /// Parsed publication date, used for ordering
    #[serde(skip)]
    pub published: NaiveDateTime,

    /// Rendered body
    pub content: C,
}

impl<C> Post<C> {
    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }

    pub fn tags(&self) -> &[String] {
        &self.frontmatter.tags
    }

    /// Exact, case-sensitive tag match
    pub fn has_tag(&self, tag: &str) -> bool {
        self.frontmatter.tags.iter().any(|t| t == tag)
    }
}
