//! Raw content documents as handed over by a content source

use super::{FrontMatter, MetadataError};

/// A content document before validation
///
/// `location` is a stable identifier for where the document came from, usually
/// a path relative to the site root such as `src/blog/hello-world.mdx`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<C> {
    pub location: String,
    pub frontmatter: Option<FrontMatter>,
    /// Why a `---` block was present but could not be read
    pub frontmatter_error: Option<MetadataError>,
    pub body: C,
}

impl<C> Document<C> {
    pub fn new(location: impl Into<String>, frontmatter: Option<FrontMatter>, body: C) -> Self {
        Self {
            location: location.into(),
            frontmatter,
            frontmatter_error: None,
            body,
        }
    }

    /// A document whose front-matter block failed to parse
    pub fn with_frontmatter_error(
        location: impl Into<String>,
        error: MetadataError,
        body: C,
    ) -> Self {
        Self {
            location: location.into(),
            frontmatter: None,
            frontmatter_error: Some(error),
            body,
        }
    }

    /// Slug derived from the document location
    pub fn slug(&self) -> &str {
        slug_from_location(&self.location)
    }
}

/// Derive a slug from a location: the file name without its last extension.
///
/// ```
/// use quillpost::content::slug_from_location;
///
/// assert_eq!(slug_from_location("../blog/some-post.mdx"), "some-post");
/// assert_eq!(slug_from_location("notes"), "notes");
/// ```
pub fn slug_from_location(location: &str) -> &str {
    let file_name = location
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(location);

    match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    }
}
