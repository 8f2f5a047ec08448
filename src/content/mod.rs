//! Content module - documents, front-matter, posts and the on-disk content source

mod document;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use document::{slug_from_location, Document};
pub use frontmatter::{parse_date_string, FrontMatter, MetadataError, PostFrontmatter};
pub use markdown::{Html, MarkdownRenderer};
pub use post::Post;
