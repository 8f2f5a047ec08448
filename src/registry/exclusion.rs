//! Documents dropped while building a registry

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::MetadataError;

/// What to do when two documents derive the same slug
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugCollision {
    /// The later document replaces the earlier one
    #[default]
    Shadow,
    /// The first document keeps the slug; later ones are excluded
    Reject,
}

/// Why a document did not make it into the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExclusionReason {
    #[error("document has no front-matter")]
    MissingFrontMatter,

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("shadowed by {0} which has the same slug")]
    ShadowedBy(String),

    #[error("slug already taken by {0}")]
    DuplicateSlug(String),
}

/// A document excluded during construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    pub location: String,
    pub slug: String,
    pub reason: ExclusionReason,
}
