//! Post registry - the validated, queryable set of posts
//!
//! A [`PostRegistry`] is built once from every document a content source
//! produced. Documents with missing or malformed metadata are dropped and
//! reported through [`PostRegistry::exclusions`]; construction itself never
//! fails. After that the registry is read-only and every query hands back a
//! freshly collected view.

mod exclusion;

use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};

use crate::content::{Document, Post};

pub use exclusion::{Exclusion, ExclusionReason, SlugCollision};

/// Number of posts shown on the landing page
pub const FEATURED_COUNT: usize = 3;

/// Immutable collection of accepted posts
#[derive(Debug, Clone)]
pub struct PostRegistry<C> {
    /// Accepted posts keyed by slug, in input order
    posts: IndexMap<String, Post<C>>,
    /// Indices into `posts`, newest first
    order: Vec<usize>,
    exclusions: Vec<Exclusion>,
}

impl<C> PostRegistry<C> {
    /// Build a registry where a later duplicate slug shadows the earlier one
    pub fn build<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = Document<C>>,
    {
        Self::build_with(documents, SlugCollision::default())
    }

    /// Build a registry with an explicit slug collision policy
    pub fn build_with<I>(documents: I, collision: SlugCollision) -> Self
    where
        I: IntoIterator<Item = Document<C>>,
    {
        let mut posts: IndexMap<String, Post<C>> = IndexMap::new();
        let mut exclusions = Vec::new();

        for document in documents {
            let post = match accept(document) {
                Ok(post) => post,
                Err(exclusion) => {
                    record(&mut exclusions, exclusion);
                    continue;
                }
            };

            let taken_by = posts.get(&post.slug).map(|p| p.source.clone());
            match (collision, taken_by) {
                (SlugCollision::Reject, Some(kept)) => {
                    record(
                        &mut exclusions,
                        Exclusion {
                            location: post.source,
                            slug: post.slug,
                            reason: ExclusionReason::DuplicateSlug(kept),
                        },
                    );
                    continue;
                }
                (SlugCollision::Shadow, Some(_)) => {
                    // Re-inserting at the end keeps input order meaningful for ties
                    if let Some(shadowed) = posts.shift_remove(&post.slug) {
                        record(
                            &mut exclusions,
                            Exclusion {
                                location: shadowed.source,
                                slug: shadowed.slug,
                                reason: ExclusionReason::ShadowedBy(post.source.clone()),
                            },
                        );
                    }
                }
                (_, None) => {}
            }

            tracing::debug!("Accepted post {:?} from {}", post.slug, post.source);
            posts.insert(post.slug.clone(), post);
        }

        // Stable: equal dates keep input order
        let mut order: Vec<usize> = (0..posts.len()).collect();
        order.sort_by(|&a, &b| posts[b].published.cmp(&posts[a].published));

        tracing::info!(
            "Registry built with {} posts ({} excluded)",
            posts.len(),
            exclusions.len()
        );

        Self {
            posts,
            order,
            exclusions,
        }
    }

    /// Number of accepted posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Documents dropped during construction, in the order they were dropped
    pub fn exclusions(&self) -> &[Exclusion] {
        &self.exclusions
    }

    fn iter_sorted(&self) -> impl Iterator<Item = &Post<C>> + '_ {
        self.order.iter().map(move |&i| &self.posts[i])
    }

    /// All posts, newest first
    pub fn sorted_by_date(&self) -> Vec<&Post<C>> {
        self.iter_sorted().collect()
    }

    /// Posts carrying `tag`, newest first
    pub fn by_tag(&self, tag: &str) -> Vec<&Post<C>> {
        self.iter_sorted().filter(|p| p.has_tag(tag)).collect()
    }

    /// Posts carrying at least one of `tags`, newest first.
    ///
    /// An empty selection means no filter and returns every post.
    pub fn by_any_tag<S: AsRef<str>>(&self, tags: &[S]) -> Vec<&Post<C>> {
        if tags.is_empty() {
            return self.sorted_by_date();
        }
        self.iter_sorted()
            .filter(|p| tags.iter().any(|t| p.has_tag(t.as_ref())))
            .collect()
    }

    /// Distinct tags across all posts, ascending
    pub fn all_tags(&self) -> Vec<&str> {
        self.posts
            .values()
            .flat_map(|p| p.tags().iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of posts per tag, ascending by tag
    pub fn tag_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for post in self.posts.values() {
            // A tag listed twice on one post still counts that post once
            let distinct: BTreeSet<&str> = post.tags().iter().map(String::as_str).collect();
            for tag in distinct {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Look up a post by slug
    pub fn by_slug(&self, slug: &str) -> Option<&Post<C>> {
        self.posts.get(slug)
    }

    /// The `n` most recent posts, or all of them if there are fewer
    pub fn featured(&self, n: usize) -> Vec<&Post<C>> {
        self.iter_sorted().take(n).collect()
    }

    /// The post published just after the one with `slug`
    pub fn newer(&self, slug: &str) -> Option<&Post<C>> {
        let pos = self.sorted_position(slug)?;
        let i = *self.order.get(pos.checked_sub(1)?)?;
        Some(&self.posts[i])
    }

    /// The post published just before the one with `slug`
    pub fn older(&self, slug: &str) -> Option<&Post<C>> {
        let pos = self.sorted_position(slug)?;
        let i = *self.order.get(pos + 1)?;
        Some(&self.posts[i])
    }

    fn sorted_position(&self, slug: &str) -> Option<usize> {
        let index = self.posts.get_index_of(slug)?;
        self.order.iter().position(|&i| i == index)
    }
}

impl<C> Default for PostRegistry<C> {
    fn default() -> Self {
        Self {
            posts: IndexMap::new(),
            order: Vec::new(),
            exclusions: Vec::new(),
        }
    }
}

/// Validate one document into a post
fn accept<C>(document: Document<C>) -> Result<Post<C>, Exclusion> {
    let slug = document.slug().to_string();
    let Document {
        location,
        frontmatter,
        frontmatter_error,
        body,
    } = document;

    let Some(frontmatter) = frontmatter else {
        let reason = match frontmatter_error {
            Some(e) => ExclusionReason::Metadata(e),
            None => ExclusionReason::MissingFrontMatter,
        };
        return Err(Exclusion {
            location,
            slug,
            reason,
        });
    };

    match frontmatter.validate(&slug) {
        Ok((frontmatter, published)) => Ok(Post {
            slug,
            source: location,
            frontmatter,
            published,
            content: body,
        }),
        Err(e) => Err(Exclusion {
            location,
            slug,
            reason: e.into(),
        }),
    }
}

fn record(exclusions: &mut Vec<Exclusion>, exclusion: Exclusion) {
    tracing::warn!(
        "Post {:?} filtered out ({}): {}",
        exclusion.slug,
        exclusion.location,
        exclusion.reason
    );
    exclusions.push(exclusion);
}
