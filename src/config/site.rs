//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::registry::{SlugCollision, FEATURED_COUNT};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,
    /// URL segment posts live under (`/blog/:slug`)
    pub blog_dir: String,
    pub tag_dir: String,

    // Content
    /// Directory holding post sources, relative to the site root
    pub content_dir: String,
    /// File extensions treated as posts
    pub extensions: Vec<String>,
    pub slug_collision: SlugCollision,

    // Home page
    pub featured_count: usize,

    /// Display format for dates, Moment.js style
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Static Blog".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),
            blog_dir: "blog".to_string(),
            tag_dir: "tags".to_string(),

            content_dir: "src/blog".to_string(),
            extensions: vec!["md".to_string(), "mdx".to_string()],
            slug_collision: SlugCollision::default(),

            featured_count: FEATURED_COUNT,

            date_format: "MMMM D, YYYY".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether a file extension marks a post source
    pub fn is_post_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}
