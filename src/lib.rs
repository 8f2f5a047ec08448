//! quillpost: the post registry behind a personal Markdown/MDX blog
//!
//! Content documents are read from the site's content directory, validated
//! into [`content::Post`] records and collected into an immutable
//! [`registry::PostRegistry`] that the presentation layer queries for the
//! landing page, the tag-filtered blog index and individual post pages.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod registry;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::loader::ContentLoader;
use content::Html;
use registry::PostRegistry;

/// The blog application rooted at a site directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding post sources
    pub content_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Load every post source and build the registry
    pub fn load_registry(&self) -> Result<PostRegistry<Html>> {
        let documents = ContentLoader::new(self).load_documents()?;
        Ok(PostRegistry::build_with(
            documents,
            self.config.slug_collision,
        ))
    }
}
