//! Content loader - reads post sources from the content directory

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{Document, FrontMatter, Html, MarkdownRenderer};
use crate::Blog;

/// Loads post documents from the configured content directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            blog,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load every post source under the content directory.
    ///
    /// Files are visited in file-name order so the result, and the registry
    /// built from it, does not depend on directory iteration order.
    pub fn load_documents(&self) -> Result<Vec<Document<Html>>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !self.is_post_file(path) {
                continue;
            }

            match self.load_document(path) {
                Ok(document) => documents.push(document),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        tracing::info!(
            "Found {} post sources in {:?}",
            documents.len(),
            content_dir
        );

        Ok(documents)
    }

    /// Load a single post source
    fn load_document(&self, path: &Path) -> Result<Document<Html>> {
        let content = fs::read_to_string(path)?;
        let (frontmatter, body) = FrontMatter::parse(&content);

        // Location relative to the site root, with forward slashes
        let location = path
            .strip_prefix(&self.blog.base_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        tracing::debug!(
            "Loaded {} (front-matter: {})",
            location,
            matches!(frontmatter, Ok(Some(_)))
        );

        let html = self.renderer.render(body);
        Ok(match frontmatter {
            Ok(frontmatter) => Document::new(location, frontmatter, html),
            Err(e) => Document::with_frontmatter_error(location, e, html),
        })
    }

    fn is_post_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.blog.config.is_post_extension(e))
            .unwrap_or(false)
    }
}
