//! Show a single post

use anyhow::Result;

use crate::helpers::{format_date, post_permalink};
use crate::Blog;

/// Print one post with its neighbours, or fail when the slug is unknown
pub fn run(blog: &Blog, slug: &str, json: bool) -> Result<()> {
    let registry = blog.load_registry()?;

    let Some(post) = registry.by_slug(slug) else {
        anyhow::bail!("Post not found: {}", slug);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(post)?);
        return Ok(());
    }

    println!("{}", post.title());
    println!("  date:   {}", format_date(&post.published, &blog.config.date_format));
    println!("  url:    {}", post_permalink(&blog.config, &post.slug));
    println!("  source: {}", post.source);
    if let Some(description) = &post.frontmatter.description {
        println!("  about:  {}", description);
    }
    if !post.tags().is_empty() {
        println!("  tags:   {}", post.tags().join(", "));
    }
    if let Some(newer) = registry.newer(slug) {
        println!("  newer:  {}", newer.slug);
    }
    if let Some(older) = registry.older(slug) {
        println!("  older:  {}", older.slug);
    }
    println!();
    println!("{}", post.content);

    Ok(())
}
