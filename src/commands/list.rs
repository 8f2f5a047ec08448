//! List posts and tags

use anyhow::Result;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{Html, Post};
use crate::helpers::{format_date, post_path, tag_path};
use crate::Blog;

/// Post as shown in listings, without its body
#[derive(Debug, Serialize)]
pub struct PostEntry<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub date: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub tags: &'a [String],
    pub path: String,
}

impl<'a> PostEntry<'a> {
    pub fn new(post: &'a Post<Html>, config: &SiteConfig) -> Self {
        Self {
            slug: &post.slug,
            title: post.title(),
            date: &post.frontmatter.date,
            description: post.frontmatter.description.as_deref(),
            tags: post.tags(),
            path: post_path(config, &post.slug),
        }
    }
}

/// One line of a post listing: `date - title [slug]`
pub fn post_line(post: &Post<Html>, config: &SiteConfig) -> String {
    format!(
        "{} - {} [{}]",
        format_date(&post.published, &config.date_format),
        post.title(),
        post.slug
    )
}

/// List site content by type
pub fn run(blog: &Blog, content_type: &str, json: bool) -> Result<()> {
    let registry = blog.load_registry()?;

    match content_type {
        "post" | "posts" => print_posts("Posts", &registry.sorted_by_date(), blog, json),
        "tag" | "tags" => {
            let counts = registry.tag_counts();
            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
                return Ok(());
            }
            println!("Tags ({}):", counts.len());
            for (tag, count) in counts {
                println!("  {} ({}) {}", tag, count, tag_path(&blog.config, tag));
            }
            Ok(())
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }
}

/// List the landing-page highlights
pub fn featured(blog: &Blog, count: Option<usize>, json: bool) -> Result<()> {
    let registry = blog.load_registry()?;
    let count = count.unwrap_or(blog.config.featured_count);
    print_posts("Featured", &registry.featured(count), blog, json)
}

/// List posts carrying any of `tags`
pub fn filter(blog: &Blog, tags: &[String], json: bool) -> Result<()> {
    let registry = blog.load_registry()?;
    let posts = registry.by_any_tag(tags);
    if posts.is_empty() && !json {
        println!("No posts found with the selected tags.");
        return Ok(());
    }
    print_posts("Posts", &posts, blog, json)
}

fn print_posts(heading: &str, posts: &[&Post<Html>], blog: &Blog, json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = posts
            .iter()
            .map(|p| PostEntry::new(p, &blog.config))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{} ({}):", heading, posts.len());
    for post in posts {
        println!("  {}", post_line(post, &blog.config));
    }
    Ok(())
}
