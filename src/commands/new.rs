//! Create a new post

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Front-matter written into a freshly scaffolded post
#[derive(Debug, Serialize)]
struct Scaffold<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    date: String,
    tags: &'a [String],
}

/// Create `<content_dir>/<slugified-title>.mdx` dated today
pub fn create_post(
    blog: &Blog,
    title: &str,
    tags: &[String],
    description: Option<&str>,
) -> Result<PathBuf> {
    let today = chrono::Local::now().date_naive();
    create_post_on(blog, title, tags, description, today)
}

/// Create a post with an explicit date
pub fn create_post_on(
    blog: &Blog,
    title: &str,
    tags: &[String],
    description: Option<&str>,
    date: NaiveDate,
) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    fs::create_dir_all(&blog.content_dir)?;
    let file_path = blog.content_dir.join(format!("{}.mdx", slug));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold = Scaffold {
        title,
        description,
        date: date.format("%Y-%m-%d").to_string(),
        tags,
    };
    let yaml = serde_yaml::to_string(&scaffold)?;
    let content = format!("---\n{}---\n\n# {}\n", yaml, title);

    fs::write(&file_path, content)?;
    tracing::info!("Created post {:?}", file_path);

    Ok(file_path)
}
