//! Report documents the registry dropped

use anyhow::Result;

use crate::registry::Exclusion;
use crate::Blog;

/// Build the registry and print every exclusion.
///
/// With `strict`, any exclusion makes the command fail.
pub fn run(blog: &Blog, strict: bool) -> Result<()> {
    let registry = blog.load_registry()?;
    let exclusions = registry.exclusions();

    println!(
        "{} posts accepted, {} excluded",
        registry.len(),
        exclusions.len()
    );
    for exclusion in exclusions {
        println!("  {}", describe(exclusion));
    }

    if strict && !exclusions.is_empty() {
        anyhow::bail!("{} documents were excluded", exclusions.len());
    }

    Ok(())
}

/// `location (slug): reason`
pub fn describe(exclusion: &Exclusion) -> String {
    format!(
        "{} ({}): {}",
        exclusion.location, exclusion.slug, exclusion.reason
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MetadataError;
    use crate::registry::ExclusionReason;
    use std::fs;

    #[test]
    fn test_describe() {
        let exclusion = Exclusion {
            location: "src/blog/draft.mdx".to_string(),
            slug: "draft".to_string(),
            reason: ExclusionReason::Metadata(MetadataError::MissingDate),
        };
        assert_eq!(
            describe(&exclusion),
            "src/blog/draft.mdx (draft): front-matter has no date"
        );
    }

    #[test]
    fn test_strict_fails_on_exclusions() {
        let dir = tempfile::tempdir().unwrap();
        let content_dir = dir.path().join("src/blog");
        fs::create_dir_all(&content_dir).unwrap();
        fs::write(content_dir.join("draft.mdx"), "---\ntitle: Draft\n---\n").unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert!(run(&blog, false).is_ok());
        assert!(run(&blog, true).is_err());
    }
}
