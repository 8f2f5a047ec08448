//! URL helper functions

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/about/") // -> "/about/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Path of a post page, `/blog/:slug`
pub fn post_path(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &post_route(config, slug))
}

/// Absolute URL of a post page
pub fn post_permalink(config: &SiteConfig, slug: &str) -> String {
    full_url_for(config, &post_route(config, slug))
}

fn post_route(config: &SiteConfig, slug: &str) -> String {
    format!("{}/{}", config.blog_dir.trim_matches('/'), slug)
}

/// Path of the blog index filtered to one tag
///
/// Tags match exactly, so the tag is percent-encoded rather than slugified and
/// distinct tags never share a path.
pub fn tag_path(config: &SiteConfig, tag: &str) -> String {
    url_for(
        config,
        &format!(
            "{}/{}/",
            config.tag_dir.trim_matches('/'),
            utf8_percent_encode(tag, NON_ALPHANUMERIC)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com/".to_string();
        config.root = "/site/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/about"), "/site/about");
        assert_eq!(url_for(&config, ""), "/site/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(full_url_for(&config, "/about"), "https://example.com/site/about");
    }

    #[test]
    fn test_post_and_tag_paths() {
        let config = SiteConfig::default();
        assert_eq!(post_path(&config, "test-post"), "/blog/test-post");
        assert_eq!(tag_path(&config, "Tailwind CSS"), "/tags/Tailwind%20CSS/");
    }

    #[test]
    fn test_distinct_tags_get_distinct_paths() {
        let config = SiteConfig::default();
        assert_eq!(tag_path(&config, "React"), "/tags/React/");
        assert_eq!(tag_path(&config, "react"), "/tags/react/");
        assert_eq!(tag_path(&config, "C++"), "/tags/C%2B%2B/");
        assert_eq!(tag_path(&config, "C"), "/tags/C/");
        assert_ne!(tag_path(&config, "C#"), tag_path(&config, "C"));
    }

    #[test]
    fn test_post_permalink_under_root() {
        let config = test_config();
        assert_eq!(post_path(&config, "hello"), "/site/blog/hello");
        assert_eq!(
            post_permalink(&config, "hello"),
            "https://example.com/site/blog/hello"
        );
    }
}
