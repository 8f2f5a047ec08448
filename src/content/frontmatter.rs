//! Front-matter parsing and validation

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    let tags = deserializer.deserialize_any(StringOrVec)?;
    Ok(tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect())
}

/// Accepts any YAML scalar for the date so that `date: 2024` does not sink the
/// whole block; validation decides whether the value is usable.
fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct Scalar;

    impl<'de> Visitor<'de> for Scalar {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a date string")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(Scalar)
}

/// Raw front-matter block as authored at the top of a post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub date: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,

    /// Fields the registry does not interpret
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

/// Validated metadata of an accepted post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostFrontmatter {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The date exactly as authored
    pub date: String,
    pub tags: Vec<String>,
}

/// Why a front-matter block cannot describe a post
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("front-matter has no date")]
    MissingDate,

    #[error("front-matter date {0:?} is not an ISO-8601 date")]
    InvalidDate(String),

    #[error("front-matter block is not valid YAML: {0}")]
    InvalidFrontMatter(String),
}

impl FrontMatter {
    /// Split a source file into its front-matter and body.
    ///
    /// Returns `Ok(None)` when the file has no `---` block. A block that does
    /// not deserialize is an `InvalidFrontMatter` error, and the body is then
    /// the whole file.
    pub fn parse(content: &str) -> (Result<Option<Self>, MetadataError>, &str) {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let Some((yaml, body)) = split_block(content) else {
            return (Ok(None), content);
        };

        if yaml.trim().is_empty() {
            return (Ok(Some(FrontMatter::default())), body);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml) {
            Ok(fm) => (Ok(Some(fm)), body),
            Err(e) => {
                tracing::warn!("Failed to parse YAML front-matter: {}", e);
                (Err(MetadataError::InvalidFrontMatter(e.to_string())), content)
            }
        }
    }

    /// Normalize into the metadata of an accepted post.
    ///
    /// `fallback_title` is used when the block has no title.
    pub fn validate(
        &self,
        fallback_title: &str,
    ) -> Result<(PostFrontmatter, NaiveDateTime), MetadataError> {
        let date = self
            .date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(MetadataError::MissingDate)?;

        let published =
            parse_date_string(date).ok_or_else(|| MetadataError::InvalidDate(date.to_string()))?;

        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(fallback_title)
            .to_string();

        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let frontmatter = PostFrontmatter {
            title,
            description,
            date: date.to_string(),
            tags: self.tags.clone(),
        };

        Ok((frontmatter, published))
    }
}

/// Locate a `---` delimited block at the start of `content`
fn split_block(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let body = &rest[offset + line.len()..];
            return Some((&rest[..offset], body.trim_start_matches(['\n', '\r'])));
        }
        offset += line.len();
    }

    None
}

/// Parse an ISO-8601 date or date-time
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Building a Blog with MDX
description: Step-by-step guide
date: 2024-04-04
tags:
  - mdx
  - blog
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content);
        let fm = fm.unwrap().unwrap();
        assert_eq!(fm.title.as_deref(), Some("Building a Blog with MDX"));
        assert_eq!(fm.date.as_deref(), Some("2024-04-04"));
        assert_eq!(fm.tags, vec!["mdx", "blog"]);
        assert_eq!(body, "This is the content.\n");
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, body) = FrontMatter::parse("# Just a heading\n\nText.");
        assert_eq!(fm, Ok(None));
        assert!(body.starts_with("# Just a heading"));
    }

    #[test]
    fn test_unclosed_block_is_content() {
        let (fm, body) = FrontMatter::parse("---\ntitle: Open\n\nNo closing line.");
        assert_eq!(fm, Ok(None));
        assert!(body.contains("No closing line."));
    }

    #[test]
    fn test_empty_block_is_present_but_blank() {
        let (fm, body) = FrontMatter::parse("---\n---\nBody");
        assert_eq!(fm, Ok(Some(FrontMatter::default())));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_prose_between_rules_is_invalid_frontmatter() {
        let content = r#"---
Some random text between two horizontal rules.
---
More content here.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert!(matches!(fm, Err(MetadataError::InvalidFrontMatter(_))));
        assert!(body.contains("Some random text"));
    }

    #[test]
    fn test_broken_yaml_is_reported() {
        let content = "---\ntitle: Broken\ndate: 2024-01-01\ntags: {a: 1}\n---\nBody\n";
        let (fm, body) = FrontMatter::parse(content);
        let Err(MetadataError::InvalidFrontMatter(message)) = fm else {
            panic!("expected an invalid front-matter error, got {:?}", fm);
        };
        assert!(!message.is_empty());
        assert!(body.starts_with("---"));
    }

    #[test]
    fn test_single_string_tag_and_extra_fields() {
        let content = "---\ntitle: One\ndate: 2024-01-15\ntags: Notes\ndraft: true\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        let fm = fm.unwrap().unwrap();
        assert_eq!(fm.tags, vec!["Notes"]);
        assert_eq!(fm.extra.get("draft"), Some(&serde_yaml::Value::Bool(true)));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\ndate: 2024-02-20\r\n---\r\nBody\r\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.unwrap().unwrap().date.as_deref(), Some("2024-02-20"));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_validate_missing_date() {
        let fm = FrontMatter {
            title: Some("No date".to_string()),
            ..Default::default()
        };
        assert_eq!(fm.validate("no-date"), Err(MetadataError::MissingDate));

        let blank = FrontMatter {
            date: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.validate("blank"), Err(MetadataError::MissingDate));
    }

    #[test]
    fn test_validate_invalid_date() {
        let fm = FrontMatter {
            date: Some("last tuesday".to_string()),
            ..Default::default()
        };
        assert_eq!(
            fm.validate("x"),
            Err(MetadataError::InvalidDate("last tuesday".to_string()))
        );
    }

    #[test]
    fn test_validate_falls_back_to_slug_title() {
        let fm = FrontMatter {
            date: Some("2024-03-15".to_string()),
            description: Some("  ".to_string()),
            ..Default::default()
        };
        let (meta, published) = fm.validate("advanced-react-patterns").unwrap();
        assert_eq!(meta.title, "advanced-react-patterns");
        assert_eq!(meta.description, None);
        assert!(meta.tags.is_empty());
        assert_eq!(published.format("%Y-%m-%d").to_string(), "2024-03-15");
    }

    #[test]
    fn test_parse_date_formats() {
        let day = parse_date_string("2024-01-15").unwrap();
        assert_eq!(day.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 00:00");

        let local = parse_date_string("2024-01-15 10:30:00").unwrap();
        assert_eq!(local.format("%H:%M").to_string(), "10:30");

        let zoned = parse_date_string("2024-01-15T10:30:00+02:00").unwrap();
        assert_eq!(zoned.format("%H:%M").to_string(), "08:30");

        assert!(parse_date_string("15/01/2024").is_none());
    }

    #[test]
    fn test_numeric_date_survives_deserialization() {
        let (fm, _) = FrontMatter::parse("---\ntitle: Year only\ndate: 2024\n---\n");
        let fm = fm.unwrap().unwrap();
        assert_eq!(fm.date.as_deref(), Some("2024"));
        assert_eq!(
            fm.validate("year-only"),
            Err(MetadataError::InvalidDate("2024".to_string()))
        );
    }
}
