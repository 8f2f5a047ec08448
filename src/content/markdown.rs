//! Markdown/MDX body rendering

use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;
use std::fmt;

/// Rendered HTML body of a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Html(String);

impl Html {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Markdown renderer for post bodies
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Front-matter is split off before rendering, so no metadata blocks here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render a post body to HTML.
    ///
    /// MDX `import`/`export` statements are module plumbing rather than
    /// prose, so they are dropped before the Markdown pass.
    pub fn render(&self, source: &str) -> Html {
        let markdown = strip_esm(source);
        let parser = Parser::new_ext(&markdown, self.options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        Html(html_output)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove top-level MDX `import`/`export` lines, leaving fenced code untouched
fn strip_esm(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut fence: Option<&str> = None;

    for line in source.split_inclusive('\n') {
        let trimmed = line.trim_start();

        if let Some(marker) = fence {
            if trimmed.starts_with(marker) {
                fence = None;
            }
            out.push_str(line);
            continue;
        }

        if trimmed.starts_with("```") {
            fence = Some("```");
        } else if trimmed.starts_with("~~~") {
            fence = Some("~~~");
        } else if line.starts_with("import ") || line.starts_with("export ") {
            continue;
        }

        out.push_str(line);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.as_str().contains("<h1>Hello World</h1>"));
        assert!(html.as_str().contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_fenced_code_keeps_language() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```tsx\nconst x = 1;\n```");
        assert!(html.as_str().contains(r#"<code class="language-tsx">"#));
    }

    #[test]
    fn test_mdx_imports_are_dropped() {
        let renderer = MarkdownRenderer::new();
        let source = "import { Chart } from '../components/chart'\nexport const meta = {}\n\n# Title\n";
        let html = renderer.render(source);
        assert!(!html.as_str().contains("import"));
        assert!(!html.as_str().contains("export"));
        assert!(html.as_str().contains("<h1>Title</h1>"));
    }

    #[test]
    fn test_imports_inside_code_fence_survive() {
        let source = "```js\nimport React from 'react'\n```\nimport Foo from './foo'\n";
        let stripped = strip_esm(source);
        assert_eq!(stripped, "```js\nimport React from 'react'\n```\n");
    }
}
