//! Strategy selection.

use crate::fallback::render_fallback;
use crate::renderer::MarkdownRenderer;
use crate::styled::StyledBackend;

/// Markdown rendering strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkdownEngine {
    /// Full parser, line-break sensitive, with GitHub-flavored tables,
    /// strikethrough and task lists.
    #[default]
    Primary,
    /// Regex conversion for when the full parser is not wanted.
    Fallback,
}

impl MarkdownEngine {
    /// Render a markdown document to styled HTML.
    #[must_use]
    pub fn render(self, markdown: &str) -> String {
        match self {
            Self::Primary => MarkdownRenderer::<StyledBackend>::new()
                .with_line_breaks()
                .render_str(markdown),
            Self::Fallback => render_fallback(markdown),
        }
    }
}

/// Render a markdown document with the given strategy.
#[must_use]
pub fn render_markdown(engine: MarkdownEngine, markdown: &str) -> String {
    engine.render(markdown)
}
