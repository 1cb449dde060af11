//! Markdown to styled HTML rendering.
//!
//! Two interchangeable strategies are provided:
//! - [`MarkdownEngine::Primary`]: walks `pulldown-cmark` events through a
//!   [`RenderBackend`], emitting presentation classes directly on every element.
//! - [`MarkdownEngine::Fallback`]: a minimal regex pass for plain documents.
//!
//! Both are infallible. Unrecognized constructs pass through unchanged.
//!
//! # Example
//!
//! ```
//! use folio_renderer::{MarkdownEngine, render_markdown};
//!
//! let html = render_markdown(MarkdownEngine::Primary, "**bold** and *italic*");
//! assert!(html.contains(r#"<strong class="font-bold text-white">bold</strong>"#));
//! ```

mod backend;
mod engine;
mod fallback;
mod renderer;
mod state;
mod styled;

pub use backend::{Element, RenderBackend};
pub use engine::{MarkdownEngine, render_markdown};
pub use fallback::render_fallback;
pub use renderer::MarkdownRenderer;
pub use state::escape_html;
pub use styled::StyledBackend;
