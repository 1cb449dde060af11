//! Render backend trait for presentation-specific output.
//!
//! The renderer walks parser events and writes structural tags itself. The
//! backend decides which class attribute each element carries and renders
//! the elements whose markup differs between presentations.

use std::fmt::Write;

use crate::state::escape_html;

/// Structural element that may carry a presentation class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    /// Heading with level 1-6.
    Heading(u8),
    Paragraph,
    UnorderedList,
    OrderedList,
    ListItem,
    Link,
    Strong,
    Emphasis,
    BlockQuote,
    Image,
    Rule,
    Table,
    TableHead,
    HeaderCell,
    DataCell,
    InlineCode,
}

/// Backend trait for presentation-specific rendering operations.
pub trait RenderBackend {
    /// Class attribute value for an element, or `None` for a bare tag.
    fn class(_element: Element) -> Option<&'static str> {
        None
    }

    /// Render a fenced or indented code block.
    ///
    /// # Arguments
    ///
    /// * `lang` - Optional language identifier (e.g., "rust", "python")
    /// * `content` - The raw code content (not yet escaped)
    /// * `out` - Output buffer to write to
    fn code_block(lang: Option<&str>, content: &str, out: &mut String);

    /// Write an opening tag with its class attribute, leaving it open for
    /// further attributes when `close` is false.
    fn open_tag(tag: &str, element: Element, close: bool, out: &mut String) {
        out.push('<');
        out.push_str(tag);
        if let Some(class) = Self::class(element) {
            write!(out, r#" class="{class}""#).unwrap();
        }
        if close {
            out.push('>');
        }
    }

    /// Render an image.
    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        Self::open_tag("img", Element::Image, false, out);
        write!(
            out,
            r#" src="{}" alt="{}""#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
        if !title.is_empty() {
            write!(out, r#" title="{}""#, escape_html(title)).unwrap();
        }
        out.push('>');
    }

    /// Render a hard break.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a horizontal rule.
    fn horizontal_rule(out: &mut String) {
        Self::open_tag("hr", Element::Rule, true, out);
    }

    /// Render a task list marker.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}
