//! Regex-driven markdown conversion.
//!
//! Handles fenced code, headings, inline code, bold, italic, flat lists and
//! paragraphs. Anything else is left as written.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::backend::{Element, RenderBackend};
use crate::state::escape_html;
use crate::styled::{StyledBackend, styled_code_block};

const LIST_ITEM_CLASS: &str = "mb-2 leading-relaxed text-gray-300";

// The first word of the info string is the language; the rest is ignored.
static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[ \t]*([^\s`]*)[^\n]*\n(.*?)```").unwrap());
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.*)$").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^\n]+?)\*\*").unwrap());
// A space after the opening asterisk marks a list bullet, not emphasis.
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\s*][^*\n]*?)\*").unwrap());
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap());
static BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s+(.*)$").unwrap());
static BLOCK_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:<(?:h[1-6]|ul|ol|li|p|pre|blockquote|table|hr|div|img)\b|@@CODE_BLOCK_\d+@@)")
        .unwrap()
});
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@@(CODE_BLOCK|INLINE_CODE)_(\d+)@@").unwrap());

/// Render markdown with the regex strategy.
///
/// Fenced and inline code are swapped out for placeholders before any inline
/// pass runs and restored last, so their contents are never rewritten.
#[must_use]
pub fn render_fallback(markdown: &str) -> String {
    let mut blocks = Vec::new();
    let mut spans = Vec::new();

    let text = markdown.replace("\r\n", "\n");

    let text = FENCED_CODE.replace_all(&text, |caps: &Captures<'_>| {
        let lang = caps.get(1).map(|m| m.as_str()).filter(|l| !l.is_empty());
        blocks.push(styled_code_block(lang, &caps[2]));
        format!("@@CODE_BLOCK_{}@@", blocks.len() - 1)
    });

    let text = HEADING.replace_all(&text, |caps: &Captures<'_>| {
        let level = u8::try_from(caps[1].len()).unwrap_or(6);
        let mut out = String::new();
        StyledBackend::open_tag(&format!("h{level}"), Element::Heading(level), true, &mut out);
        out.push_str(caps[2].trim_end());
        out.push_str(&format!("</h{level}>"));
        out
    });

    let text = INLINE_CODE.replace_all(&text, |caps: &Captures<'_>| {
        let mut out = String::new();
        StyledBackend::open_tag("code", Element::InlineCode, true, &mut out);
        out.push_str(&escape_html(&caps[1]));
        out.push_str("</code>");
        spans.push(out);
        format!("@@INLINE_CODE_{}@@", spans.len() - 1)
    });

    let text = BOLD.replace_all(&text, |caps: &Captures<'_>| {
        wrap_inline("strong", Element::Strong, &caps[1])
    });
    let text = ITALIC.replace_all(&text, |caps: &Captures<'_>| {
        wrap_inline("em", Element::Emphasis, &caps[1])
    });

    let text = wrap_lists(&text);
    let text = wrap_paragraphs(&text);

    PLACEHOLDER
        .replace_all(&text, |caps: &Captures<'_>| {
            let pool = if &caps[1] == "CODE_BLOCK" { &blocks } else { &spans };
            caps[2]
                .parse::<usize>()
                .ok()
                .and_then(|i| pool.get(i))
                .cloned()
                .unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

fn wrap_inline(tag: &str, element: Element, content: &str) -> String {
    let mut out = String::new();
    StyledBackend::open_tag(tag, element, true, &mut out);
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

/// Turn runs of consecutive list lines into a single list element. The first
/// line of a run decides between numbered and bulleted.
fn wrap_lists(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    let mut ordered = false;

    let flush = |run: &mut Vec<&str>, ordered: bool, lines: &mut Vec<String>| {
        if run.is_empty() {
            return;
        }
        let (tag, element) = if ordered {
            ("ol", Element::OrderedList)
        } else {
            ("ul", Element::UnorderedList)
        };
        let mut out = String::new();
        StyledBackend::open_tag(tag, element, true, &mut out);
        for item in run.drain(..) {
            out.push_str(&format!(r#"<li class="{LIST_ITEM_CLASS}">{item}</li>"#));
        }
        out.push_str(&format!("</{tag}>"));
        lines.push(out);
    };

    for line in text.lines() {
        let item = ORDERED_ITEM
            .captures(line)
            .map(|caps| (true, caps.get(1).map_or("", |m| m.as_str())))
            .or_else(|| {
                BULLET_ITEM
                    .captures(line)
                    .map(|caps| (false, caps.get(1).map_or("", |m| m.as_str())))
            });
        match item {
            Some((is_ordered, content)) => {
                if run.is_empty() {
                    ordered = is_ordered;
                }
                run.push(content);
            }
            None => {
                flush(&mut run, ordered, &mut lines);
                lines.push(line.to_owned());
            }
        }
    }
    flush(&mut run, ordered, &mut lines);

    lines.join("\n")
}

/// Wrap every bare line in a paragraph; blank lines separate paragraphs and
/// are dropped.
fn wrap_paragraphs(text: &str) -> String {
    let mut open = String::new();
    StyledBackend::open_tag("p", Element::Paragraph, true, &mut open);

    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            if BLOCK_START.is_match(line) {
                line.to_owned()
            } else {
                format!("{open}{line}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
