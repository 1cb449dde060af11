//! Backend producing HTML with utility classes for the dark portfolio theme.

use std::fmt::Write;

use crate::backend::{Element, RenderBackend};
use crate::state::escape_html;

const PRE_CLASS: &str = "bg-[#1A1A1A] dark:bg-[#0F0F0F] border border-gray-800 dark:border-gray-700 p-4 rounded-lg mb-6 overflow-x-auto";
const CODE_CLASS: &str = "text-sm font-mono text-gray-200 dark:text-gray-300";

/// Styled HTML backend.
///
/// Every structural element carries its presentation class, and code blocks
/// are wrapped in a themed `<pre>`.
pub struct StyledBackend;

impl RenderBackend for StyledBackend {
    fn class(element: Element) -> Option<&'static str> {
        let class = match element {
            Element::Heading(1) => "text-3xl font-bold mt-8 mb-4 text-white",
            Element::Heading(2) => "text-2xl font-bold mt-6 mb-3 text-white",
            Element::Heading(3) => "text-xl font-bold mt-6 mb-3 text-white",
            Element::Heading(4) => "text-lg font-bold mt-4 mb-2 text-white",
            Element::Heading(5) => "text-base font-bold mt-4 mb-2 text-white",
            Element::Heading(_) => "text-sm font-bold mt-4 mb-2 text-white",
            Element::Paragraph => "mb-4 text-gray-300 leading-relaxed",
            Element::UnorderedList => "list-disc ml-6 mb-4 space-y-2 text-gray-300",
            Element::OrderedList => "list-decimal ml-6 mb-4 space-y-2 text-gray-300",
            Element::ListItem => "mb-2 leading-relaxed",
            Element::Link => "text-primary hover:text-primary-hover hover:underline transition-colors",
            Element::Strong => "font-bold text-white",
            Element::Emphasis => "italic text-gray-300",
            Element::BlockQuote => "border-l-4 border-primary pl-4 italic my-4 text-gray-400 bg-gray-900/30 dark:bg-gray-800/30 py-2 rounded-r",
            Element::Image => "rounded-lg my-6 max-w-full shadow-lg",
            Element::Rule => "my-8 border-gray-700 dark:border-gray-800",
            Element::Table => "w-full mb-6 border-collapse",
            Element::TableHead => "bg-gray-800 dark:bg-gray-900",
            Element::HeaderCell => "px-4 py-2 text-left border border-gray-700 text-white font-bold",
            Element::DataCell => "px-4 py-2 border border-gray-700 text-gray-300",
            Element::InlineCode => "inline-code",
        };
        Some(class)
    }

    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        write!(out, r#"<pre class="{PRE_CLASS}"><code class="{CODE_CLASS}"#).unwrap();
        if let Some(lang) = lang {
            write!(out, " language-{}", escape_html(lang)).unwrap();
        }
        write!(out, r#"">{}</code></pre>"#, escape_html(content)).unwrap();
    }
}

/// Render a styled code block; shared with the fallback strategy.
pub(crate) fn styled_code_block(lang: Option<&str>, content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 200);
    StyledBackend::code_block(lang, content, &mut out);
    out
}
