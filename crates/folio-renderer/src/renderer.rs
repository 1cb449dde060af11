//! Markdown renderer walking parser events through a backend.

use std::fmt::Write;
use std::marker::PhantomData;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::backend::{Element, RenderBackend};
use crate::state::{CodeBlockState, ImageState, TableState, escape_html};

/// Generic markdown renderer with pluggable backend.
///
/// Structural tags (paragraphs, lists, tables, inline formatting) are written
/// here with the class the backend assigns. Code blocks, images and rules are
/// delegated to the backend.
pub struct MarkdownRenderer<B: RenderBackend> {
    output: String,
    /// Code block rendering state.
    code: CodeBlockState,
    /// Table rendering state.
    table: TableState,
    /// Image alt text capture state.
    image: ImageState,
    /// Render soft line breaks as `<br>`.
    breaks: bool,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> MarkdownRenderer<B> {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            code: CodeBlockState::default(),
            table: TableState::default(),
            image: ImageState::default(),
            breaks: false,
            _backend: PhantomData,
        }
    }

    /// Render single newlines inside paragraphs as line breaks.
    #[must_use]
    pub fn with_line_breaks(mut self) -> Self {
        self.breaks = true;
        self
    }

    /// Parser options used by [`render_str`](Self::render_str): tables,
    /// strikethrough and task lists.
    #[must_use]
    pub fn parser_options() -> Options {
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
    }

    /// Parse and render a markdown string.
    pub fn render_str(&mut self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::parser_options());
        self.render(parser)
    }

    /// Render markdown events and return the HTML.
    pub fn render<'a, I>(&mut self, events: I) -> String
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }
        std::mem::take(&mut self.output)
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.output.push_str(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => B::hard_break(&mut self.output),
            Event::Rule => B::horizontal_rule(&mut self.output),
            Event::TaskListMarker(checked) => B::task_list_marker(checked, &mut self.output),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    fn open(&mut self, tag: &str, element: Element) {
        B::open_tag(tag, element, true, &mut self.output);
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        if self.image.is_active() {
            if let Tag::Image { dest_url, title, .. } = tag {
                self.image.start(dest_url.to_string(), title.to_string());
            }
            return;
        }

        match tag {
            Tag::Paragraph => self.open("p", Element::Paragraph),
            Tag::Heading { level, .. } => {
                let level = heading_level_to_num(level);
                self.open(&format!("h{level}"), Element::Heading(level));
            }
            Tag::BlockQuote(_) => self.open("blockquote", Element::BlockQuote),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(ref info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_owned),
                    CodeBlockKind::Indented => None,
                };
                self.code.start(lang);
            }
            Tag::List(start) => match start {
                Some(1) => self.open("ol", Element::OrderedList),
                Some(n) => {
                    B::open_tag("ol", Element::OrderedList, false, &mut self.output);
                    write!(self.output, r#" start="{n}">"#).unwrap();
                }
                None => self.open("ul", Element::UnorderedList),
            },
            Tag::Item => self.open("li", Element::ListItem),
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList => self.output.push_str("<dl>"),
            Tag::DefinitionListTitle => self.output.push_str("<dt>"),
            Tag::DefinitionListDefinition => self.output.push_str("<dd>"),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.open("table", Element::Table);
            }
            Tag::TableHead => {
                self.table.start_head();
                self.open("thead", Element::TableHead);
                self.output.push_str("<tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let (tag, element) = if self.table.is_in_head() {
                    ("th", Element::HeaderCell)
                } else {
                    ("td", Element::DataCell)
                };
                B::open_tag(tag, element, false, &mut self.output);
                self.output.push_str(self.table.current_alignment_style());
                self.output.push('>');
            }
            Tag::Emphasis => self.open("em", Element::Emphasis),
            Tag::Strong => self.open("strong", Element::Strong),
            Tag::Strikethrough => self.output.push_str("<del>"),
            Tag::Link {
                dest_url, title, ..
            } => {
                B::open_tag("a", Element::Link, false, &mut self.output);
                write!(self.output, r#" href="{}""#, escape_html(&dest_url)).unwrap();
                if !title.is_empty() {
                    write!(self.output, r#" title="{}""#, escape_html(&title)).unwrap();
                }
                self.output.push('>');
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                // Image is rendered in end_tag once the alt text is collected
                self.image.start(dest_url.to_string(), title.to_string());
            }
            Tag::Superscript => self.output.push_str("<sup>"),
            Tag::Subscript => self.output.push_str("<sub>"),
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        if self.image.is_active() {
            if tag == TagEnd::Image
                && let Some((src, title, alt)) = self.image.end()
            {
                B::image(&src, &alt, &title, &mut self.output);
            }
            return;
        }

        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(level) => {
                write!(self.output, "</h{}>", heading_level_to_num(level)).unwrap();
            }
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>"),
            TagEnd::CodeBlock => {
                let (lang, content) = self.code.end();
                B::code_block(lang.as_deref(), &content, &mut self.output);
            }
            TagEnd::List(ordered) => {
                self.output
                    .push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::FootnoteDefinition
            | TagEnd::HtmlBlock
            | TagEnd::MetadataBlock(_)
            | TagEnd::Image => {}
            TagEnd::DefinitionList => self.output.push_str("</dl>"),
            TagEnd::DefinitionListTitle => self.output.push_str("</dt>"),
            TagEnd::DefinitionListDefinition => self.output.push_str("</dd>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.end_head();
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                self.output.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.output.push_str("</em>"),
            TagEnd::Strong => self.output.push_str("</strong>"),
            TagEnd::Strikethrough => self.output.push_str("</del>"),
            TagEnd::Link => self.output.push_str("</a>"),
            TagEnd::Superscript => self.output.push_str("</sup>"),
            TagEnd::Subscript => self.output.push_str("</sub>"),
        }
    }

    fn text(&mut self, text: &str) {
        // Priority: code > image alt > normal text
        if self.code.is_active() {
            self.code.push_str(text);
        } else if self.image.is_active() {
            self.image.push_str(text);
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.image.is_active() {
            self.image.push_str(code);
            return;
        }
        B::open_tag("code", Element::InlineCode, true, &mut self.output);
        write!(self.output, "{}</code>", escape_html(code)).unwrap();
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push_newline();
        } else if self.image.is_active() {
            self.image.push_str(" ");
        } else if self.breaks {
            B::hard_break(&mut self.output);
        } else {
            self.output.push('\n');
        }
    }
}

impl<B: RenderBackend> Default for MarkdownRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
