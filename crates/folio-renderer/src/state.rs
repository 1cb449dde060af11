//! State structs tracking context during event processing.

use pulldown_cmark::Alignment;

/// State for tracking code block rendering.
#[derive(Default)]
pub struct CodeBlockState {
    /// Whether we're inside a code block.
    active: bool,
    /// Language of current code block (e.g., "rust", "python").
    language: Option<String>,
    /// Buffer for code block content.
    buffer: String,
}

impl CodeBlockState {
    /// Start a new code block with optional language.
    pub fn start(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
        self.buffer.clear();
    }

    /// End the current code block and return (language, content).
    pub fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.language.take(), std::mem::take(&mut self.buffer))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn push_newline(&mut self) {
        self.buffer.push('\n');
    }
}

/// State for tracking table rendering.
#[derive(Default)]
pub struct TableState {
    /// Whether we're inside the table header row.
    in_head: bool,
    /// Column alignments for current table.
    alignments: Vec<Alignment>,
    /// Current column index in table row.
    cell_index: usize,
}

impl TableState {
    /// Start a new table with column alignments.
    pub fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub fn end_head(&mut self) {
        self.in_head = false;
    }

    pub fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Get the alignment style for the current cell.
    pub fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// State for tracking image alt text capture.
#[derive(Default)]
pub struct ImageState {
    /// Nesting depth, since alt text may itself contain image syntax.
    depth: usize,
    /// Buffer for alt text.
    alt_text: String,
    /// Source and title of the outermost image.
    pending: Option<(String, String)>,
}

impl ImageState {
    /// Start capturing image alt text.
    pub fn start(&mut self, src: String, title: String) {
        if self.depth == 0 {
            self.alt_text.clear();
            self.pending = Some((src, title));
        }
        self.depth += 1;
    }

    /// End image capture. Returns `(src, title, alt)` once the outermost
    /// image closes.
    pub fn end(&mut self) -> Option<(String, String, String)> {
        self.depth = self.depth.saturating_sub(1);
        if self.depth > 0 {
            return None;
        }
        let alt = std::mem::take(&mut self.alt_text);
        self.pending.take().map(|(src, title)| (src, title, alt))
    }

    pub fn is_active(&self) -> bool {
        self.depth > 0
    }

    pub fn push_str(&mut self, text: &str) {
        self.alt_text.push_str(text);
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
