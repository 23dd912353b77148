/// Console formatting module - Pure rendering concerns
///
/// This module handles all console output formatting including:
/// - Terminal width detection (with a test override)
/// - Word wrapping with hanging indents
/// - Multi-column listing of short tokens (colify)
/// - A styled-span line model resolved to colors by ReportWriter
///
/// Layout code builds plain strings and spans; only ReportWriter knows
/// about escape codes, so every layout function is testable without a
/// terminal.
use std::io::{self, Write};
use std::sync::OnceLock;
use term::color::{self, Color};
use terminal_size::{Width, terminal_size};
use unicode_width::UnicodeWidthStr;

//
// Terminal Width
//

/// Minimum working width when the terminal is narrow or unavailable.
pub const MIN_WIDTH: usize = 70;

// Width override - set once from the CLI or from tests
static WIDTH_OVERRIDE: OnceLock<usize> = OnceLock::new();

/// Override the detected console width (for tests and --console-width)
pub fn set_console_width(width: usize) {
    let _ = WIDTH_OVERRIDE.set(width); // Ignore error if already initialized
}

/// Get terminal width or default to 80
pub fn console_width() -> usize {
    if let Some(w) = WIDTH_OVERRIDE.get() {
        return *w;
    }
    if let Some((Width(w), _)) = terminal_size() { w as usize } else { 80 }
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Return a function that pads every token to the longest one plus `extra`
pub fn padder(tokens: &[String], extra: usize) -> impl Fn(&str) -> String + use<> {
    let length = tokens.iter().map(|s| display_width(s)).max().unwrap_or(0) + extra;
    move |s: &str| {
        let padding = length.saturating_sub(display_width(s));
        format!("{}{}", s, " ".repeat(padding))
    }
}

/// Word-wrap `text` to `width`, with separate first-line and
/// continuation indents. Width includes the indent.
pub fn wrap_with_indent(text: &str, width: usize, initial_indent: &str, subsequent_indent: &str) -> Vec<String> {
    let options = textwrap::Options::new(width.max(1))
        .initial_indent(initial_indent)
        .subsequent_indent(subsequent_indent);
    textwrap::wrap(text, options).into_iter().map(|line| line.into_owned()).collect()
}

/// Word-wrap `text` to `width` at a fixed indent, preserving explicit
/// newlines: each author-written line wraps independently, so two
/// paragraphs never merge into one block.
pub fn wrap_preserving_newlines(text: &str, width: usize, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let options = textwrap::Options::new(width.max(1)).initial_indent(&pad).subsequent_indent(&pad);
    text.split('\n').map(|line| textwrap::fill(line, options.clone())).collect::<Vec<_>>().join("\n")
}

/// Lay out short tokens in aligned columns, column-major, within
/// `width` total columns. Returns the finished lines, indent included.
pub fn colify(items: &[String], indent: usize, width: usize) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }

    let longest = items.iter().map(|s| display_width(s)).max().unwrap_or(0);
    let col_width = longest + 2;
    let available = width.saturating_sub(indent).max(1);
    let cols = (available / col_width).max(1);
    let rows = items.len().div_ceil(cols);

    let pad = " ".repeat(indent);
    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut line = pad.clone();
        for col in 0..cols {
            let idx = col * rows + row;
            if idx >= items.len() {
                break;
            }
            let item = &items[idx];
            line.push_str(item);
            // No trailing spaces after the last item on the line
            if idx + rows < items.len() {
                line.push_str(&" ".repeat(col_width - display_width(item)));
            }
        }
        lines.push(line);
    }
    lines
}

//
// Styled Line Model
//

/// Semantic text styles used by the report layout code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// Section titles
    Header,
    /// Version numbers
    Version,
    /// Variant name and default
    VariantName,
    /// Variant value lists
    Values,
    /// The `when` keyword of conditional definitions
    When,
    /// Marker for non-divergent conditional definitions
    Same,
    /// Marker for divergent conditional definitions
    Different,
}

impl Style {
    /// Terminal color for this style, None for plain text
    fn color(self) -> Option<Color> {
        match self {
            Style::Plain => None,
            Style::Header => Some(color::BRIGHT_BLUE),
            Style::Version => Some(color::CYAN),
            Style::VariantName => Some(color::CYAN),
            Style::Values => Some(color::CYAN),
            Style::When => Some(color::BRIGHT_BLUE),
            Style::Same => Some(color::GREEN),
            Style::Different => Some(color::RED),
        }
    }

    fn bold(self) -> bool {
        matches!(self, Style::Header | Style::When)
    }
}

/// One styled run of text within a report line
#[derive(Debug, Clone)]
pub struct Span {
    pub style: Style,
    pub text: String,
}

impl Span {
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Span { style, text: text.into() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Span::new(Style::Plain, text)
    }

    pub fn header(text: impl Into<String>) -> Self {
        Span::new(Style::Header, text)
    }
}

/// ANSI foreground code for a term color constant
fn ansi_fg(c: Color) -> u32 {
    if c < 8 { 30 + c } else { 90 + (c - 8) }
}

/// Writer for report output - configurable for color/plain text
pub struct ReportWriter<W: Write> {
    pub(crate) writer: W,
    use_colors: bool,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new report writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Write one span, applying its style when colors are enabled
    fn write_span(&mut self, span: &Span) -> io::Result<()> {
        match span.style.color() {
            Some(c) if self.use_colors => {
                if span.style.bold() {
                    write!(self.writer, "\x1b[1m")?;
                }
                write!(self.writer, "\x1b[{}m{}\x1b[0m", ansi_fg(c), span.text)
            }
            _ => write!(self.writer, "{}", span.text),
        }
    }

    /// Write a full line of spans followed by a newline
    pub fn line(&mut self, spans: &[Span]) -> io::Result<()> {
        for span in spans {
            self.write_span(span)?;
        }
        writeln!(self.writer)
    }

    /// Write a plain text line
    pub fn plain_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Write a blank line
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Write a section title line, e.g. "Tags:"
    pub fn title(&mut self, text: &str) -> io::Result<()> {
        self.line(&[Span::header(text)])
    }

    /// Write a section title with trailing plain text on the same line
    pub fn title_with(&mut self, title: &str, rest: &str) -> io::Result<()> {
        self.line(&[Span::header(title), Span::plain(rest)])
    }
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
