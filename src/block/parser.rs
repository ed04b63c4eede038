//! Block parser implementation.

use tracing::{debug, trace};

use super::mode::{Mode, complete_mode};
use crate::highlight::Highlighter;
use crate::render::HtmlWriter;
use crate::{Options, Result, inline};

/// Marker that opens and closes a code block.
const FENCE: &str = "```";

/// Trimmed together with whitespace so a BOM-prefixed first line still parses.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Deepest heading level; longer `#` runs clamp to it.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Block parser state.
pub struct BlockParser<'a> {
    /// Input document.
    input: &'a str,
    /// Conversion options.
    options: &'a Options,
    /// Collaborator for lines inside a fence.
    highlighter: &'a dyn Highlighter,
    /// Output buffer.
    out: HtmlWriter,
    /// Current block mode.
    mode: Mode,
    /// Whether the previous blockquote line was a `<br>`.
    previous_line_break: bool,
    /// Language of the current code block.
    language: String,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a str, options: &'a Options, highlighter: &'a dyn Highlighter) -> Self {
        Self {
            input,
            options,
            highlighter,
            out: HtmlWriter::with_capacity_for(input.len()),
            mode: Mode::Idle,
            previous_line_break: false,
            language: options.default_language.clone(),
        }
    }

    /// Convert the whole document.
    ///
    /// # Errors
    /// The first inline error aborts the conversion. It carries the 1-based
    /// line it was found on.
    pub fn parse(mut self) -> Result<String> {
        for (index, line) in self.input.split('\n').enumerate() {
            trace!(line = index + 1, mode = ?self.mode, "parsing line");
            self.parse_line(line).map_err(|err| err.at_line(index + 1))?;
        }

        // Close whatever is still open, including an unterminated fence
        self.transition(Mode::Idle);
        Ok(self.out.into_string())
    }

    /// Parse a single line.
    fn parse_line(&mut self, line: &str) -> Result<()> {
        if let Some(info) = line.strip_prefix(FENCE) {
            self.toggle_fence(info);
            return Ok(());
        }

        if self.mode == Mode::Code {
            let html = self.highlighter.highlight(line, &self.language);
            self.out.write_str(&html);
            self.out.write_char('\n');
            return Ok(());
        }

        let line = line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
        if line == "---" || line == "___" {
            self.transition(Mode::Idle);
            self.out.write_str("<hr>");
            return Ok(());
        }
        if line.is_empty() {
            self.transition(Mode::Idle);
            return Ok(());
        }

        let text = inline::process_line(line)?;

        if let Some(rest) = text.strip_prefix('#') {
            self.heading(rest);
        } else if let Some(rest) = text.strip_prefix('-') {
            self.transition(Mode::List);
            self.out.open_tag("li");
            self.out.write_str(rest.trim());
            self.out.close_tag("li");
        } else if let Some(rest) = text.strip_prefix('>') {
            self.blockquote(rest.trim());
        } else {
            let continuing = self.mode == Mode::Paragraph;
            self.transition(Mode::Paragraph);
            if continuing {
                self.out.write_char(' ');
            }
            self.out.write_str(&text);
        }

        Ok(())
    }

    /// Open a code block, or close the one that is open.
    fn toggle_fence(&mut self, info: &str) {
        if self.mode == Mode::Code {
            self.transition(Mode::Idle);
            return;
        }

        let info = info.trim();
        self.language = if info.is_empty() {
            self.options.default_language.clone()
        } else {
            info.to_owned()
        };
        debug!(language = %self.language, "code fence opened");
        self.transition(Mode::Code);
    }

    /// `rest` follows the first `#`.
    fn heading(&mut self, rest: &str) {
        let extra = rest.bytes().take_while(|&b| b == b'#').count();
        let level = (extra + 1).min(MAX_HEADING_LEVEL);
        let content = rest.get(extra..).unwrap_or_default().trim();

        self.transition(Mode::Idle);
        self.out.write_heading(level, content);
    }

    fn blockquote(&mut self, content: &str) {
        let continuing = self.mode == Mode::Blockquote;
        self.transition(Mode::Blockquote);

        if content.is_empty() {
            self.out.write_str("<br>");
        } else {
            if continuing && !self.previous_line_break {
                self.out.write_char(' ');
            }
            self.out.write_str(content);
        }
        self.previous_line_break = content.is_empty();
    }

    fn transition(&mut self, next: Mode) {
        let from = self.mode;
        if complete_mode(&mut self.mode, next, &mut self.out) {
            debug!(?from, to = ?next, "block mode transition");
        }
    }
}
