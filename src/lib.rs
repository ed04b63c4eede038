//! tinymark: line-oriented markup to HTML converter
//!
//! The conversion runs two passes per line:
//! - a block mode machine that decides paragraph, list, blockquote, code,
//!   heading and rule boundaries one line at a time
//! - an inline token processor that rewrites emphasis, strong, strike, code
//!   spans, images and links inside one trimmed line
//!
//! Malformed inline markup fails the whole document; there is no partial
//! output. Lines inside a code fence bypass inline processing and go to a
//! [`Highlighter`].
//!
//! # Example
//! ```
//! let html = tinymark::to_html("# Header\nHere is some text.").unwrap();
//! assert_eq!(html, "<h1>Header</h1><p>Here is some text.</p>");
//! ```

pub mod block;
pub mod error;
pub mod highlight;
pub mod inline;
pub mod render;

// Re-export primary types
pub use block::{BlockParser, Mode};
pub use error::{Error, Result};
pub use highlight::{Highlighter, PlainHighlighter};
#[cfg(feature = "highlighting")]
pub use highlight::SyntectHighlighter;
pub use render::HtmlWriter;

/// Fence language used when a fence line names none.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Conversion options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Language handed to the highlighter for fences without one.
    pub default_language: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

/// Convert markup to HTML.
///
/// Code blocks are escaped but not colored.
///
/// # Errors
/// Fails on malformed inline markup, see [`Error`].
pub fn to_html(input: &str) -> Result<String> {
    to_html_with_options(input, &Options::default())
}

/// Convert markup to HTML with options.
///
/// # Errors
/// Fails on malformed inline markup, see [`Error`].
pub fn to_html_with_options(input: &str, options: &Options) -> Result<String> {
    to_html_with_highlighter(input, options, &PlainHighlighter)
}

/// Convert markup to HTML, coloring code blocks with `highlighter`.
///
/// # Errors
/// Fails on malformed inline markup, see [`Error`].
pub fn to_html_with_highlighter(
    input: &str,
    options: &Options,
    highlighter: &dyn Highlighter,
) -> Result<String> {
    BlockParser::new(input, options, highlighter).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        let input = "# Header\nHere is some text.\nThis is the second sentence.\n\nThis is the second paragraph.";
        assert_eq!(
            to_html(input).unwrap(),
            "<h1>Header</h1><p>Here is some text. This is the second sentence.</p><p>This is the second paragraph.</p>"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html("").unwrap(), "");
        assert_eq!(to_html("\n\n  \n").unwrap(), "");
    }

    #[test]
    fn test_default_options() {
        assert_eq!(Options::default().default_language, "javascript");
    }

    #[test]
    fn test_code_block_is_escaped() {
        assert_eq!(
            to_html("```\na < b\n```").unwrap(),
            "<pre>a &lt; b\n</pre>"
        );
    }

    #[test]
    fn test_custom_highlighter() {
        let highlighter = |code: &str, language: &str| format!("<span class=\"{language}\">{code}</span>");
        let html = to_html_with_highlighter("```rust\nfn main() {}\n```", &Options::default(), &highlighter)
            .unwrap();
        assert_eq!(html, "<pre><span class=\"rust\">fn main() {}</span>\n</pre>");
    }

    #[test]
    fn test_error_aborts_document() {
        let err = to_html("# ok\n\n**never closed").unwrap_err();
        assert_eq!(err, Error::UnterminatedToken { token: "**", line: 3 });
    }
}
