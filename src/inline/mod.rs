//! Inline token processing.
//!
//! Rewrites the inline markup of a single line into nested HTML tags.
//! Markup never crosses a line boundary.
//!
//! The passes run in a fixed order:
//! 1. Complex (two-character) tokens: `**`, `__`, `~~`
//! 2. Basic (one-character) tokens: `` ` ``, `*`, `_`
//! 3. Images, bare links, bracketed links
//!
//! Strong runs before italic so the single-character scan sees the tags
//! already inserted and does not re-match consumed `**`/`__` pairs.

mod basic;
mod complex;
mod links;

pub use basic::substitute_basic;
pub use complex::substitute_complex;
pub use links::{rewrite_bare_links, rewrite_images, rewrite_links};

use memchr::memmem;

use crate::Result;

/// An inline token and the HTML element it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRule {
    /// Literal marker, e.g. `**`.
    pub token: &'static str,
    /// HTML element name, e.g. `b`.
    pub tag: &'static str,
}

impl TokenRule {
    pub const fn new(token: &'static str, tag: &'static str) -> Self {
        Self { token, tag }
    }

    /// Whether the token occurs anywhere in `text`.
    #[inline]
    pub fn occurs_in(&self, text: &str) -> bool {
        memmem::find(text.as_bytes(), self.token.as_bytes()).is_some()
    }

    #[inline]
    pub(crate) fn open_tag(&self) -> String {
        format!("<{}>", self.tag)
    }

    #[inline]
    pub(crate) fn close_tag(&self) -> String {
        format!("</{}>", self.tag)
    }
}

/// Multi-character tokens, processed first and in this order.
pub const COMPLEX_RULES: [TokenRule; 3] = [
    TokenRule::new("**", "b"),
    TokenRule::new("__", "b"),
    TokenRule::new("~~", "del"),
];

/// Single-character tokens, processed after [`COMPLEX_RULES`].
pub const BASIC_RULES: [TokenRule; 3] = [
    TokenRule::new("`", "code"),
    TokenRule::new("*", "i"),
    TokenRule::new("_", "i"),
];

/// Process every inline construct of one line.
///
/// # Errors
/// Fails with [`crate::Error::UnterminatedToken`] or
/// [`crate::Error::AmbiguousNesting`] on malformed markup. The returned
/// error has no line number attached.
///
/// # Example
/// ```
/// let html = tinymark::inline::process_line("*combined __style__*").unwrap();
/// assert_eq!(html, "<i>combined <b>style</b></i>");
/// ```
pub fn process_line(line: &str) -> Result<String> {
    let mut text = line.to_owned();

    for rule in &COMPLEX_RULES {
        if rule.occurs_in(&text) {
            text = substitute_complex(&text, rule)?;
        }
    }

    for rule in &BASIC_RULES {
        if rule.occurs_in(&text) {
            text = substitute_basic(&text, rule)?;
        }
    }

    let text = rewrite_images(&text);
    let text = rewrite_bare_links(&text);
    Ok(rewrite_links(&text).into_owned())
}

/// Whether the character at `pos` is preceded by a backslash.
#[inline]
pub(crate) fn is_escaped(chars: &[char], pos: usize) -> bool {
    pos.checked_sub(1).and_then(|prev| chars.get(prev)) == Some(&'\\')
}

/// Whether `token` starts at char index `pos`.
#[inline]
pub(crate) fn token_at(chars: &[char], pos: usize, token: &str) -> bool {
    let mut idx = pos;
    for expected in token.chars() {
        if chars.get(idx) != Some(&expected) {
            return false;
        }
        idx += 1;
    }
    true
}
