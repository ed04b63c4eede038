//! Block modes and the transition between them.

use crate::render::HtmlWriter;

/// The block element currently being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No block is open.
    #[default]
    Idle,
    /// `<p>`, consecutive plain lines joined by a space.
    Paragraph,
    /// `<ul>` of `- ` items.
    List,
    /// `<pre>` between two fences.
    Code,
    /// `<blockquote>` of `> ` lines.
    Blockquote,
}

impl Mode {
    /// HTML element wrapping this mode, `None` for [`Mode::Idle`].
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Paragraph => Some("p"),
            Self::List => Some("ul"),
            Self::Code => Some("pre"),
            Self::Blockquote => Some("blockquote"),
        }
    }
}

/// Switch from `current` to `next`, writing the tags that close the old
/// block and open the new one. Nothing is written when the modes match.
///
/// Returns whether a transition happened.
pub fn complete_mode(current: &mut Mode, next: Mode, out: &mut HtmlWriter) -> bool {
    if *current == next {
        return false;
    }
    if let Some(tag) = current.tag() {
        out.close_tag(tag);
    }
    if let Some(tag) = next.tag() {
        out.open_tag(tag);
    }
    *current = next;
    true
}
