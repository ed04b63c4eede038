//! Block-level conversion.
//!
//! The block parser is line-oriented and handles:
//! - Fenced code blocks
//! - Horizontal rules
//! - Headings
//! - Lists
//! - Blockquotes
//! - Paragraphs
//!
//! Every block boundary goes through [`complete_mode`].

mod mode;
mod parser;

pub use mode::{Mode, complete_mode};
pub use parser::{BlockParser, MAX_HEADING_LEVEL};
