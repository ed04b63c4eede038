//! HTML output buffer.

/// Append-only HTML output buffer.
///
/// # Example
/// ```
/// use tinymark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.open_tag("p");
/// writer.write_str("Hello");
/// writer.close_tag("p");
///
/// assert_eq!(writer.into_string(), "<p>Hello</p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags add roughly a quarter on top of typical input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write text without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        self.out.push(c);
    }

    /// Write `<tag>`.
    #[inline]
    pub fn open_tag(&mut self, tag: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write `</tag>`.
    #[inline]
    pub fn close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write `<hN>content</hN>`. `level` must already be clamped to 1..=6.
    pub fn write_heading(&mut self, level: usize, content: &str) {
        self.out.push_str("<h");
        self.out.push_str(itoa_small(level));
        self.out.push('>');
        self.out.push_str(content);
        self.out.push_str("</h");
        self.out.push_str(itoa_small(level));
        self.out.push('>');
    }

    /// Consume the writer and return the HTML.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

/// Heading levels are single digits.
#[inline]
fn itoa_small(n: usize) -> &'static str {
    match n {
        1 => "1",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        _ => "6",
    }
}
