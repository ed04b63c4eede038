//! Syntax highlighting for fenced code lines.
//!
//! The converter treats highlighting as an opaque call: each raw line inside
//! a fence is handed to a [`Highlighter`] together with the fence language,
//! and the result is appended verbatim. Highlighters never fail a
//! conversion; an unknown language degrades to escaped plain text.
//!
//! [`PlainHighlighter`] is always available. [`SyntectHighlighter`] needs the
//! `highlighting` feature.

/// Turns raw code into HTML.
pub trait Highlighter {
    /// Highlight `code` written in `language`.
    fn highlight(&self, code: &str, language: &str) -> String;
}

impl<F> Highlighter for F
where
    F: Fn(&str, &str) -> String,
{
    fn highlight(&self, code: &str, language: &str) -> String {
        self(code, language)
    }
}

/// Escapes the code and ignores the language.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: &str) -> String {
        html_escape::encode_text(code).into_owned()
    }
}

#[cfg(feature = "highlighting")]
pub use syntect_impl::SyntectHighlighter;

#[cfg(feature = "highlighting")]
mod syntect_impl {
    use syntect::highlighting::{Theme, ThemeSet};
    use syntect::html::highlighted_html_for_string;
    use syntect::parsing::SyntaxSet;

    use super::{Highlighter, PlainHighlighter};

    const THEME: &str = "InspiredGitHub";

    /// Inline-styled highlighting backed by syntect's default syntaxes.
    pub struct SyntectHighlighter {
        syntaxes: SyntaxSet,
        theme: Theme,
    }

    impl SyntectHighlighter {
        pub fn new() -> Self {
            let mut themes = ThemeSet::load_defaults();
            let theme = themes.themes.remove(THEME).unwrap_or_default();
            Self {
                syntaxes: SyntaxSet::load_defaults_newlines(),
                theme,
            }
        }
    }

    impl Default for SyntectHighlighter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Highlighter for SyntectHighlighter {
        fn highlight(&self, code: &str, language: &str) -> String {
            let syntax = self
                .syntaxes
                .find_syntax_by_token(language)
                .unwrap_or_else(|| {
                    tracing::warn!(language, "no syntax for language, highlighting as plain text");
                    self.syntaxes.find_syntax_plain_text()
                });

            match highlighted_html_for_string(code, &self.syntaxes, syntax, &self.theme) {
                Ok(html) => inner_content(&html).to_owned(),
                Err(error) => {
                    tracing::warn!(%error, language, "highlighting failed");
                    PlainHighlighter.highlight(code, language)
                }
            }
        }
    }

    /// Strip syntect's `<pre style="...">` wrapper and the newline after it;
    /// the converter opens its own `<pre>` at the fence.
    fn inner_content(html: &str) -> &str {
        let start = html.find('>').map_or(0, |i| i + 1);
        let end = html.rfind("</pre>").unwrap_or(html.len());
        html.get(start..end).unwrap_or(html).trim_start_matches('\n')
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn output_has_no_pre_wrapper() {
            let html = SyntectHighlighter::new().highlight("let i = 10;", "js");
            assert!(!html.contains("<pre"), "{html}");
            assert!(html.contains("<span"), "{html}");
        }

        #[test]
        fn fenced_lines_are_not_double_spaced() {
            let html = crate::to_html_with_highlighter(
                "```js\na\nb\n```",
                &crate::Options::default(),
                &SyntectHighlighter::new(),
            )
            .unwrap();
            assert!(html.starts_with("<pre><span"), "{html}");
            assert!(html.contains("a</span>\n<span"), "{html}");
            assert!(html.ends_with("b</span>\n</pre>"), "{html}");
            assert!(!html.contains("\n\n"), "{html}");
        }

        #[test]
        fn unknown_language_is_plain_text() {
            let html = SyntectHighlighter::new().highlight("a < b", "no-such-language");
            assert!(html.contains("&lt;"), "{html}");
        }
    }
}
