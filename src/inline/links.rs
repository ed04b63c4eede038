//! Image and link rewriting.
//!
//! Runs after token substitution, so alt and link text may already hold
//! inline tags. Attribute values are copied verbatim.

use std::borrow::Cow;
use std::sync::LazyLock;

use memchr::memmem;
use regex::Regex;

/// `![alt](url)`. The alt group is greedy and the url has no whitespace.
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)!\[(.*)\]\((\S*)\)").expect("invalid image regex"));

/// Bare `http(s)://` URL bounded by whitespace or the line edges.
static BARE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\s|^)(https?://\S+)(\s|$)").expect("invalid bare link regex")
});

/// `[text](url)`.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[(.*)\]\((\S*)\)").expect("invalid link regex"));

/// Rewrite `![alt](url)` into `<img src="url" alt="alt">`.
pub fn rewrite_images(text: &str) -> Cow<'_, str> {
    if memmem::find(text.as_bytes(), b"![").is_none() {
        return Cow::Borrowed(text);
    }
    IMAGE.replace_all(text, r#"<img src="${2}" alt="${1}">"#)
}

/// Wrap bare URLs in an anchor whose text is the URL itself.
pub fn rewrite_bare_links(text: &str) -> Cow<'_, str> {
    if memmem::find(text.as_bytes(), b"://").is_none() {
        return Cow::Borrowed(text);
    }
    BARE_LINK.replace_all(text, r#"${1}<a href="${2}">${2}</a>${3}"#)
}

/// Rewrite `[text](url)` into `<a href="url">text</a>`.
pub fn rewrite_links(text: &str) -> Cow<'_, str> {
    if memmem::find(text.as_bytes(), b"](").is_none() {
        return Cow::Borrowed(text);
    }
    LINK.replace_all(text, r#"<a href="${2}">${1}</a>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_alt_is_literal() {
        assert_eq!(
            rewrite_images("![Picture #1](http://lorempixel.com/400/200)"),
            r#"<img src="http://lorempixel.com/400/200" alt="Picture #1">"#
        );
    }

    #[test]
    fn image_without_url_keeps_empty_src() {
        assert_eq!(rewrite_images("![empty]()"), r#"<img src="" alt="empty">"#);
    }

    #[test]
    fn image_url_with_space_is_not_an_image() {
        assert_eq!(rewrite_images("![a](b c)"), "![a](b c)");
    }

    #[test]
    fn text_without_markers_is_borrowed() {
        assert!(matches!(rewrite_images("plain"), Cow::Borrowed("plain")));
        assert!(matches!(rewrite_bare_links("plain"), Cow::Borrowed("plain")));
        assert!(matches!(rewrite_links("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn bare_links() {
        assert_eq!(
            rewrite_bare_links("This is a link: https://www.google.com"),
            r#"This is a link: <a href="https://www.google.com">https://www.google.com</a>"#
        );
        assert_eq!(
            rewrite_bare_links("https://www.facebook.com/ - Facebook"),
            r#"<a href="https://www.facebook.com/">https://www.facebook.com/</a> - Facebook"#
        );
        assert_eq!(
            rewrite_bare_links("HTTP://EXAMPLE.COM"),
            r#"<a href="HTTP://EXAMPLE.COM">HTTP://EXAMPLE.COM</a>"#
        );
    }

    #[test]
    fn url_glued_to_text_is_not_linked() {
        assert_eq!(rewrite_bare_links("(https://a.b)"), "(https://a.b)");
        assert_eq!(rewrite_bare_links("ftp://a.b"), "ftp://a.b");
    }

    #[test]
    fn bracketed_links() {
        assert_eq!(
            rewrite_links("[Github](https://github.com/)"),
            r#"<a href="https://github.com/">Github</a>"#
        );
        assert_eq!(
            rewrite_links("I came across Google's [Code Prettifier](https://github.com/google/code-prettify)."),
            r#"I came across Google's <a href="https://github.com/google/code-prettify">Code Prettifier</a>."#
        );
    }

    #[test]
    fn bracketed_text_is_greedy() {
        assert_eq!(
            rewrite_links("[a](x) [b](y)"),
            r#"<a href="y">a](x) [b</a>"#
        );
    }
}
