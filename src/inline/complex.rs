//! Multi-character token substitution (`**`, `__`, `~~`).
//!
//! A closing token is the last one of a run, so in `***` the closer is the
//! final `**`. When an odd number of lone lead characters sits between an
//! opener and its closer, the boundary is ambiguous (`***x**` could give the
//! extra `*` to either side). The opener is shifted one character right if
//! the token repeats there, otherwise the closer is shifted one character
//! left. If neither applies the markup is rejected.

use super::{TokenRule, is_escaped, token_at};
use crate::{Error, Result};

/// Replace matched `rule.token` pairs with `<tag>...</tag>`.
///
/// # Errors
/// - [`Error::AmbiguousNesting`] when a pair cannot be disambiguated.
/// - [`Error::UnterminatedToken`] when the line ends with an open token.
pub fn substitute_complex(line: &str, rule: &TokenRule) -> Result<String> {
    let token = rule.token;
    let token_len = token.chars().count();
    let lead = token.chars().next();

    let mut chars: Vec<char> = line.chars().collect();
    let mut open: Option<usize> = None;
    // Unescaped lead characters seen since the opener
    let mut inside = 0usize;
    let mut pos = 0;

    while pos < chars.len() {
        let is_token = !is_escaped(&chars, pos)
            && (open.is_none() || !token_at(&chars, pos + 1, token))
            && token_at(&chars, pos, token);

        if !is_token {
            if open.is_some() && !is_escaped(&chars, pos) && chars.get(pos).copied() == lead {
                inside += 1;
            }
            pos += 1;
            continue;
        }

        let Some(mut start) = open.take() else {
            open = Some(pos);
            inside = 0;
            pos += token_len;
            continue;
        };

        let closing = pos;
        let mut end = pos;
        if inside % 2 == 1 {
            if token_at(&chars, start + 1, token) {
                start += 1;
            } else if end > 0 && token_at(&chars, end - 1, token) {
                end -= 1;
            } else {
                return Err(Error::ambiguous(token));
            }
        }

        let open_tag = rule.open_tag();
        let close_tag = rule.close_tag();
        let mut replacement: Vec<char> = open_tag.chars().collect();
        replacement.extend_from_slice(chars.get(start + token_len..end).unwrap_or_default());
        replacement.extend(close_tag.chars());

        chars.splice(start..end + token_len, replacement);
        // Resume from the unshifted closer advanced by both tag lengths, i.e.
        // `token_len` characters past the closing tag when nothing shifted.
        pos = closing + open_tag.chars().count() + close_tag.chars().count();
    }

    if open.is_some() {
        return Err(Error::unterminated(token));
    }

    Ok(chars.into_iter().collect())
}
