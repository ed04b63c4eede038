//! Single-character token substitution (`` ` ``, `*`, `_`).
//!
//! Every unescaped occurrence toggles between an opening and a closing tag.

use super::{TokenRule, is_escaped, token_at};
use crate::{Error, Result};

/// Replace every unescaped `rule.token` with alternating open/close tags.
///
/// # Errors
/// Returns [`Error::UnterminatedToken`] when the line holds an odd number of
/// unescaped tokens.
pub fn substitute_basic(line: &str, rule: &TokenRule) -> Result<String> {
    let mut chars: Vec<char> = line.chars().collect();
    let token_len = rule.token.chars().count();
    let mut opening = true;
    let mut pos = 0;

    while pos < chars.len() {
        if is_escaped(&chars, pos) || !token_at(&chars, pos, rule.token) {
            pos += 1;
            continue;
        }

        let tag = if opening {
            rule.open_tag()
        } else {
            rule.close_tag()
        };
        let tag_len = tag.chars().count();
        chars.splice(pos..pos + token_len, tag.chars());
        pos += tag_len;
        opening = !opening;
    }

    if !opening {
        return Err(Error::unterminated(rule.token));
    }

    Ok(chars.into_iter().collect())
}
