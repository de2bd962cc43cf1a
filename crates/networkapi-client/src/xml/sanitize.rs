//! Text transforms applied around the XML codec

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static CHAR_REFERENCE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"&#(?:[xX]([0-9a-fA-F]+)|([0-9]+));"));

/// Characters XML 1.0 forbids (or discourages) in documents
fn is_illegal(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}'
            | '\u{B}'
            | '\u{C}'
            | '\u{E}'..='\u{1F}'
            | '\u{7F}'..='\u{84}'
            | '\u{86}'..='\u{9F}'
            | '\u{FFFE}'
            | '\u{FFFF}'
    )
}

fn is_illegal_code_point(code: u32) -> bool {
    match char::from_u32(code) {
        Some(c) => is_illegal(c),
        // surrogates and values past U+10FFFF
        None => true,
    }
}

/// Replace illegal XML characters with `?`.
///
/// Covers literal control characters as well as numeric character references that
/// point at control characters or unpaired surrogates (`&#xD800;`). Bodies that were
/// not valid UTF-8 have already had their bad sequences replaced during lossy decoding.
pub fn sanitize(input: &str) -> Cow<'_, str> {
    let literal: Cow<'_, str> = if input.chars().any(is_illegal) {
        Cow::Owned(input.chars().map(|c| if is_illegal(c) { '?' } else { c }).collect())
    } else {
        Cow::Borrowed(input)
    };

    let Ok(pattern) = CHAR_REFERENCE.as_ref() else {
        return literal;
    };
    if !pattern.is_match(&literal) {
        return literal;
    }

    let replaced = pattern.replace_all(&literal, |caps: &Captures<'_>| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            (None, None) => None,
        };
        match code {
            Some(code) if is_illegal_code_point(code) => "?".to_string(),
            // the XML reader only accepts the lowercase hex form
            Some(code) if caps.get(1).is_some() => format!("&#x{code:X};"),
            Some(_) => caps[0].to_string(),
            None => "?".to_string(),
        }
    });
    Cow::Owned(replaced.into_owned())
}

/// Double every `%` in outgoing text
pub fn escape_percent(text: &str) -> Cow<'_, str> {
    if text.contains('%') {
        Cow::Owned(text.replace('%', "%%"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Collapse `%%` back to `%` in incoming text
pub fn unescape_percent(text: &str) -> Cow<'_, str> {
    if text.contains("%%") {
        Cow::Owned(text.replace("%%", "%"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_control_characters() {
        assert_eq!(sanitize("ok\u{1}value\u{1F}"), "ok?value?");
        assert_eq!(sanitize("tab\tnewline\ncr\r"), "tab\tnewline\ncr\r");
    }

    #[test]
    fn test_sanitize_character_references() {
        assert_eq!(sanitize("a&#xD800;b"), "a?b");
        assert_eq!(sanitize("a&#1;b"), "a?b");
        assert_eq!(sanitize("a&#233;b"), "a&#233;b");
        assert_eq!(sanitize("a&#x41;b"), "a&#x41;b");
    }

    #[test]
    fn test_sanitize_uppercase_hex_references() {
        assert_eq!(sanitize("a&#X1;b"), "a?b");
        assert_eq!(sanitize("a&#XD800;b"), "a?b");
        assert_eq!(sanitize("a&#X41;b"), "a&#x41;b");
    }

    #[test]
    fn test_sanitize_borrows_clean_input() {
        assert!(matches!(sanitize("<a>clean</a>"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_percent_escaping() {
        assert_eq!(escape_percent("50%"), "50%%");
        assert_eq!(unescape_percent("50%%"), "50%");
        assert_eq!(unescape_percent(&escape_percent("a%%b%")), "a%%b%");
    }
}
