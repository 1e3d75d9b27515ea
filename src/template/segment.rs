//! Segment parser: canonical string -> ordered text / variable segments.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `{{` + one or more ASCII word characters + `}}`
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("Invalid token regex pattern"));

/// A parsed unit of a canonical value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    /// Literal characters (never empty)
    Text { content: String },
    /// Placeholder reference, name matches `[A-Za-z0-9_]+`
    Variable { name: String },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            content: content.into(),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Segment::Variable { name: name.into() }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Segment::Variable { .. })
    }

    /// The variable name, if this is a variable segment
    pub fn name(&self) -> Option<&str> {
        match self {
            Segment::Variable { name } => Some(name),
            Segment::Text { .. } => None,
        }
    }

    /// Canonical text for this segment (variables re-wrapped in delimiters)
    pub fn to_canonical(&self) -> String {
        match self {
            Segment::Text { content } => content.clone(),
            Segment::Variable { name } => token_for(name),
        }
    }
}

/// A well-formed token located in a canonical string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch<'a> {
    /// Byte range of the whole `{{name}}` token
    pub range: Range<usize>,
    /// The name between the delimiters
    pub name: &'a str,
}

/// Wrap a variable name in token delimiters
pub fn token_for(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

/// Check whether `value` holds at least one well-formed token.
///
/// This is the guard that decides whether a full surface render is worth
/// doing at all.
pub fn contains_token(value: &str) -> bool {
    TOKEN_RE.is_match(value)
}

/// All well-formed tokens in `value`, leftmost-first and non-overlapping
pub fn find_tokens(value: &str) -> Vec<TokenMatch<'_>> {
    TOKEN_RE
        .captures_iter(value)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(TokenMatch {
                range: whole.range(),
                name: name.as_str(),
            })
        })
        .collect()
}

/// Split a canonical value into segments.
///
/// Text between tokens becomes a [`Segment::Text`] only when non-empty, so
/// adjacent tokens produce adjacent variables. An empty input yields no
/// segments. Malformed tokens (`{{first name}}`, a lone `{{`) stay inside
/// the surrounding text.
pub fn parse(value: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for token in find_tokens(value) {
        if token.range.start > last {
            segments.push(Segment::text(&value[last..token.range.start]));
        }
        segments.push(Segment::variable(token.name));
        last = token.range.end;
    }

    if last < value.len() {
        segments.push(Segment::text(&value[last..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_plain_text() {
        assert_eq!(parse("hello world"), vec![Segment::text("hello world")]);
    }

    #[test]
    fn test_parse_extracts_tokens() {
        assert_eq!(
            parse("Hi {{firstName}}, bye {{lastName}}"),
            vec![
                Segment::text("Hi "),
                Segment::variable("firstName"),
                Segment::text(", bye "),
                Segment::variable("lastName"),
            ]
        );
    }

    #[test]
    fn test_parse_adjacent_tokens() {
        assert_eq!(
            parse("{{a}}{{b}}"),
            vec![Segment::variable("a"), Segment::variable("b")]
        );
    }

    #[test]
    fn test_parse_space_inside_braces_is_literal() {
        assert_eq!(
            parse("Hi {{first name}}"),
            vec![Segment::text("Hi {{first name}}")]
        );
    }

    #[test]
    fn test_parse_unmatched_open_brace() {
        assert_eq!(parse("{{oops"), vec![Segment::text("{{oops")]);
    }

    #[test]
    fn test_parse_triple_braces_leftmost_first() {
        // `{{{a}}}` -> the regex finds `{{a}}` starting at index 1
        assert_eq!(
            parse("{{{a}}}"),
            vec![
                Segment::text("{"),
                Segment::variable("a"),
                Segment::text("}"),
            ]
        );
    }

    #[test]
    fn test_parse_non_ascii_word_is_literal() {
        assert_eq!(parse("{{näme}}"), vec![Segment::text("{{näme}}")]);
    }

    #[test]
    fn test_contains_token() {
        assert!(contains_token("x {{a_1}} y"));
        assert!(!contains_token("x {{}} y"));
        assert!(!contains_token("plain"));
    }

    #[test]
    fn test_find_tokens_ranges() {
        let tokens = find_tokens("ab{{x}}c");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].range, 2..7);
        assert_eq!(tokens[0].name, "x");
    }

    #[test]
    fn test_token_for() {
        assert_eq!(token_for("email"), "{{email}}");
        assert_eq!(Segment::variable("email").to_canonical(), "{{email}}");
    }
}
