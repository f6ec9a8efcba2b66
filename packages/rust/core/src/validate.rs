//! Validation rules for interview answers.
//!
//! Every rule returns a [`ValidationError`] describing what to fix; the
//! interview prints it and asks again. Nothing here touches the network.

use std::sync::LazyLock;

use regex::Regex;

use profilegen_shared::{ToolCatalog, ToolId};

use crate::assembler::TYPING_LINE_SEPARATOR;

/// Minimum length (in characters) for the free-text paragraphs.
pub const MIN_PARAGRAPH_LEN: usize = 30;

/// A rejected answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} must be at least {min} characters (got {actual})")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("{field} contains language that isn't allowed")]
    Profanity { field: &'static str },

    #[error("'{0}' is not a 6-digit hex colour (e.g. 36BCF7 or #36BCF7)")]
    InvalidColor(String),

    #[error("enter at least one line, separated with ';'")]
    NoTypingLines,

    #[error("unsupported tools: {}", .0.join(", "))]
    UnknownTools(Vec<String>),
}

static PROFANITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:fuck(?:ing|er|ed)?|shit(?:ty)?|bitch(?:es)?|bastard|asshole|dick|cunt|piss(?:ed)?|crap|damn|wanker|bollocks)\b",
    )
    .expect("valid profanity regex")
});

/// Reject blank answers.
pub fn validate_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Require at least `min` characters once surrounding whitespace is removed.
pub fn validate_min_length(
    field: &'static str,
    value: &str,
    min: usize,
) -> Result<(), ValidationError> {
    let actual = value.trim().chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { field, min, actual });
    }
    Ok(())
}

/// Whole-word, case-insensitive match against the built-in word list.
pub fn contains_profanity(text: &str) -> bool {
    PROFANITY_RE.is_match(text)
}

pub fn validate_clean(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if contains_profanity(value) {
        return Err(ValidationError::Profanity { field });
    }
    Ok(())
}

/// Strip an optional leading `#` and require exactly six hex digits.
pub fn normalize_color(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(hex.to_string())
    } else {
        Err(ValidationError::InvalidColor(raw.trim().to_string()))
    }
}

/// Split the banner answer on `;`, dropping blank pieces.
pub fn parse_typing_lines(raw: &str) -> Result<Vec<String>, ValidationError> {
    let lines: Vec<String> = raw
        .split(TYPING_LINE_SEPARATOR)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    if lines.is_empty() {
        return Err(ValidationError::NoTypingLines);
    }
    Ok(lines)
}

/// Parse a comma-separated tool list into catalog-checked identifiers.
///
/// Order is preserved and repeats are dropped. Any identifier the catalog
/// doesn't know fails the whole answer so the user can correct it.
pub fn parse_tools(raw: &str, catalog: &ToolCatalog) -> Result<Vec<ToolId>, ValidationError> {
    let mut tools: Vec<ToolId> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();

    for piece in raw.split(',') {
        let Ok(id) = ToolId::new(piece) else {
            continue;
        };
        if !catalog.contains(id.as_str()) {
            if !unknown.iter().any(|u| u == id.as_str()) {
                unknown.push(id.to_string());
            }
            continue;
        }
        if !tools.contains(&id) {
            tools.push(id);
        }
    }

    if !unknown.is_empty() {
        return Err(ValidationError::UnknownTools(unknown));
    }
    Ok(tools)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ToolCatalog {
        [
            ("python", "python/python-original.svg"),
            ("rust", "rust/rust-original.svg"),
            ("git", "git/git-original.svg"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn blank_is_empty() {
        assert_eq!(
            validate_non_empty("name", "   "),
            Err(ValidationError::Empty { field: "name" })
        );
        assert!(validate_non_empty("name", "Ada").is_ok());
    }

    #[test]
    fn min_length_counts_chars_not_bytes() {
        let err = validate_min_length("about", "too short", MIN_PARAGRAPH_LEN).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: "about",
                min: 30,
                actual: 9
            }
        );

        // 30 multibyte characters pass.
        let accents = "é".repeat(30);
        assert!(validate_min_length("about", &accents, MIN_PARAGRAPH_LEN).is_ok());
    }

    #[test]
    fn min_length_ignores_padding() {
        let padded = format!("   {}   ", "a".repeat(29));
        assert!(validate_min_length("journey", &padded, MIN_PARAGRAPH_LEN).is_err());
    }

    #[test]
    fn profanity_is_whole_word() {
        assert!(contains_profanity("this is SHIT"));
        assert!(contains_profanity("damn, that compiled"));
        assert!(!contains_profanity("Dickens and Scunthorpe"));
        assert!(!contains_profanity("I write crapless code"));
        assert_eq!(
            validate_clean("about", "what the fuck"),
            Err(ValidationError::Profanity { field: "about" })
        );
    }

    #[test]
    fn color_strips_hash() {
        assert_eq!(normalize_color("#36BCF7").unwrap(), "36BCF7");
        assert_eq!(normalize_color(" a1b2c3 ").unwrap(), "a1b2c3");
    }

    #[test]
    fn color_rejects_names_and_bad_lengths() {
        assert!(normalize_color("blue").is_err());
        assert!(normalize_color("#fff").is_err());
        assert!(normalize_color("12345G").is_err());
        assert!(normalize_color("##123456").is_err());
    }

    #[test]
    fn typing_lines_split_on_semicolon() {
        assert_eq!(
            parse_typing_lines("Welcome!👋; I'm Kieran! ;;").unwrap(),
            vec!["Welcome!👋".to_string(), "I'm Kieran!".to_string()]
        );
        assert_eq!(parse_typing_lines(" ; "), Err(ValidationError::NoTypingLines));
    }

    #[test]
    fn tools_normalized_and_deduped() {
        let tools = parse_tools("Python, rust , PYTHON,,git", &catalog()).unwrap();
        let ids: Vec<&str> = tools.iter().map(ToolId::as_str).collect();
        assert_eq!(ids, vec!["python", "rust", "git"]);
    }

    #[test]
    fn unknown_tools_reported() {
        let err = parse_tools("python, haskell, Haskell, cobol", &catalog()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownTools(vec!["haskell".into(), "cobol".into()])
        );
        assert_eq!(err.to_string(), "unsupported tools: haskell, cobol");
    }

    #[test]
    fn empty_tool_answer_is_allowed() {
        assert!(parse_tools("", &catalog()).unwrap().is_empty());
    }
}
