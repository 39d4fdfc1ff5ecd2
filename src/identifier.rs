//! Identifier validation and namespace folding for the target language

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ScaffoldError;
use crate::options::LanguageOptions;

/// Get the compiled identifier regex
fn identifier_regex() -> &'static Regex {
    static IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid identifier regex")
    })
}

/// Check whether a name has valid identifier shape
pub fn is_valid_identifier(name: &str) -> bool {
    identifier_regex().is_match(name)
}

/// Validate a name as an identifier in the target language
///
/// Rejects names with invalid shape (leading digit, punctuation, empty) and
/// names reserved by the language.
pub fn validate_identifier(name: &str, language: &LanguageOptions) -> Result<(), ScaffoldError> {
    if !is_valid_identifier(name) || language.is_reserved(name) {
        return Err(ScaffoldError::InvalidIdentifier {
            name: name.to_string(),
            language: language.name.clone(),
        });
    }
    Ok(())
}

/// Fold a schema or namespace tag into a single path-safe segment
///
/// Dot-separated parts are each sanitized (characters outside `[A-Za-z0-9_]`
/// become `_`, a leading digit gains a `_` prefix), empty parts are dropped,
/// and the rest are rejoined with `.`.
pub fn fold_namespace(tag: &str) -> String {
    tag.split('.')
        .filter(|part| !part.is_empty())
        .map(sanitize_part)
        .collect::<Vec<_>>()
        .join(".")
}

fn sanitize_part(part: &str) -> String {
    let mut sanitized = String::with_capacity(part.len() + 1);
    for (i, c) in part.chars().enumerate() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if i == 0 && c.is_ascii_digit() {
                sanitized.push('_');
            }
            sanitized.push(c);
        } else {
            sanitized.push('_');
        }
    }
    sanitized
}
