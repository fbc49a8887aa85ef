//! Text sanitization
//!
//! Removes emoji/symbol characters and normalizes whitespace before text
//! reaches the summarizer. Pure functions, no I/O.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Everything that is not a word character, whitespace, or basic punctuation
static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s.,!?;:'"()-]"#).expect("special-char pattern is valid"));

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Returns true for characters in the Unicode symbol categories So, Sm, Sk, Sc
///
/// Category-based rather than a hardcoded emoji list, so mathematical and
/// currency symbols are stripped along with emoji.
fn is_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::OtherSymbol
            | GeneralCategory::MathSymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::CurrencySymbol
    )
}

/// Sanitize raw input text
///
/// Three ordered steps: drop symbol-category characters, drop remaining
/// special characters, collapse whitespace runs and trim. Deterministic and
/// idempotent; any input produces a (possibly empty) output.
pub fn sanitize(text: &str) -> String {
    let without_symbols: String = text.chars().filter(|c| !is_symbol(*c)).collect();
    let without_special = SPECIAL_CHARS.replace_all(&without_symbols, "");
    let collapsed = WHITESPACE_RUNS.replace_all(&without_special, " ");
    collapsed.trim().to_string()
}
