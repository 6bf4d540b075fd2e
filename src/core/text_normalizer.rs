//! Text Normalization
//!
//! Turns raw user input into the ordered list of words eligible for plural
//! classification, or a [`Rejection`] explaining why nothing can be sent.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use super::stopwords;
use crate::i18n::Lang;

/// Arabic comma (U+060C)
pub const ARABIC_COMMA: char = '،';

lazy_static! {
    /// A run of one or more comma delimiters, Latin or Arabic
    static ref DELIMITER_RUN: Regex = Regex::new(r"[,،]+").expect("valid delimiter regex");
    /// Arabic block letters (with their combining marks) and whitespace only.
    /// Arabic-Indic digits, punctuation and format characters are excluded.
    static ref ARABIC_WORD: Regex =
        Regex::new(r"^[[\x{0600}-\x{06FF}&&[\p{L}\p{M}]]\s]+$").expect("valid arabic word regex");
}

/// Reasons input is refused before any request is made
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Whitespace present but no comma: words must be comma-separated
    #[error("words must be comma-separated, not space-separated")]
    AmbiguousDelimiter,

    /// Nothing survived filtering
    #[error("no valid words to classify")]
    NoValidWords,
}

impl Rejection {
    /// Catalog key for this rejection
    pub fn key(&self) -> &'static str {
        match self {
            Rejection::AmbiguousDelimiter => "rejection.ambiguous_delimiter",
            Rejection::NoValidWords => "rejection.no_valid_words",
        }
    }

    /// User-facing message in the given language
    pub fn message(&self, lang: Lang) -> &'static str {
        crate::i18n::lookup(lang, self.key()).unwrap_or(match self {
            Rejection::AmbiguousDelimiter => "words must be comma-separated, not space-separated",
            Rejection::NoValidWords => "no valid words to classify",
        })
    }
}

/// Normalize raw input into classification-eligible words.
///
/// Both `,` and `،` delimit words and runs of delimiters collapse. Input
/// without any comma is treated as a single word, unless it contains
/// whitespace, in which case it is rejected as ambiguous. Order and
/// duplicates are preserved.
pub fn normalize(raw: &str) -> Result<Vec<String>, Rejection> {
    let cleaned = raw.replace(ARABIC_COMMA, ",");
    let cleaned = cleaned.trim();

    let has_comma = cleaned.contains(',');
    if !has_comma && cleaned.chars().any(char::is_whitespace) {
        debug!("Rejecting space-separated input: '{}'", cleaned);
        return Err(Rejection::AmbiguousDelimiter);
    }

    let candidates: Vec<&str> = if has_comma {
        DELIMITER_RUN.split(cleaned).map(str::trim).collect()
    } else {
        vec![cleaned]
    };

    let words: Vec<String> = candidates
        .into_iter()
        .filter(|candidate| {
            let keep = !candidate.is_empty()
                && is_arabic_word(candidate)
                && !stopwords::is_stop_word(candidate);
            if !keep && !candidate.is_empty() {
                debug!("Dropping candidate '{}'", candidate);
            }
            keep
        })
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        return Err(Rejection::NoValidWords);
    }

    debug!("Normalized {} word(s)", words.len());
    Ok(words)
}

/// True if the candidate is one or more Arabic letters, diacritics or
/// whitespace and nothing else.
///
/// Embedded spaces are accepted, so a multi-word phrase between commas passes.
pub fn is_arabic_word(candidate: &str) -> bool {
    ARABIC_WORD.is_match(candidate)
}
