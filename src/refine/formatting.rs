/*!
 * Pass 1: formatting normalization.
 *
 * Collapses runaway whitespace, restores paragraph breaks, and fixes
 * punctuation spacing. Scraped machine translations routinely arrive with
 * doubled spaces, space-before-comma, and missing space after sentence ends.
 */

use std::sync::LazyLock;

use regex::Regex;

use crate::refine::result::{Change, ChangeKind};

static MULTI_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static EXTRA_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("Invalid blank line regex"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])\s*\n\s*([A-Z])").expect("Invalid paragraph regex"));

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.!?;:])").expect("Invalid punctuation regex"));

static SENTENCE_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])\s*([A-Z])").expect("Invalid sentence spacing regex"));

/// Normalize whitespace and punctuation spacing.
///
/// Returns the cleaned text and one change record if anything was altered.
pub fn apply(text: &str) -> (String, Option<Change>) {
    let mut cleaned = MULTI_WHITESPACE.replace_all(text, " ").into_owned();
    cleaned = EXTRA_BLANK_LINES.replace_all(&cleaned, "\n\n").into_owned();
    cleaned = PARAGRAPH_BREAK.replace_all(&cleaned, "$1\n\n$2").into_owned();
    cleaned = SPACE_BEFORE_PUNCT.replace_all(&cleaned, "$1").into_owned();
    cleaned = SENTENCE_SPACING.replace_all(&cleaned, "$1 $2").into_owned();
    let cleaned = cleaned.trim().to_string();

    let change = (cleaned != text)
        .then(|| Change::new(ChangeKind::Formatting, "Fixed spacing and punctuation formatting"));
    (cleaned, change)
}
