/*!
 * Pass 3: glossary consistency.
 *
 * Rewrites occurrences of caller-supplied original terms to their preferred
 * forms. Only proper-noun entry types (character, place, organization) are
 * substituted; the other types are glossary bookkeeping and never touch text.
 */

use log::debug;
use regex::Regex;

use crate::refine::result::{Change, ChangeKind, GlossaryEntry};

/// Apply glossary entries to the text in input order.
///
/// Substitution is case-insensitive and whole-word, one change record per
/// entry that actually fired (not per occurrence). Later entries act on text
/// already modified by earlier ones.
pub fn apply(text: &str, glossary: &[GlossaryEntry]) -> (String, Vec<Change>) {
    let mut changes = Vec::new();
    let mut current = text.to_string();

    for entry in glossary {
        if entry.original_term.is_empty()
            || entry.preferred_term.is_empty()
            || entry.original_term == entry.preferred_term
            || !entry.term_type.is_substitutable()
        {
            continue;
        }

        let pattern = format!(r"(?i)\b{}\b", regex::escape(&entry.original_term));
        let term_regex = match Regex::new(&pattern) {
            Ok(r) => r,
            Err(e) => {
                debug!("Skipping unusable glossary term '{}': {}", entry.original_term, e);
                continue;
            }
        };

        if term_regex.is_match(&current) {
            current = term_regex
                .replace_all(&current, entry.preferred_term.as_str())
                .into_owned();
            changes.push(Change::new(
                ChangeKind::Glossary,
                format!("Replaced '{}' with '{}'", entry.original_term, entry.preferred_term),
            ));
        }
    }

    (current, changes)
}
