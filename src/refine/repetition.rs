/*!
 * Pass 4: pronoun and reference repetition fixing.
 *
 * Machine translations frequently double short function words ("he he said",
 * "the the gate"). This pass collapses adjacent duplicates matching the fixed
 * repetition catalog. It also exposes a gender-inference signal for character
 * names; the signal is auxiliary and does not rewrite text.
 */

use crate::refine::patterns;
use crate::refine::result::{Change, ChangeKind};

/// Collapse adjacent duplicate tokens matching the repetition catalog.
///
/// A matched pair is collapsed to its first occurrence only when both tokens
/// are the same word ignoring case; mixed pairs like "he it" are left alone.
pub fn apply(text: &str) -> (String, Option<Change>) {
    let mut current = text.to_string();

    for pattern in patterns::REPETITION_PATTERNS.iter() {
        current = pattern
            .replace_all(&current, |caps: &regex::Captures| collapse_pair(&caps[0]))
            .into_owned();
    }

    let change = (current != text).then(|| {
        Change::new(
            ChangeKind::Pronoun,
            "Fixed pronoun and reference repetition",
        )
    });
    (current, change)
}

/// Collapse a two-token match to its first token if both are the same word.
fn collapse_pair(matched: &str) -> String {
    let words: Vec<&str> = matched.split_whitespace().collect();
    if words.len() >= 2 && words[0].eq_ignore_ascii_case(words[1]) {
        words[0].to_string()
    } else {
        matched.to_string()
    }
}

/// Pronoun inferred for a character from surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pronoun {
    /// Male indicators dominate
    He,
    /// Female indicators dominate
    She,
    /// No clear signal
    They,
}

impl Pronoun {
    /// The pronoun as text.
    pub fn as_str(self) -> &'static str {
        match self {
            Pronoun::He => "he",
            Pronoun::She => "she",
            Pronoun::They => "they",
        }
    }
}

/// Infer the likely pronoun for a character from its surrounding context.
///
/// Counts gendered indicator words appearing as tokens in the context and
/// returns the dominant side, defaulting to neutral on a tie. Auxiliary
/// signal only: no pass currently rewrites pronouns based on it.
pub fn infer_pronoun(context: &str) -> Pronoun {
    let tokens: Vec<String> = context
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .collect();

    let male = patterns::MALE_INDICATORS
        .iter()
        .filter(|ind| tokens.iter().any(|t| t == *ind))
        .count();
    let female = patterns::FEMALE_INDICATORS
        .iter()
        .filter(|ind| tokens.iter().any(|t| t == *ind))
        .count();

    if male > female {
        Pronoun::He
    } else if female > male {
        Pronoun::She
    } else {
        Pronoun::They
    }
}
