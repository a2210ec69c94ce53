/*!
 * Pass 5: sentence-structure improvement.
 *
 * Splits run-on sentences at coordinating-conjunction comma joins. Sentence
 * boundaries come from the linguistic analyzer; the split heuristic itself is
 * purely lexical.
 */

use log::debug;

use crate::analyzer::LinguisticAnalyzer;
use crate::errors::RefineError;
use crate::refine::result::{Change, ChangeKind};

/// A sentence longer than this many space-delimited tokens is a split candidate.
const LONG_SENTENCE_TOKENS: usize = 40;

/// The left segment of a split must exceed this many tokens.
const MIN_LEFT_TOKENS: usize = 15;

/// Comma-joined coordinating conjunctions, tried in this order.
const SPLIT_POINTS: &[&str] = &[", and ", ", but ", ", or ", ", so ", ", yet "];

/// Split overly long sentences at logical points.
///
/// Emits one change record per sentence actually split. Sentences are
/// rejoined with single spaces.
pub async fn apply(
    analyzer: &dyn LinguisticAnalyzer,
    text: &str,
) -> Result<(String, Vec<Change>), RefineError> {
    let annotation = analyzer.segment_and_annotate(text).await?;
    let mut changes = Vec::new();
    let mut improved = Vec::with_capacity(annotation.sentences.len());

    for sentence in &annotation.sentences {
        if sentence.split_whitespace().count() > LONG_SENTENCE_TOKENS {
            match split_long_sentence(sentence) {
                Some(split) => {
                    debug!("Split long sentence ({} tokens)", sentence.split_whitespace().count());
                    changes.push(Change::new(ChangeKind::SentenceStructure, "Split overly long sentence"));
                    improved.push(split);
                }
                None => improved.push(sentence.clone()),
            }
        } else {
            improved.push(sentence.clone());
        }
    }

    Ok((improved.join(" "), changes))
}

/// Try to split a sentence at the first viable conjunction join point.
///
/// Viable means the left segment alone exceeds [`MIN_LEFT_TOKENS`] tokens.
/// Returns `None` when no join point qualifies.
fn split_long_sentence(sentence: &str) -> Option<String> {
    for split_point in SPLIT_POINTS {
        if let Some((left, right)) = sentence.split_once(split_point) {
            if left.split_whitespace().count() > MIN_LEFT_TOKENS {
                let first = left.trim();
                let second = capitalize_first(right.trim());
                return Some(format!("{}. {}", first, second));
            }
        }
    }
    None
}

/// Capitalize the first letter if it is not already uppercase.
fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            first.to_uppercase().collect::<String>() + chars.as_str()
        }
        _ => segment.to_string(),
    }
}
