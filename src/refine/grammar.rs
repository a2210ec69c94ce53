/*!
 * Pass 6: grammar correction.
 *
 * Asks the linguistic analyzer for a corrected candidate per sentence, then
 * accepts the candidate only if it passes the improvement filter. A failing
 * or unavailable backend degrades to the unmodified sentence.
 */

use log::warn;

use crate::analyzer::LinguisticAnalyzer;
use crate::errors::RefineError;
use crate::refine::result::{Change, ChangeKind};

/// Sentences with this many tokens or fewer are not worth correcting.
const MIN_SENTENCE_TOKENS: usize = 3;

/// A candidate longer than this ratio of the original's character length is
/// treated as runaway generation and rejected.
const MAX_LENGTH_RATIO: f32 = 1.5;

/// A candidate with fewer than this ratio of the original's tokens is treated
/// as truncated output and rejected.
const MIN_TOKEN_RATIO: f32 = 0.8;

/// Correct grammar sentence by sentence through the analyzer.
///
/// Emits one change record per sentence whose candidate was accepted.
/// Analyzer failures are recovered locally: a per-sentence backend failure
/// falls back to the original sentence, and a segmentation failure skips the
/// whole pass, handing the text on unchanged.
pub async fn apply(
    analyzer: &dyn LinguisticAnalyzer,
    text: &str,
) -> Result<(String, Vec<Change>), RefineError> {
    let annotation = match analyzer.segment_and_annotate(text).await {
        Ok(annotation) => annotation,
        Err(e) => {
            warn!("Segmentation failed, skipping grammar pass: {}", e);
            return Ok((text.to_string(), Vec::new()));
        }
    };
    let mut changes = Vec::new();
    let mut corrected = Vec::with_capacity(annotation.sentences.len());

    for sentence in &annotation.sentences {
        if sentence.split_whitespace().count() <= MIN_SENTENCE_TOKENS {
            corrected.push(sentence.clone());
            continue;
        }

        match analyzer.correct_grammar(sentence).await {
            Ok(candidate) if is_improvement(sentence, &candidate) => {
                changes.push(Change::new(ChangeKind::Grammar, "Corrected grammar in sentence"));
                corrected.push(candidate);
            }
            Ok(_) => corrected.push(sentence.clone()),
            Err(e) => {
                warn!("Grammar correction failed, keeping sentence as-is: {}", e);
                corrected.push(sentence.clone());
            }
        }
    }

    Ok((corrected.join(" "), changes))
}

/// Improvement filter for grammar candidates.
///
/// Rejects runaway generation (too long), no-ops (case-insensitively equal),
/// and truncation (too few tokens).
fn is_improvement(original: &str, candidate: &str) -> bool {
    let original_chars = original.chars().count() as f32;
    let candidate_chars = candidate.chars().count() as f32;
    if candidate_chars > original_chars * MAX_LENGTH_RATIO {
        return false;
    }

    if candidate.to_lowercase() == original.to_lowercase() {
        return false;
    }

    let original_tokens = original.split_whitespace().count() as f32;
    let candidate_tokens = candidate.split_whitespace().count() as f32;
    candidate_tokens >= original_tokens * MIN_TOKEN_RATIO
}
