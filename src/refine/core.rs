/*!
 * Refinement pipeline orchestration.
 *
 * The [`Refiner`] runs the ordered transformation passes over a text,
 * accumulates the change log, computes the confidence score, and reports
 * wall-clock timing. The whole pipeline sits behind a single fail-open
 * boundary: any internal failure surfaces as a well-formed result carrying
 * the original text, never as an error to the caller.
 */

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use log::{error, info};

use crate::analyzer::{HeuristicAnalyzer, LinguisticAnalyzer};
use crate::errors::RefineError;
use crate::refine::result::{Change, ChangeKind, GlossaryEntry, RefinementResult};
use crate::refine::{artifacts, confidence, formatting, glossary, grammar, repetition, structure, style};

/// Multi-pass refiner for machine-translated text.
///
/// Stateless per call; safe to share and invoke concurrently across
/// independent texts, bounded only by the analyzer backend's throughput.
#[derive(Debug, Clone)]
pub struct Refiner {
    analyzer: Arc<dyn LinguisticAnalyzer>,
}

impl Refiner {
    /// Create a refiner backed by the given analyzer.
    pub fn new(analyzer: Arc<dyn LinguisticAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Create a refiner backed by the built-in heuristic analyzer.
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(HeuristicAnalyzer::new()))
    }

    /// The analyzer backing this refiner.
    pub fn analyzer(&self) -> Arc<dyn LinguisticAnalyzer> {
        Arc::clone(&self.analyzer)
    }

    /// Refine a machine-translated text.
    ///
    /// Never fails: any internal fault is caught and returned as a result
    /// whose refined text equals the original, with a single `error` change
    /// and zero confidence, so downstream persistence of at least the
    /// original text is never blocked.
    pub async fn refine(&self, text: &str, glossary_entries: &[GlossaryEntry]) -> RefinementResult {
        let start = Instant::now();

        match self.run_passes(text, glossary_entries).await {
            Ok((refined, changes)) => {
                let confidence_score = confidence::score(&changes);
                info!(
                    "Refined text: {} change(s), confidence {:.2}",
                    changes.len(),
                    confidence_score
                );
                RefinementResult {
                    original_text: text.to_string(),
                    refined_text: refined,
                    changes,
                    confidence_score,
                    processing_time: start.elapsed().as_secs_f64(),
                }
            }
            Err(e) => {
                error!("Refinement failed, returning original text: {}", e);
                RefinementResult {
                    original_text: text.to_string(),
                    refined_text: text.to_string(),
                    changes: vec![Change::new(ChangeKind::Error, e.to_string())],
                    confidence_score: 0.0,
                    processing_time: start.elapsed().as_secs_f64(),
                }
            }
        }
    }

    /// Refine several independent texts concurrently.
    ///
    /// Each text runs through [`Refiner::refine`] with the same glossary, at
    /// most `max_concurrent` at a time. Results come back in input order and
    /// inherit the per-text fail-open behavior.
    pub async fn refine_many(
        &self,
        texts: &[String],
        glossary_entries: &[GlossaryEntry],
        max_concurrent: usize,
    ) -> Vec<RefinementResult> {
        stream::iter(texts)
            .map(|text| self.refine(text, glossary_entries))
            .buffered(max_concurrent.max(1))
            .collect()
            .await
    }

    /// Run the ordered passes, threading each pass's output into the next.
    async fn run_passes(
        &self,
        text: &str,
        glossary_entries: &[GlossaryEntry],
    ) -> Result<(String, Vec<Change>), RefineError> {
        let mut changes = Vec::new();

        let (mut current, change) = formatting::apply(text);
        changes.extend(change);

        let (next, artifact_changes) = artifacts::apply(&current);
        current = next;
        changes.extend(artifact_changes);

        if !glossary_entries.is_empty() {
            let (next, glossary_changes) = glossary::apply(&current, glossary_entries);
            current = next;
            changes.extend(glossary_changes);
        }

        let (next, change) = repetition::apply(&current);
        current = next;
        changes.extend(change);

        let (next, structure_changes) = structure::apply(self.analyzer.as_ref(), &current).await?;
        current = next;
        changes.extend(structure_changes);

        let (next, grammar_changes) = grammar::apply(self.analyzer.as_ref(), &current).await?;
        current = next;
        changes.extend(grammar_changes);

        let (next, change) = style::apply(&current);
        current = next;
        changes.extend(change);

        Ok((current, changes))
    }
}

impl Default for Refiner {
    fn default() -> Self {
        Self::with_defaults()
    }
}
