/*!
 * Cross-chapter context tracking for naming consistency.
 *
 * The tracker accumulates entity statistics across a stream of chapters and
 * derives consistency suggestions: character names seen under several
 * spellings, with the first-seen form suggested as canonical.
 *
 * The tracker is shared mutable state and expects a single logical writer at
 * a time; keep one tracker per novel, mutated only by the orchestrator that
 * owns it.
 */

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::analyzer::{EntityLabel, LinguisticAnalyzer};
use crate::errors::AnalyzerError;

/// Aggregated statistics for one canonicalized named entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRecord {
    /// The surface form as first observed, casing preserved
    pub canonical_form: String,
    /// Distinct case-sensitive surface forms seen, in first-seen order
    pub variations: Vec<String>,
    /// Total sightings of any variation since the last reset
    pub frequency: usize,
}

impl EntityRecord {
    fn new(surface: &str) -> Self {
        Self {
            canonical_form: surface.to_string(),
            variations: vec![surface.to_string()],
            frequency: 1,
        }
    }

    fn record_sighting(&mut self, surface: &str) {
        self.frequency += 1;
        if !self.variations.iter().any(|v| v == surface) {
            self.variations.push(surface.to_string());
        }
    }
}

/// Per-chapter context captured by one update call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterContextEntry {
    /// Caller-assigned chapter number; not required to be unique or contiguous
    pub chapter_number: u32,
    /// Entity surface forms observed in the chapter, in document order
    pub entities: Vec<String>,
    /// Count of alphabetic tokens in the chapter
    pub word_count: usize,
}

/// Kind of a consistency suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// A character name appears under multiple spellings
    CharacterName,
}

/// A consistency suggestion derived from tracked state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// What kind of inconsistency this is
    pub kind: SuggestionKind,
    /// All surface forms observed for the entity
    pub variations: Vec<String>,
    /// The first-seen surface form, suggested as canonical
    pub suggested_canonical: String,
    /// Total sightings of the entity
    pub frequency: usize,
}

/// Summary of tracked state for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextReport {
    /// Number of distinct character names tracked
    pub character_count: usize,
    /// Number of distinct place names tracked
    pub place_count: usize,
    /// Number of distinct terms in the frequency table
    pub unique_terms: usize,
    /// Number of chapter updates applied since the last reset
    pub chapters_analyzed: usize,
}

/// Tracks entity names and term frequencies across chapters.
///
/// Tables are keyed by the lowercased surface form; iteration order is
/// first-sighting order.
#[derive(Debug)]
pub struct ContextTracker {
    analyzer: Arc<dyn LinguisticAnalyzer>,
    character_names: IndexMap<String, EntityRecord>,
    place_names: IndexMap<String, EntityRecord>,
    term_frequency: HashMap<String, usize>,
    chapters: Vec<ChapterContextEntry>,
}

impl ContextTracker {
    /// Create a tracker backed by the given analyzer.
    pub fn new(analyzer: Arc<dyn LinguisticAnalyzer>) -> Self {
        Self {
            analyzer,
            character_names: IndexMap::new(),
            place_names: IndexMap::new(),
            term_frequency: HashMap::new(),
            chapters: Vec::new(),
        }
    }

    /// Update tracked state from one chapter's text.
    ///
    /// Appends a chapter entry unconditionally: re-processing the same
    /// chapter number appends a second entry rather than replacing the
    /// first. Annotation failure leaves the tables untouched and propagates,
    /// since silently dropping a chapter would corrupt the bookkeeping.
    pub async fn update_context(
        &mut self,
        text: &str,
        chapter_number: u32,
    ) -> Result<(), AnalyzerError> {
        let annotation = self.analyzer.segment_and_annotate(text).await?;

        for entity in &annotation.entities {
            match entity.label {
                EntityLabel::Person => track_entity(&mut self.character_names, &entity.text),
                EntityLabel::Place => track_entity(&mut self.place_names, &entity.text),
                EntityLabel::Other => {}
            }
        }

        let mut word_count = 0usize;
        for token in text.split_whitespace() {
            let word = token.trim_matches(|c: char| !c.is_alphanumeric());
            if !word.is_empty() && word.chars().all(|c| c.is_alphabetic()) {
                *self.term_frequency.entry(word.to_lowercase()).or_insert(0) += 1;
                word_count += 1;
            }
        }

        debug!(
            "Chapter {}: {} entities, {} alphabetic tokens",
            chapter_number,
            annotation.entities.len(),
            word_count
        );

        self.chapters.push(ChapterContextEntry {
            chapter_number,
            entities: annotation.entities.into_iter().map(|e| e.text).collect(),
            word_count,
        });

        Ok(())
    }

    /// Clear all tracked state, ready for a fresh chapter traversal.
    pub fn reset(&mut self) {
        self.character_names.clear();
        self.place_names.clear();
        self.term_frequency.clear();
        self.chapters.clear();
    }

    /// Suggestions for character names observed under multiple spellings.
    ///
    /// Emission order follows first-sighting order.
    pub fn consistency_suggestions(&self) -> Vec<Suggestion> {
        self.character_names
            .values()
            .filter(|record| record.variations.len() > 1)
            .map(|record| Suggestion {
                kind: SuggestionKind::CharacterName,
                variations: record.variations.clone(),
                suggested_canonical: record.canonical_form.clone(),
                frequency: record.frequency,
            })
            .collect()
    }

    /// The character-name table, keyed by lowercased surface form.
    pub fn character_names(&self) -> &IndexMap<String, EntityRecord> {
        &self.character_names
    }

    /// The place-name table, keyed by lowercased surface form.
    pub fn place_names(&self) -> &IndexMap<String, EntityRecord> {
        &self.place_names
    }

    /// The global term-frequency table over lowercased alphabetic tokens.
    pub fn term_frequency(&self) -> &HashMap<String, usize> {
        &self.term_frequency
    }

    /// The chapter context entries, in update order.
    pub fn chapters(&self) -> &[ChapterContextEntry] {
        &self.chapters
    }

    /// Summarize tracked state for reporting.
    pub fn report(&self) -> ContextReport {
        ContextReport {
            character_count: self.character_names.len(),
            place_count: self.place_names.len(),
            unique_terms: self.term_frequency.len(),
            chapters_analyzed: self.chapters.len(),
        }
    }
}

/// Shared update rule for both entity tables: key by lowercased surface form,
/// create on first sighting, otherwise bump frequency and grow variations.
fn track_entity(table: &mut IndexMap<String, EntityRecord>, surface: &str) {
    let key = surface.to_lowercase();
    match table.get_mut(&key) {
        Some(record) => record.record_sighting(surface),
        None => {
            table.insert(key, EntityRecord::new(surface));
        }
    }
}
