/*!
 * Rule-based default analyzer.
 *
 * Works without any external models: sentence boundaries come from a
 * punctuation splitter, entities from capitalized-sequence and honorific
 * patterns common in translated novels, and grammar correction from a small
 * set of conservative rewrite rules. Intended as a usable fallback; callers
 * wanting model-backed analysis plug in their own `LinguisticAnalyzer`.
 */

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::analyzer::{Annotation, EntityLabel, LinguisticAnalyzer, RecognizedEntity};
use crate::errors::AnalyzerError;

/// A sentence is a run of text up to and including its ending punctuation.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]*[.!?]+|[^.!?]+").expect("Invalid sentence regex"));

/// Multi-word capitalized sequences, the strongest name signal available
/// without a model.
static NAME_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b").expect("Invalid name regex")
});

/// Honorific-prefixed names common in translated novels.
static HONORIFIC_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Xiao|Little|Young|Elder|Master|Sect\s+Leader)\s+[A-Z][a-z]+\b")
        .expect("Invalid honorific regex")
});

/// Standalone lowercase first-person pronoun.
static LONE_I: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bi\b").expect("Invalid pronoun regex"));

/// Indefinite article directly before a vowel-initial word.
static ARTICLE_BEFORE_VOWEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([Aa])\s+([aeiouAEIOU][a-z]*)\b").expect("Invalid article regex")
});

/// Runs of repeated terminal punctuation.
static REPEATED_TERMINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([!?])[!?]+").expect("Invalid punctuation regex"));

/// Suffix words that mark a capitalized sequence as a location.
const PLACE_SUFFIXES: &[&str] = &[
    "City", "Village", "Town", "Mountain", "Valley", "River", "Peak", "Kingdom", "Empire",
    "Continent", "Province", "Forest",
];

/// Rule-based linguistic analyzer requiring no external backend.
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    /// Create a new heuristic analyzer.
    pub fn new() -> Self {
        Self
    }

    fn recognize_entities(&self, text: &str) -> Vec<RecognizedEntity> {
        let mut spans: Vec<(usize, usize, RecognizedEntity)> = Vec::new();

        // Honorific matches first so they win over plain name sequences.
        for m in HONORIFIC_NAME.find_iter(text) {
            spans.push((
                m.start(),
                m.end(),
                RecognizedEntity::new(m.as_str(), EntityLabel::Person),
            ));
        }

        for m in NAME_SEQUENCE.find_iter(text) {
            let label = if is_place_sequence(m.as_str()) {
                EntityLabel::Place
            } else {
                EntityLabel::Person
            };
            spans.push((m.start(), m.end(), RecognizedEntity::new(m.as_str(), label)));
        }

        spans.sort_by_key(|(start, end, _)| (*start, std::cmp::Reverse(*end)));

        // Drop spans overlapping an already-kept span.
        let mut entities = Vec::new();
        let mut covered_until = 0usize;
        for (start, end, entity) in spans {
            if start >= covered_until {
                covered_until = end;
                entities.push(entity);
            }
        }
        entities
    }
}

/// Whether a capitalized sequence names a location rather than a person.
fn is_place_sequence(sequence: &str) -> bool {
    sequence
        .split_whitespace()
        .next_back()
        .is_some_and(|last| PLACE_SUFFIXES.contains(&last))
}

#[async_trait]
impl LinguisticAnalyzer for HeuristicAnalyzer {
    async fn segment_and_annotate(&self, text: &str) -> Result<Annotation, AnalyzerError> {
        let sentences = SENTENCE_BOUNDARY
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Annotation {
            sentences,
            entities: self.recognize_entities(text),
        })
    }

    async fn correct_grammar(&self, sentence: &str) -> Result<String, AnalyzerError> {
        let mut corrected = LONE_I.replace_all(sentence, "I").into_owned();
        corrected = ARTICLE_BEFORE_VOWEL
            .replace_all(&corrected, |caps: &regex::Captures| {
                let article = if &caps[1] == "A" { "An" } else { "an" };
                format!("{} {}", article, &caps[2])
            })
            .into_owned();
        corrected = REPEATED_TERMINAL.replace_all(&corrected, "$1").into_owned();
        Ok(corrected)
    }
}
