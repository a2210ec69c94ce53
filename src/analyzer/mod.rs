/*!
 * Linguistic analyzer capability boundary.
 *
 * The refinement pipeline and the context tracker both consume linguistic
 * analysis (sentence segmentation, named-entity recognition, grammar
 * correction) through the [`LinguisticAnalyzer`] trait rather than a concrete
 * backend. Implementations in this module:
 * - `heuristic`: rule-based default, no external models required
 * - `mock`: scriptable analyzer for tests
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::AnalyzerError;

pub mod heuristic;
pub mod mock;

pub use heuristic::HeuristicAnalyzer;
pub use mock::{MockAnalyzer, MockGrammar};

/// Label assigned to a recognized named entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    /// A person or character name
    Person,
    /// A geographic or geopolitical location
    Place,
    /// Anything else the backend recognizes
    Other,
}

/// A named entity recognized in a text, with its surface form as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedEntity {
    /// The surface form exactly as it appears in the text
    pub text: String,
    /// The entity label
    pub label: EntityLabel,
}

impl RecognizedEntity {
    /// Create a new recognized entity.
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Result of segmenting and annotating a text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// Sentences in document order
    pub sentences: Vec<String>,
    /// Recognized entities in document order
    pub entities: Vec<RecognizedEntity>,
}

/// Common trait for linguistic analysis backends
///
/// This trait defines the two operations the pipeline needs, allowing any
/// backing implementation (rule-based, local model, remote service) to be
/// substituted without touching pipeline logic. Backends may be slow or
/// fallible; the grammar-correction caller degrades gracefully on failure.
#[async_trait]
pub trait LinguisticAnalyzer: Send + Sync + Debug {
    /// Segment a text into sentences and recognize named entities
    ///
    /// # Arguments
    /// * `text` - The text to analyze
    ///
    /// # Returns
    /// * `Result<Annotation, AnalyzerError>` - Sentences and entities in document order
    async fn segment_and_annotate(&self, text: &str) -> Result<Annotation, AnalyzerError>;

    /// Produce a grammar-corrected candidate for a single sentence
    ///
    /// The candidate is advisory: callers apply their own improvement filter
    /// and fall back to the original sentence when the candidate is rejected.
    ///
    /// # Arguments
    /// * `sentence` - The sentence to correct
    ///
    /// # Returns
    /// * `Result<String, AnalyzerError>` - The corrected candidate or an error
    async fn correct_grammar(&self, sentence: &str) -> Result<String, AnalyzerError>;
}
