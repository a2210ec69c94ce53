/*!
 * Data model for refinement results and glossary input.
 */

use serde::{Deserialize, Serialize};

/// Category of a single logged change, tagged by the pass that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Whitespace/punctuation normalization
    Formatting,
    /// Machine-translation artifact removal
    MtArtifact,
    /// Glossary term substitution
    Glossary,
    /// Pronoun/reference repetition fix
    Pronoun,
    /// Long-sentence split
    SentenceStructure,
    /// Accepted grammar correction
    Grammar,
    /// Literal-translation style substitution
    Style,
    /// Whole-call failure captured by the fail-open boundary
    Error,
}

/// One log entry recording that a pass altered the text.
///
/// The change log is ordered by pass execution, not importance. A pass that
/// fires appends one entry per triggering rule, never one per occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Category of the change
    pub kind: ChangeKind,
    /// Human-readable description
    pub description: String,
}

impl Change {
    /// Create a new change record.
    pub fn new(kind: ChangeKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }
}

/// Classification of a glossary entry, deciding substitution eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermType {
    /// A character name
    Character,
    /// A place name
    Place,
    /// An organization, sect, or faction name
    Organization,
    /// A skill or technique name
    Skill,
    /// An item or artifact name
    Item,
    /// Anything else
    General,
}

impl TermType {
    /// Whether entries of this type are rewritten by the glossary pass.
    ///
    /// Only proper-noun types are substituted; the remaining types exist for
    /// glossary bookkeeping and are accepted but never applied to text.
    pub fn is_substitutable(self) -> bool {
        matches!(self, TermType::Character | TermType::Place | TermType::Organization)
    }
}

/// A caller-supplied original-to-preferred term mapping.
///
/// The pipeline only reads these; it never mutates or persists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// The term as it appears in the machine translation
    pub original_term: String,
    /// The term the refined text should use
    pub preferred_term: String,
    /// Classification deciding substitution eligibility
    pub term_type: TermType,
}

impl GlossaryEntry {
    /// Create a new glossary entry.
    pub fn new(
        original_term: impl Into<String>,
        preferred_term: impl Into<String>,
        term_type: TermType,
    ) -> Self {
        Self {
            original_term: original_term.into(),
            preferred_term: preferred_term.into(),
            term_type,
        }
    }
}

/// Outcome of one refinement call. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinementResult {
    /// The text as submitted
    pub original_text: String,
    /// The refined text; equals `original_text` on the error path
    pub refined_text: String,
    /// Ordered change log, one entry per triggering pass rule
    pub changes: Vec<Change>,
    /// Heuristic trust measure in [0.0, 1.0]
    pub confidence_score: f32,
    /// Wall-clock duration of the whole call, in seconds
    pub processing_time: f64,
}

impl RefinementResult {
    /// Whether this result came from the fail-open error boundary.
    pub fn is_error(&self) -> bool {
        self.changes.iter().any(|c| c.kind == ChangeKind::Error)
    }

    /// Whether any change of the given kind was logged.
    pub fn has_change(&self, kind: ChangeKind) -> bool {
        self.changes.iter().any(|c| c.kind == kind)
    }
}
