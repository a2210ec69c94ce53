/*!
 * Multi-stage refinement pipeline for machine-translated text.
 *
 * Passes execute strictly in this order, each receiving the previous pass's
 * output and each appending its own change records:
 * 1. Formatting normalization
 * 2. Machine-translation artifact removal
 * 3. Glossary consistency
 * 4. Pronoun/reference repetition fixing
 * 5. Sentence-structure improvement
 * 6. Grammar correction
 * 7. Style refinement
 *
 * The orchestrator in `core` wraps the whole sequence in a fail-open
 * boundary and attaches confidence scoring and timing.
 */

pub mod artifacts;
pub mod confidence;
pub mod core;
pub mod formatting;
pub mod glossary;
pub mod grammar;
pub mod patterns;
pub mod repetition;
pub mod result;
pub mod structure;
pub mod style;

// Re-export types used externally
pub use self::core::Refiner;
pub use repetition::{Pronoun, infer_pronoun};
pub use result::{Change, ChangeKind, GlossaryEntry, RefinementResult, TermType};
