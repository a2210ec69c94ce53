/*!
 * # yantre - Yet Another Novel Translation Refinement Engine
 *
 * A Rust library for cleaning machine-translated novel text and tracking
 * naming consistency across chapters.
 *
 * ## Features
 *
 * - Multi-pass refinement pipeline: formatting cleanup, machine-translation
 *   artifact removal, glossary enforcement, repetition fixes, sentence
 *   splitting, grammar correction, style substitutions
 * - Per-call change log and heuristic confidence score
 * - Fail-open error handling: a refinement call always returns a well-formed
 *   result, never an error
 * - Cross-chapter context tracker surfacing character-name inconsistencies
 * - Pluggable linguistic analysis (segmentation, entity recognition, grammar
 *   correction) behind an async trait, with a rule-based default and a
 *   scriptable mock
 * - Batch orchestration with cooperative pacing between chapters
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `refine`: the refinement pipeline
 *   - `refine::core`: pass orchestration, confidence, timing
 *   - `refine::patterns`: static anti-pattern catalogs
 *   - one module per pass (`formatting`, `artifacts`, `glossary`,
 *     `repetition`, `structure`, `grammar`, `style`)
 * - `context`: cross-chapter context tracking and consistency suggestions
 * - `analyzer`: the linguistic analyzer capability and its implementations
 * - `batch`: multi-chapter orchestration
 * - `errors`: custom error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod analyzer;
pub mod batch;
pub mod context;
pub mod errors;
pub mod refine;

// Re-export main types for easier usage
pub use analyzer::{HeuristicAnalyzer, LinguisticAnalyzer, MockAnalyzer};
pub use batch::{BatchRefiner, ChapterInput, ChapterOutcome};
pub use context::{ContextTracker, EntityRecord, Suggestion};
pub use errors::{AnalyzerError, RefineError};
pub use refine::{Change, ChangeKind, GlossaryEntry, Refiner, RefinementResult, TermType};
