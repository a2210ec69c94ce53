/*!
 * Error types for the yantre library.
 *
 * This module contains custom error types for different parts of the crate,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when calling the linguistic analyzer capability
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Error during sentence segmentation or entity annotation
    #[error("Segmentation failed: {0}")]
    Segmentation(String),

    /// Error from the grammar-correction backend
    #[error("Grammar correction failed: {0}")]
    GrammarCorrection(String),

    /// The analyzer backend is unavailable or not loaded
    #[error("Analyzer unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur inside the refinement pipeline
///
/// These never cross the `Refiner::refine` boundary: the orchestrator catches
/// them and returns a degraded-but-valid [`RefinementResult`] instead.
///
/// [`RefinementResult`]: crate::refine::RefinementResult
#[derive(Error, Debug)]
pub enum RefineError {
    /// Error from the linguistic analyzer capability
    #[error("Analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// A transformation pass failed
    #[error("Pass '{pass}' failed: {message}")]
    Pass {
        /// Name of the failing pass
        pass: &'static str,
        /// Failure description
        message: String,
    },
}

// Utility functions for error conversion
impl From<anyhow::Error> for RefineError {
    fn from(error: anyhow::Error) -> Self {
        Self::Pass {
            pass: "pipeline",
            message: error.to_string(),
        }
    }
}
