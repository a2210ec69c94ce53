/*!
 * Common test utilities shared across the yantre test suite.
 */

use std::sync::Arc;

use yantre::analyzer::MockAnalyzer;
use yantre::refine::{GlossaryEntry, Refiner, TermType};

/// Initialize logging for tests. Safe to call from every test; only the
/// first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A refiner backed by a plain working mock analyzer.
pub fn working_refiner() -> Refiner {
    Refiner::new(Arc::new(MockAnalyzer::working()))
}

/// A small glossary with one entry of each substitutable type.
pub fn sample_glossary() -> Vec<GlossaryEntry> {
    vec![
        GlossaryEntry::new("Xiao Ming", "Ming Hao", TermType::Character),
        GlossaryEntry::new("Azure Sect", "Azure Cloud Sect", TermType::Organization),
        GlossaryEntry::new("Stone Town", "Stonetown", TermType::Place),
    ]
}

/// A run-on sentence long enough to trigger the structure pass: more than 40
/// tokens total with a viable conjunction join after token 20.
pub fn run_on_sentence() -> String {
    let left: Vec<String> = (0..20).map(|i| format!("step{}", i)).collect();
    let right: Vec<String> = (0..22).map(|i| format!("after{}", i)).collect();
    format!("{}, but {}.", left.join(" "), right.join(" "))
}
