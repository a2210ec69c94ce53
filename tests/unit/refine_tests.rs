/*!
 * End-to-end tests for the refinement pipeline.
 *
 * Exercises the documented pipeline contract through the public API:
 * pass ordering, change accounting, confidence scoring, and the fail-open
 * error boundary.
 */

use std::sync::Arc;

use yantre::analyzer::{MockAnalyzer, MockGrammar};
use yantre::refine::{ChangeKind, GlossaryEntry, Refiner, TermType};

use crate::common::{run_on_sentence, sample_glossary, working_refiner};

#[tokio::test]
async fn test_refiner_refine_shouldAlwaysReturnBoundedConfidence() {
    let long = run_on_sentence();
    let inputs = [
        "",
        "plain",
        "This king  met Xiao Ming , and and he he bowed !!",
        long.as_str(),
    ];

    for input in inputs {
        let result = working_refiner().refine(input, &sample_glossary()).await;
        assert!(
            (0.0..=1.0).contains(&result.confidence_score),
            "confidence out of range for {:?}",
            input
        );
        assert!(result.processing_time >= 0.0);
    }
}

#[tokio::test]
async fn test_refiner_refine_withNoChanges_shouldScoreOne() {
    let result = working_refiner().refine("Already clean text.", &[]).await;
    assert!(result.changes.is_empty());
    assert_eq!(result.confidence_score, 1.0);
}

#[tokio::test]
async fn test_refiner_refine_withSelfReferenceIdiom_shouldRewriteToFirstPerson() {
    let result = working_refiner().refine("This king will not forgive you.", &[]).await;
    assert!(result.refined_text.contains("I will not forgive you."));
    assert!(result.has_change(ChangeKind::MtArtifact));
}

#[tokio::test]
async fn test_refiner_refine_withRepetition_shouldCollapseWithOnePronounChange() {
    let result = working_refiner().refine("He he walked and and talked", &[]).await;
    assert_eq!(result.refined_text, "He walked and talked");
    let pronoun_changes: Vec<_> = result
        .changes
        .iter()
        .filter(|c| c.kind == ChangeKind::Pronoun)
        .collect();
    assert_eq!(pronoun_changes.len(), 1);
}

#[tokio::test]
async fn test_refiner_refine_withGlossary_shouldSubstituteWholeWordsOnly() {
    let glossary = vec![GlossaryEntry::new("Xiao Ming", "Ming Hao", TermType::Character)];
    let result = working_refiner().refine("Xiao Ming met Xiaoming", &glossary).await;
    assert_eq!(result.refined_text, "Ming Hao met Xiaoming");
    assert!(result.has_change(ChangeKind::Glossary));
}

#[tokio::test]
async fn test_refiner_refine_withRunOnSentence_shouldSplitAboveThreshold() {
    let result = working_refiner().refine(&run_on_sentence(), &[]).await;
    assert!(result.has_change(ChangeKind::SentenceStructure));
    assert!(result.refined_text.contains("step19. After0"));
}

#[tokio::test]
async fn test_refiner_refine_withShortSentence_shouldNotSplit() {
    let input = "A short sentence, but nothing worth splitting here.";
    let result = working_refiner().refine(input, &[]).await;
    assert!(!result.has_change(ChangeKind::SentenceStructure));
    assert_eq!(result.refined_text, input);
}

#[tokio::test]
async fn test_refiner_refine_withRunawayGrammarBackend_shouldRejectCandidates() {
    let refiner = Refiner::new(Arc::new(
        MockAnalyzer::working().with_grammar(MockGrammar::Runaway),
    ));
    let input = "He go to the market every single day.";
    let result = refiner.refine(input, &[]).await;
    assert_eq!(result.refined_text, input);
    assert!(!result.has_change(ChangeKind::Grammar));
}

#[tokio::test]
async fn test_refiner_refine_withAcceptedGrammarFix_shouldRaiseConfidence() {
    let refiner = Refiner::new(Arc::new(
        MockAnalyzer::working().with_grammar(MockGrammar::Fix { from: "go", to: "went" }),
    ));
    let result = refiner.refine("He go to the market today.", &[]).await;
    assert!(result.refined_text.contains("went"));
    assert!(result.has_change(ChangeKind::Grammar));
    assert!((result.confidence_score - 0.8).abs() < 1e-6);
}

#[tokio::test]
async fn test_refiner_refine_withStylePhrase_shouldSubstituteAndScoreBonus() {
    let result = working_refiner()
        .refine("The crowd grew more and more restless.", &[])
        .await;
    assert_eq!(result.refined_text, "The crowd grew increasingly restless.");
    assert!(result.has_change(ChangeKind::Style));
    assert!((result.confidence_score - 0.75).abs() < 1e-6);
}

#[tokio::test]
async fn test_refiner_refine_withFailingAnalyzer_shouldFailOpen() {
    let refiner = Refiner::new(Arc::new(MockAnalyzer::failing()));
    let input = "Text that should come back untouched after the failure.";
    let result = refiner.refine(input, &[]).await;

    assert_eq!(result.refined_text, input);
    assert_eq!(result.confidence_score, 0.0);
    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].kind, ChangeKind::Error);
    assert!(result.processing_time >= 0.0);
}

#[tokio::test]
async fn test_refinementResult_serialize_shouldRoundTripThroughJson() {
    let result = working_refiner()
        .refine("This king  bowed and and left.", &[])
        .await;
    let json = serde_json::to_string(&result).unwrap();
    let parsed: yantre::refine::RefinementResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.refined_text, result.refined_text);
    assert_eq!(parsed.changes, result.changes);
}
