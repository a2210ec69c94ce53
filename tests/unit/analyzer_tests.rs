/*!
 * Tests for the analyzer implementations through the public trait.
 */

use yantre::analyzer::{EntityLabel, HeuristicAnalyzer, LinguisticAnalyzer, MockAnalyzer};
use yantre::refine::Refiner;

#[tokio::test]
async fn test_heuristicAnalyzer_segmentAndAnnotate_shouldProvideBothViews() {
    let annotation = HeuristicAnalyzer::new()
        .segment_and_annotate("Elder Chen entered Azure City. The gates closed behind him.")
        .await
        .unwrap();

    assert_eq!(annotation.sentences.len(), 2);
    let labels: Vec<(&str, EntityLabel)> = annotation
        .entities
        .iter()
        .map(|e| (e.text.as_str(), e.label))
        .collect();
    assert!(labels.contains(&("Elder Chen", EntityLabel::Person)));
    assert!(labels.contains(&("Azure City", EntityLabel::Place)));
}

#[tokio::test]
async fn test_heuristicAnalyzer_correctGrammar_shouldStayConservative() {
    let analyzer = HeuristicAnalyzer::new();
    let corrected = analyzer
        .correct_grammar("i think a eagle flew past??")
        .await
        .unwrap();
    assert_eq!(corrected, "I think an eagle flew past?");
}

#[tokio::test]
async fn test_refiner_withDefaults_shouldRefineUsingHeuristicAnalyzer() {
    let refiner = Refiner::with_defaults();
    let result = refiner
        .refine("This king  said i saw a eagle there.", &[])
        .await;

    assert!(!result.is_error());
    assert!(result.refined_text.starts_with("I said"));
    assert!(result.refined_text.contains("an eagle"));
    assert!(result.confidence_score > 0.0);
}

#[tokio::test]
async fn test_mockAnalyzer_workingAndFailing_shouldDiverge() {
    assert!(MockAnalyzer::working().segment_and_annotate("Hi.").await.is_ok());
    assert!(MockAnalyzer::failing().segment_and_annotate("Hi.").await.is_err());
}
