/*!
 * End-to-end multi-chapter workflow tests.
 *
 * Runs the full loop a caller would: refine a batch of chapters, let the
 * tracker accumulate context from refined output, then query suggestions.
 */

use std::sync::Arc;
use std::time::Duration;

use tokio_test;

use yantre::analyzer::MockAnalyzer;
use yantre::batch::{BatchRefiner, ChapterInput};
use yantre::context::ContextTracker;
use yantre::refine::{ChangeKind, Refiner};

use crate::common::{init_logging, sample_glossary};

fn build_batch(analyzer: MockAnalyzer) -> BatchRefiner {
    let analyzer = Arc::new(analyzer);
    let refiner = Refiner::new(analyzer.clone());
    let tracker = ContextTracker::new(analyzer);
    BatchRefiner::new(refiner, tracker).with_pacing(Duration::ZERO)
}

#[tokio::test]
async fn test_batchWorkflow_refineAndTrack_shouldSurfaceNamingInconsistency() {
    init_logging();
    let batch = build_batch(
        MockAnalyzer::working().with_person_names(&["ming hao"]),
    );

    let chapters = vec![
        ChapterInput::new(1, "This king  greeted Xiao Ming at the door."),
        ChapterInput::new(2, "ming hao returned and and bowed deeply."),
    ];

    let outcomes = batch.refine_chapters(&chapters, &sample_glossary()).await.unwrap();

    // Chapter 1: formatting, artifact, and glossary passes all fired.
    assert!(outcomes[0].result.has_change(ChangeKind::Formatting));
    assert!(outcomes[0].result.has_change(ChangeKind::MtArtifact));
    assert!(outcomes[0].result.has_change(ChangeKind::Glossary));
    assert!(outcomes[0].result.refined_text.contains("Ming Hao"));

    // Chapter 2: repetition collapse fired.
    assert!(outcomes[1].result.has_change(ChangeKind::Pronoun));

    // The tracker saw "Ming Hao" (glossary-corrected) then "ming hao".
    let tracker = batch.tracker();
    let tracker = tracker.lock().await;
    let record = &tracker.character_names()["ming hao"];
    assert_eq!(record.frequency, 2);
    assert_eq!(record.variations, vec!["Ming Hao", "ming hao"]);

    let suggestions = tracker.consistency_suggestions();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].suggested_canonical, "Ming Hao");
}

#[tokio::test]
async fn test_batchWorkflow_chapterNumbers_shouldPassThroughUnchanged() {
    let batch = build_batch(MockAnalyzer::working());
    let chapters = vec![
        ChapterInput::new(10, "Chapter ten text here."),
        ChapterInput::new(3, "Chapter three arrives out of order."),
        ChapterInput::new(10, "Chapter ten reprocessed."),
    ];

    let outcomes = batch.refine_chapters(&chapters, &[]).await.unwrap();
    let numbers: Vec<u32> = outcomes.iter().map(|o| o.chapter_number).collect();
    assert_eq!(numbers, vec![10, 3, 10]);

    // Append-only: the duplicate chapter number produces a second entry.
    let tracker = batch.tracker();
    let tracker = tracker.lock().await;
    let tracked: Vec<u32> = tracker.chapters().iter().map(|c| c.chapter_number).collect();
    assert_eq!(tracked, vec![10, 3, 10]);
}

#[test]
fn test_batchWorkflow_report_shouldReflectWholeBatch() {
    init_logging();
    let batch = build_batch(
        MockAnalyzer::working()
            .with_person_names(&["li wei"])
            .with_place_names(&["azure city"]),
    );
    let chapters = vec![
        ChapterInput::new(1, "Li Wei left Azure City at dawn."),
        ChapterInput::new(2, "Li Wei came back before dusk."),
    ];

    let report = tokio_test::block_on(async {
        batch.refine_chapters(&chapters, &[]).await.unwrap();
        batch.tracker().lock().await.report()
    });

    assert_eq!(report.character_count, 1);
    assert_eq!(report.place_count, 1);
    assert_eq!(report.chapters_analyzed, 2);
    assert!(report.unique_terms > 5);
}
