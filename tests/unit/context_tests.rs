/*!
 * Tests for the cross-chapter context tracker.
 */

use std::sync::Arc;

use yantre::analyzer::MockAnalyzer;
use yantre::context::{ContextTracker, SuggestionKind};

fn tracker_with_names(names: &[&str]) -> ContextTracker {
    ContextTracker::new(Arc::new(MockAnalyzer::working().with_person_names(names)))
}

#[tokio::test]
async fn test_contextTracker_updateContext_shouldTrackVariantsAcrossChapters() {
    let mut tracker = tracker_with_names(&["li wei"]);
    tracker.update_context("Li Wei stood at the wall.", 1).await.unwrap();
    tracker.update_context("li wei climbed down quietly.", 2).await.unwrap();

    let record = &tracker.character_names()["li wei"];
    assert_eq!(record.frequency, 2);
    assert_eq!(record.variations, vec!["Li Wei", "li wei"]);

    let suggestions = tracker.consistency_suggestions();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].kind, SuggestionKind::CharacterName);
    assert_eq!(suggestions[0].suggested_canonical, "Li Wei");
}

#[tokio::test]
async fn test_contextTracker_consistencySuggestions_shouldFollowFirstSightingOrder() {
    let mut tracker = tracker_with_names(&["zhao", "an lin"]);
    tracker.update_context("Zhao spotted An Lin.", 1).await.unwrap();
    tracker.update_context("ZHAO waved. an lin waved back.", 2).await.unwrap();

    let suggestions = tracker.consistency_suggestions();
    assert_eq!(suggestions.len(), 2);
    // Zhao was sighted before An Lin, so its suggestion comes first.
    assert_eq!(suggestions[0].suggested_canonical, "Zhao");
    assert_eq!(suggestions[1].suggested_canonical, "An Lin");
}

#[tokio::test]
async fn test_contextTracker_reset_shouldReturnEmptyTables() {
    let mut tracker = tracker_with_names(&["li wei"]);
    tracker.update_context("Li Wei trained.", 1).await.unwrap();
    assert!(!tracker.character_names().is_empty());

    tracker.reset();

    assert!(tracker.character_names().is_empty());
    assert!(tracker.place_names().is_empty());
    assert!(tracker.term_frequency().is_empty());
    assert!(tracker.chapters().is_empty());
}

#[tokio::test]
async fn test_contextTracker_updateContext_shouldRecordChapterEntries() {
    let analyzer = MockAnalyzer::working()
        .with_person_names(&["li wei"])
        .with_place_names(&["azure city"]);
    let mut tracker = ContextTracker::new(Arc::new(analyzer));
    tracker.update_context("Li Wei reached Azure City.", 12).await.unwrap();

    let entry = &tracker.chapters()[0];
    assert_eq!(entry.chapter_number, 12);
    assert_eq!(entry.entities, vec!["Li Wei", "Azure City"]);
    assert_eq!(entry.word_count, 5);
}

#[tokio::test]
async fn test_contextTracker_report_shouldCountDistinctEntities() {
    let analyzer = MockAnalyzer::working()
        .with_person_names(&["li wei", "chen"])
        .with_place_names(&["azure city"]);
    let mut tracker = ContextTracker::new(Arc::new(analyzer));
    tracker.update_context("Li Wei met Chen near Azure City.", 1).await.unwrap();
    tracker.update_context("Chen left Azure City alone.", 2).await.unwrap();

    let report = tracker.report();
    assert_eq!(report.character_count, 2);
    assert_eq!(report.place_count, 1);
    assert_eq!(report.chapters_analyzed, 2);
}
