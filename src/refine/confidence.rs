/*!
 * Confidence scoring for one refinement call.
 *
 * The score is a pure function of the change log: which pass categories fired
 * and how many changes accumulated overall.
 */

use crate::refine::result::{Change, ChangeKind};

/// Base score when any change was made.
const BASE_SCORE: f32 = 0.7;

/// Change count above which trust in a single pass drops.
const HEAVY_CHANGE_THRESHOLD: usize = 10;

/// Score one refinement call from its change log.
///
/// An empty log means no corrections were needed, the highest-trust case.
/// Otherwise structural improvements raise the score and an unusually long
/// change log lowers it; the result is clamped to [0.0, 1.0].
pub fn score(changes: &[Change]) -> f32 {
    if changes.is_empty() {
        return 1.0;
    }

    let mut score = BASE_SCORE;

    let has = |kind: ChangeKind| changes.iter().any(|c| c.kind == kind);
    if has(ChangeKind::Grammar) {
        score += 0.1;
    }
    if has(ChangeKind::SentenceStructure) {
        score += 0.1;
    }
    if has(ChangeKind::Style) {
        score += 0.05;
    }

    if changes.len() > HEAVY_CHANGE_THRESHOLD {
        score -= 0.1;
    }

    score.clamp(0.0, 1.0)
}
