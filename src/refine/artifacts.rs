/*!
 * Pass 2: machine-translation artifact removal.
 *
 * Applies the fixed artifact catalog from the pattern library. Sub-rules run
 * in a fixed order, each against the text as left by the previous sub-rule,
 * and each contributes at most one change record.
 */

use log::debug;

use crate::refine::patterns;
use crate::refine::result::{Change, ChangeKind};

/// Remove machine-translation artifacts from the text.
///
/// Bracketed and parenthetical asides are only stripped when the text carries
/// a translator/author-note marker, so legitimate parenthetical prose is
/// left alone.
pub fn apply(text: &str) -> (String, Vec<Change>) {
    let mut changes = Vec::new();
    let mut current = text.to_string();

    // Self-reference idioms ("this king" speaking of himself) become "I".
    let before = current.clone();
    current = patterns::SELF_REFERENCE.replace_all(&current, "I").into_owned();
    current = patterns::SELF_REFERENCE_YOUNG_MASTER
        .replace_all(&current, "I")
        .into_owned();
    if current != before {
        changes.push(Change::new(
            ChangeKind::MtArtifact,
            "Replaced first-person self-reference idioms",
        ));
    }

    let before = current.clone();
    current = patterns::HESITATION.replace_all(&current, "").into_owned();
    if current != before {
        changes.push(Change::new(
            ChangeKind::MtArtifact,
            "Removed hesitation interjections",
        ));
    }

    let before = current.clone();
    current = patterns::SOUND_EFFECT_DOUBLE.replace_all(&current, "").into_owned();
    current = patterns::SOUND_EFFECT_SINGLE.replace_all(&current, "").into_owned();
    if current != before {
        changes.push(Change::new(
            ChangeKind::MtArtifact,
            "Removed onomatopoeic sound effects",
        ));
    }

    // The marker gate is checked per sub-rule against the text as it then
    // stands: a marker living only inside a removed bracket must not license
    // stripping a later legitimate parenthetical.
    let before = current.clone();
    if patterns::NOTE_MARKER.is_match(&current) {
        current = patterns::BRACKET_NOTE.replace_all(&current, "").into_owned();
    }
    if current != before {
        changes.push(Change::new(
            ChangeKind::MtArtifact,
            "Removed bracketed translator notes",
        ));
    }

    let before = current.clone();
    if patterns::NOTE_MARKER.is_match(&current) {
        current = patterns::PARENTHETICAL_NOTE.replace_all(&current, "").into_owned();
    }
    if current != before {
        changes.push(Change::new(
            ChangeKind::MtArtifact,
            "Removed parenthetical translator notes",
        ));
    }

    if !changes.is_empty() {
        debug!("Artifact pass fired {} rule(s)", changes.len());
    }

    (current, changes)
}
