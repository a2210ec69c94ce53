/*!
 * Pass 7: style refinement.
 *
 * Replaces overly literal translation phrasings with natural English using
 * the fixed substitution catalog from the pattern library.
 */

use crate::refine::patterns;
use crate::refine::result::{Change, ChangeKind};

/// Apply the style substitution catalog.
///
/// One change record if any substitution fired, regardless of how many.
pub fn apply(text: &str) -> (String, Option<Change>) {
    let mut current = text.to_string();

    for (pattern, replacement) in patterns::STYLE_SUBSTITUTIONS.iter() {
        current = pattern.replace_all(&current, *replacement).into_owned();
    }

    let change =
        (current != text).then(|| Change::new(ChangeKind::Style, "Improved naturalness and style"));
    (current, change)
}
