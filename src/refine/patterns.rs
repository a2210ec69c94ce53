/*!
 * Static catalogs of textual anti-patterns and their fixes.
 *
 * Three catalogs feed the refinement passes:
 * - Machine-translation artifacts (self-reference idioms, hesitation
 *   interjections, onomatopoeia, translator notes)
 * - Adjacent-token repetition patterns
 * - Literal-translation-to-natural-phrasing substitutions
 *
 * The catalogs are fixed at compile time; passes decide how to apply them.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// First-person self-reference idioms: "this king/emperor/lord" speaking
/// about themselves, a common artifact of translated court speech.
pub static SELF_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bthis\s+(?:king|emperor|lord)\b").expect("Invalid self-reference regex"));

/// The longer "this young master" self-reference variant.
pub static SELF_REFERENCE_YOUNG_MASTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bthis\s+young\s+master\b").expect("Invalid self-reference regex"));

/// Hesitation interjections carried over verbatim ("en.", "um!", "ah?").
/// The trailing punctuation and whitespace are removed with the token.
pub static HESITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:en|um|ah|oh)\s*[.!?]\s*").expect("Invalid hesitation regex"));

/// Doubled onomatopoeic cough ("cough cough"), removed before the single form.
pub static SOUND_EFFECT_DOUBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bcough\s*cough\b").expect("Invalid sound effect regex"));

/// Single onomatopoeic cough token.
pub static SOUND_EFFECT_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bcough\b").expect("Invalid sound effect regex"));

/// Bracketed asides, removed only when a translator-note marker is present.
pub static BRACKET_NOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]").expect("Invalid bracket note regex"));

/// Parenthetical asides, removed only when a translator-note marker is present.
pub static PARENTHETICAL_NOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*\)").expect("Invalid parenthetical note regex"));

/// Marker tokens that identify translator/author notes. Bracketed and
/// parenthetical asides are only stripped when one of these appears in the
/// text, so legitimate parenthetical prose survives.
pub static NOTE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:TL|TN|Note|Author)\b").expect("Invalid note marker regex"));

/// Adjacent-duplicate repetition patterns. Each matches a two-token window of
/// the same word class; the repetition pass collapses a match only when both
/// tokens are the same word ignoring case.
pub static REPETITION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:he|she|it)\s+(?:he|she|it)\b",
        r"(?i)\b(?:the|a|an)\s+(?:the|a|an)\b",
        r"(?i)\bvery\s+very\b",
        r"(?i)\band\s+and\b",
        r"(?i)\b(?:that|which)\s+(?:that|which)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid repetition regex"))
    .collect()
});

/// Literal-translation phrasings and their natural replacements.
pub static STYLE_SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\bvery\s+much\s+like\b", "similar to"),
        (r"(?i)\bat\s+this\s+time\b", "now"),
        (r"(?i)\bin\s+this\s+moment\b", "at this moment"),
        (r"(?i)\bmore\s+and\s+more\b", "increasingly"),
        (r"(?i)\bwhat\s+kind\s+of\b", "what"),
        (r"(?i)\bthis\s+kind\s+of\b", "this type of"),
    ]
    .iter()
    .map(|(p, r)| (Regex::new(p).expect("Invalid style regex"), *r))
    .collect()
});

/// Words that suggest a male referent when inferring a character's pronoun.
pub const MALE_INDICATORS: &[&str] = &["master", "king", "emperor", "lord", "sir", "he", "his", "him"];

/// Words that suggest a female referent when inferring a character's pronoun.
pub const FEMALE_INDICATORS: &[&str] = &["lady", "queen", "empress", "she", "her", "hers"];
