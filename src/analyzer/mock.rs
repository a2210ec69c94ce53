/*!
 * Mock analyzer implementation for testing.
 *
 * The mock simulates different backend behaviors:
 * - `MockAnalyzer::working()` - naive segmentation, echoing grammar backend
 * - `MockAnalyzer::failing()` - segmentation always errors
 * - `with_grammar(...)` - scripted grammar candidates (fixes, runaway
 *   generation, truncation, case-only rewrites, hard failures)
 * - `with_person_names(...)` / `with_place_names(...)` - scripted
 *   case-insensitive entity recognition
 */

use async_trait::async_trait;
use regex::Regex;

use crate::analyzer::{Annotation, EntityLabel, LinguisticAnalyzer, RecognizedEntity};
use crate::errors::AnalyzerError;

/// Scripted behavior for the mock's grammar-correction operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockGrammar {
    /// Return the sentence unchanged (a no-op candidate)
    Echo,
    /// Replace every occurrence of one word with another
    Fix {
        /// Word to replace
        from: &'static str,
        /// Replacement word
        to: &'static str,
    },
    /// Return the sentence doubled (simulates runaway generation)
    Runaway,
    /// Return only the first word (simulates truncated output)
    Truncated,
    /// Return the sentence uppercased (a case-only rewrite)
    Uppercase,
    /// Always fail with a backend error
    Failing,
}

/// Mock analyzer for testing pipeline and tracker behavior.
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    grammar: MockGrammar,
    person_names: Vec<String>,
    place_names: Vec<String>,
    fail_segmentation: bool,
}

impl MockAnalyzer {
    /// Create a working mock: naive segmentation, echoing grammar backend.
    pub fn working() -> Self {
        Self {
            grammar: MockGrammar::Echo,
            person_names: Vec::new(),
            place_names: Vec::new(),
            fail_segmentation: false,
        }
    }

    /// Create a mock whose segmentation always fails.
    pub fn failing() -> Self {
        Self {
            fail_segmentation: true,
            ..Self::working()
        }
    }

    /// Set the grammar-correction behavior.
    pub fn with_grammar(mut self, grammar: MockGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Recognize the given names (case-insensitively) as PERSON entities.
    pub fn with_person_names(mut self, names: &[&str]) -> Self {
        self.person_names = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Recognize the given names (case-insensitively) as place entities.
    pub fn with_place_names(mut self, names: &[&str]) -> Self {
        self.place_names = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Scan the text for configured names, preserving surface casing and
    /// document order.
    fn scripted_entities(&self, text: &str) -> Vec<RecognizedEntity> {
        let mut found: Vec<(usize, RecognizedEntity)> = Vec::new();

        for (names, label) in [
            (&self.person_names, EntityLabel::Person),
            (&self.place_names, EntityLabel::Place),
        ] {
            for name in names {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(name));
                let name_regex = Regex::new(&pattern).expect("Invalid mock entity regex");
                for m in name_regex.find_iter(text) {
                    found.push((m.start(), RecognizedEntity::new(m.as_str(), label)));
                }
            }
        }

        found.sort_by_key(|(start, _)| *start);
        found.into_iter().map(|(_, entity)| entity).collect()
    }
}

/// Naive sentence splitter: a sentence is a run of text up to and including
/// its sentence-ending punctuation.
fn split_sentences(text: &str) -> Vec<String> {
    let boundary = Regex::new(r"[^.!?]*[.!?]+|[^.!?]+").expect("Invalid sentence regex");
    boundary
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[async_trait]
impl LinguisticAnalyzer for MockAnalyzer {
    async fn segment_and_annotate(&self, text: &str) -> Result<Annotation, AnalyzerError> {
        if self.fail_segmentation {
            return Err(AnalyzerError::Unavailable("mock backend is down".to_string()));
        }

        Ok(Annotation {
            sentences: split_sentences(text),
            entities: self.scripted_entities(text),
        })
    }

    async fn correct_grammar(&self, sentence: &str) -> Result<String, AnalyzerError> {
        match self.grammar {
            MockGrammar::Echo => Ok(sentence.to_string()),
            MockGrammar::Fix { from, to } => {
                let pattern = format!(r"\b{}\b", regex::escape(from));
                let fix_regex = Regex::new(&pattern).expect("Invalid mock fix regex");
                Ok(fix_regex.replace_all(sentence, to).into_owned())
            }
            MockGrammar::Runaway => Ok(format!("{} {}", sentence, sentence)),
            MockGrammar::Truncated => Ok(sentence
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string()),
            MockGrammar::Uppercase => Ok(sentence.to_uppercase()),
            MockGrammar::Failing => Err(AnalyzerError::GrammarCorrection(
                "mock grammar backend error".to_string(),
            )),
        }
    }
}
