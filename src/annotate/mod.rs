mod basic;

pub use basic::BasicAnnotator;

use anyhow::Result;

/// One annotated token of input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Dictionary/base form of the word.
    pub lemma: String,
    /// The token as it appeared in the input.
    pub surface: String,
    /// Whether the token is a high-frequency, low-information word.
    pub is_stopword: bool,
}

/// Linguistic annotation service consumed by the preprocessor.
///
/// Implementations must be read-only and re-entrant: the grading pipeline
/// holds one instance for its whole lifetime and calls it once per text.
/// Construction and teardown belong to the caller.
pub trait Annotator {
    fn annotate(&self, text: &str) -> Result<Vec<Token>>;
}
