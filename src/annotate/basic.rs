use anyhow::Result;

use super::{Annotator, Token};

/// English stopwords. Deliberately includes the negators ("not", "never",
/// "without", "no") so that negation handling is decided by the
/// preprocessor's exception set, not by accident of this list.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can", "could", "did", "do",
    "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "him", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "myself", "never", "no",
    "none", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "within", "without", "would", "you", "your", "yours",
];

/// Rule-based English annotator: whitespace tokenization, embedded stopword
/// list, and a light suffix lemmatizer. Approximate by design; it exists so
/// the tool works out of the box without a statistical model behind the
/// `Annotator` seam.
#[derive(Debug, Default)]
pub struct BasicAnnotator;

impl BasicAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Annotator for BasicAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<Token>> {
        Ok(text
            .split_whitespace()
            .map(|word| {
                let lower = word.to_lowercase();
                Token {
                    lemma: lemmatize(&lower),
                    is_stopword: STOPWORDS.contains(&lower.as_str()),
                    surface: word.to_string(),
                }
            })
            .collect())
    }
}

/// Light suffix-rule lemmatizer for lowercase English words.
/// Handles regular plurals and -ed/-ing inflections; irregular forms pass
/// through unchanged.
fn lemmatize(word: &str) -> String {
    let n = word.chars().count();

    // Plurals
    if n > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if n > 4 && word.ends_with("sses") {
        return word[..word.len() - 2].to_string();
    }
    if n > 3
        && word.ends_with("es")
        && (word.ends_with("xes")
            || word.ends_with("zes")
            || word.ends_with("ches")
            || word.ends_with("shes"))
    {
        return word[..word.len() - 2].to_string();
    }
    if n > 3
        && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return word[..word.len() - 1].to_string();
    }

    // Past tense: "studied" -> "study", "boiled" -> "boil"
    if n > 4 && word.ends_with("ied") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    if n > 4 && word.ends_with("ed") {
        return undouble(&word[..word.len() - 2]);
    }

    // Progressive: "boiling" -> "boil", "running" -> "run"
    if n > 5 && word.ends_with("ing") {
        return undouble(&word[..word.len() - 3]);
    }

    word.to_string()
}

/// Undo consonant doubling left by suffix stripping ("runn" -> "run").
fn undouble(stem: &str) -> String {
    let bytes = stem.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
        let last = bytes[bytes.len() - 1] as char;
        if last.is_ascii_alphabetic() && !"aeiou".contains(last) && last != 'l' && last != 's' {
            return stem[..stem.len() - 1].to_string();
        }
    }
    stem.to_string()
}
