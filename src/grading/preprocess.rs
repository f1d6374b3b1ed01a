use std::collections::HashSet;

use anyhow::Result;

use crate::annotate::Annotator;

/// Punctuation stripped before annotation (the ASCII punctuation set).
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Negators that must survive stopword removal by default. Dropping "not"
/// would invert the meaning of an answer and silently award the point.
pub const DEFAULT_NEGATION_EXCEPTIONS: &[&str] = &["not", "without", "never"];

/// Normalize raw text into a comparable token string: lowercase, strip
/// punctuation, annotate, drop stopwords (except the negation exceptions),
/// join surviving lemmas with single spaces.
///
/// Pure given a fixed annotator; empty input produces empty output, as does
/// input consisting only of punctuation and stopwords.
pub fn preprocess<A: Annotator>(
    text: &str,
    annotator: &A,
    negation_exceptions: &HashSet<String>,
) -> Result<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(*c))
        .collect();

    let tokens = annotator.annotate(&cleaned)?;

    let lemmas: Vec<String> = tokens
        .into_iter()
        .filter(|t| !t.is_stopword || negation_exceptions.contains(&t.surface.to_lowercase()))
        .map(|t| t.lemma)
        .collect();

    Ok(lemmas.join(" "))
}

/// The default exception set as an owned set, for callers that don't
/// configure their own.
pub fn default_negation_exceptions() -> HashSet<String> {
    DEFAULT_NEGATION_EXCEPTIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::BasicAnnotator;

    fn run(text: &str) -> String {
        preprocess(text, &BasicAnnotator::new(), &default_negation_exceptions()).unwrap()
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(run("Water BOILS, at 100 degrees!"), "water boil 100 degree");
    }

    #[test]
    fn test_drops_stopwords() {
        assert_eq!(run("the water is boiling"), "water boil");
    }

    #[test]
    fn test_negation_survives_stopword_removal() {
        let out = run("The answer is not correct");
        assert!(out.split(' ').any(|t| t == "not"), "got: {}", out);
    }

    #[test]
    fn test_all_default_negators_survive() {
        let out = run("never without not");
        assert_eq!(out, "never without not");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run(""), "");
    }

    #[test]
    fn test_only_punctuation_and_stopwords() {
        assert_eq!(run("?!... the, and. of:"), "");
    }

    #[test]
    fn test_custom_exception_set() {
        // "no" is a stopword; with a custom exception set it survives
        let exceptions: HashSet<String> = ["no".to_string()].into_iter().collect();
        let out = preprocess("there is no answer", &BasicAnnotator::new(), &exceptions).unwrap();
        assert!(out.split(' ').any(|t| t == "no"), "got: {}", out);
    }
}
