pub mod validation;

pub use validation::validate_scheme;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A mark scheme: an ordered list of questions. Immutable once loaded.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkScheme {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub max_marks: f64,
    pub points: Vec<Point>,
}

/// An atomic unit of credit within a question. `marks` is not required to
/// be consistent with the parent's `max_marks`; the aggregator caps.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Point {
    pub id: String,
    pub text: String,
    pub marks: f64,
}

/// Raw answers keyed by question id. Keys need not cover all questions;
/// a question with no entry is graded as an empty answer.
pub type StudentAnswers = HashMap<String, String>;

/// Load a mark scheme from a JSON file.
pub fn load_scheme(path: &Path) -> Result<MarkScheme> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mark scheme file at {}", path.display()))?;
    let scheme: MarkScheme = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse mark scheme: invalid JSON in {}", path.display()))?;
    Ok(scheme)
}

/// Load student answers from a JSON file ({"<question_id>": "<answer>", ...}).
pub fn load_answers(path: &Path) -> Result<StudentAnswers> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file at {}", path.display()))?;
    let answers: StudentAnswers = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse answers: invalid JSON in {}", path.display()))?;
    Ok(answers)
}
