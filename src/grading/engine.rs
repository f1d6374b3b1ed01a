use std::collections::HashSet;

use crate::annotate::Annotator;
use crate::scheme::{MarkScheme, Question, StudentAnswers};

use super::preprocess::{default_negation_exceptions, preprocess};
use super::similarity::similarity;

/// Minimum similarity for a point to be considered matched.
pub const DEFAULT_THRESHOLD: f64 = 0.25;

/// Outcome for a single scoring point. `similarity` is the raw, unrounded
/// score; presentation layers round for display.
#[derive(Debug, Clone)]
pub struct PointResult {
    pub point_id: String,
    pub point_text: String,
    pub similarity: f64,
    pub awarded: bool,
}

/// Outcome for one question. Owns copies of the input text; no borrows
/// back into the scheme or the answer set.
#[derive(Debug, Clone)]
pub struct QuestionResult {
    pub question_id: String,
    pub question_text: String,
    pub student_answer: String,
    pub marks_awarded: f64,
    pub max_marks: f64,
    pub point_details: Vec<PointResult>,
}

/// Threshold a similarity score into an award decision. The boundary is
/// inclusive; each point is binary awarded/not-awarded.
pub fn evaluate(score: f64, threshold: f64) -> bool {
    score >= threshold
}

/// Sum the marks of awarded points and cap at `max_marks`. This is the only
/// place overlapping point definitions are reconciled with the question's
/// stated ceiling; the cap never raises and never goes negative.
pub fn aggregate_marks(points: &[(f64, bool)], max_marks: f64) -> f64 {
    let sum: f64 = points
        .iter()
        .filter(|(_, awarded)| *awarded)
        .map(|(marks, _)| marks)
        .sum();
    sum.min(max_marks)
}

/// The grading pipeline: holds the injected annotation service and the run
/// options for its whole lifetime. Stateless across calls; each grading run
/// is an independent pure transformation over its inputs.
pub struct Grader<A> {
    annotator: A,
    threshold: f64,
    negation_exceptions: HashSet<String>,
}

impl<A: Annotator> Grader<A> {
    pub fn new(annotator: A) -> Self {
        Self {
            annotator,
            threshold: DEFAULT_THRESHOLD,
            negation_exceptions: default_negation_exceptions(),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_negation_exceptions(mut self, exceptions: HashSet<String>) -> Self {
        self.negation_exceptions = exceptions;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Preprocess with graceful degradation: an annotation failure yields
    /// the empty normalized form, which scores 0 by the zero-vector rule.
    /// One bad text must not abort the rest of the run.
    fn normalize(&self, text: &str) -> String {
        preprocess(text, &self.annotator, &self.negation_exceptions).unwrap_or_default()
    }

    /// Grade one answer against one question: preprocess the answer once,
    /// then score, evaluate, and accumulate each point; cap at `max_marks`.
    pub fn grade_answer(&self, answer: &str, question: &Question) -> QuestionResult {
        let answer_norm = self.normalize(answer);

        let mut point_details = Vec::with_capacity(question.points.len());
        let mut awarded_marks = Vec::with_capacity(question.points.len());

        for point in &question.points {
            let reference_norm = self.normalize(&point.text);
            let score = similarity(&reference_norm, &answer_norm);
            let awarded = evaluate(score, self.threshold);

            awarded_marks.push((point.marks, awarded));
            point_details.push(PointResult {
                point_id: point.id.clone(),
                point_text: point.text.clone(),
                similarity: score,
                awarded,
            });
        }

        QuestionResult {
            question_id: question.id.clone(),
            question_text: question.text.clone(),
            student_answer: answer.to_string(),
            marks_awarded: aggregate_marks(&awarded_marks, question.max_marks),
            max_marks: question.max_marks,
            point_details,
        }
    }

    /// Grade every question in the scheme, in scheme order. A question with
    /// no entry in the answer set is graded as an empty answer, which
    /// legitimately scores 0 on every point.
    pub fn grade_all(&self, scheme: &MarkScheme, answers: &StudentAnswers) -> Vec<QuestionResult> {
        scheme
            .questions
            .iter()
            .map(|question| {
                let answer = answers.get(&question.id).map(String::as_str).unwrap_or("");
                self.grade_answer(answer, question)
            })
            .collect()
    }
}
