use std::collections::HashSet;

use super::MarkScheme;

/// Validate a mark scheme before grading.
/// Returns all validation errors at once (not just the first).
pub fn validate_scheme(scheme: &MarkScheme) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (i, question) in scheme.questions.iter().enumerate() {
        if question.id.trim().is_empty() {
            errors.push(format!("questions[{}].id: must not be empty", i));
        } else if !seen_ids.insert(question.id.as_str()) {
            errors.push(format!(
                "questions[{}].id: duplicate question id '{}'",
                i, question.id
            ));
        }

        if question.max_marks < 0.0 || !question.max_marks.is_finite() {
            errors.push(format!(
                "questions[{}].max_marks: must be a non-negative number, got {}",
                i, question.max_marks
            ));
        }

        for (j, point) in question.points.iter().enumerate() {
            if point.id.trim().is_empty() {
                errors.push(format!("questions[{}].points[{}].id: must not be empty", i, j));
            }
            if point.marks < 0.0 || !point.marks.is_finite() {
                errors.push(format!(
                    "questions[{}].points[{}].marks: must be a non-negative number, got {}",
                    i, j, point.marks
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{Point, Question};

    fn question(id: &str, max_marks: f64, points: Vec<Point>) -> Question {
        Question {
            id: id.to_string(),
            text: "text".to_string(),
            max_marks,
            points,
        }
    }

    fn point(id: &str, marks: f64) -> Point {
        Point {
            id: id.to_string(),
            text: "reference".to_string(),
            marks,
        }
    }

    #[test]
    fn test_valid_scheme() {
        let scheme = MarkScheme {
            questions: vec![question("q1", 2.0, vec![point("p1", 1.0), point("p2", 1.0)])],
        };
        assert!(validate_scheme(&scheme).is_ok());
    }

    #[test]
    fn test_empty_scheme_is_valid() {
        let scheme = MarkScheme { questions: vec![] };
        assert!(validate_scheme(&scheme).is_ok());
    }

    #[test]
    fn test_question_without_points_is_valid() {
        // Not enforced; such a question just grades to zero
        let scheme = MarkScheme {
            questions: vec![question("q1", 2.0, vec![])],
        };
        assert!(validate_scheme(&scheme).is_ok());
    }

    #[test]
    fn test_negative_max_marks() {
        let scheme = MarkScheme {
            questions: vec![question("q1", -1.0, vec![point("p1", 1.0)])],
        };
        let errors = validate_scheme(&scheme).unwrap_err();
        assert!(errors[0].contains("questions[0].max_marks"));
    }

    #[test]
    fn test_negative_point_marks() {
        let scheme = MarkScheme {
            questions: vec![question("q1", 2.0, vec![point("p1", -0.5)])],
        };
        let errors = validate_scheme(&scheme).unwrap_err();
        assert!(errors[0].contains("questions[0].points[0].marks"));
    }

    #[test]
    fn test_duplicate_question_id() {
        let scheme = MarkScheme {
            questions: vec![
                question("q1", 2.0, vec![point("p1", 1.0)]),
                question("q1", 3.0, vec![point("p2", 1.0)]),
            ],
        };
        let errors = validate_scheme(&scheme).unwrap_err();
        assert!(errors[0].contains("duplicate question id 'q1'"));
    }

    #[test]
    fn test_collects_all_errors() {
        let scheme = MarkScheme {
            questions: vec![
                question("", -1.0, vec![point("", -2.0)]), // 3 errors
            ],
        };
        let errors = validate_scheme(&scheme).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
