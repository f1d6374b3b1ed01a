use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::grading::{PointResult, QuestionResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Round a similarity score to 3 decimals for display/export. Award
/// decisions always use the unrounded score.
pub fn round3(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

/// Format a similarity score with 3 decimals, trailing zeros trimmed
/// (e.g. "1.0", "0.22", "0.307")
pub fn format_score(score: f64) -> String {
    let formatted = format!("{:.3}", round3(score));
    let trimmed = formatted.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Format a mark value without a trailing ".0" for whole numbers
/// (e.g. "2", "1.5")
pub fn format_marks(marks: f64) -> String {
    if marks.fract() == 0.0 {
        format!("{:.0}", marks)
    } else {
        format!("{}", marks)
    }
}

/// Format the whole grading report, one block per question in scheme order
pub fn format_report(results: &[QuestionResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No questions graded.".to_string();
    }

    results
        .iter()
        .map(|r| format_question_result(r, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format a single question result:
/// "{id} | {awarded}/{max}", the student answer, then one line per point
pub fn format_question_result(result: &QuestionResult, use_colors: bool) -> String {
    let marks = format!(
        "{}/{}",
        format_marks(result.marks_awarded),
        format_marks(result.max_marks)
    );

    let header = if use_colors {
        format!("{} | {}", result.question_id.bold(), marks.cyan())
    } else {
        format!("{} | {}", result.question_id, marks)
    };

    let answer = truncate_answer(&result.student_answer, available_answer_width());
    let mut lines = vec![header, format!("Student: {}", answer)];

    for point in &result.point_details {
        lines.push(format_point_line(point, use_colors));
    }

    lines.join("\n")
}

fn format_point_line(point: &PointResult, use_colors: bool) -> String {
    let verdict = match (point.awarded, use_colors) {
        (true, true) => "correct".green().to_string(),
        (false, true) => "incorrect".red().to_string(),
        (true, false) => "correct".to_string(),
        (false, false) => "incorrect".to_string(),
    };
    format!(
        "  - {} ({}) TF-IDF={} => {}",
        point.point_id,
        point.point_text,
        format_score(point.similarity),
        verdict
    )
}

/// Width left for the answer on its "Student: " line, None for pipes
/// (unlimited)
fn available_answer_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| (w as usize).saturating_sub("Student: ".len()))
}

/// Truncate a student answer to fit available width, accounting for Unicode
fn truncate_answer(answer: &str, max_width: Option<usize>) -> String {
    let answer = answer.replace('\n', " ");
    let Some(max_width) = max_width else {
        return answer;
    };
    let chars: Vec<char> = answer.chars().collect();
    if chars.len() <= max_width {
        answer
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}
