pub mod formatter;

pub use formatter::{
    format_marks, format_question_result, format_report, format_score, round3, should_use_colors,
};
