use std::path::Path;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde_json::{json, Value};

use crate::grading::QuestionResult;
use crate::output::{format_marks, format_score, round3};

const CSV_HEADER: &str =
    "question_id,student_ans,marks_awarded,max_marks,point_id,point_text,tfidf_score,awarded";

/// Flatten results into CSV, one row per point carrying the parent
/// question's fields. Scores are rounded to 3 decimals.
pub fn csv_rows(results: &[QuestionResult]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for result in results {
        for point in &result.point_details {
            let row = [
                csv_field(&result.question_id),
                csv_field(&result.student_answer),
                format_marks(result.marks_awarded),
                format_marks(result.max_marks),
                csv_field(&point.point_id),
                csv_field(&point.point_text),
                format_score(point.similarity),
                point.awarded.to_string(),
            ];
            out.push_str(&row.join(","));
            out.push('\n');
        }
    }

    out
}

/// Write the flattened CSV table atomically.
pub fn write_csv(results: &[QuestionResult], path: &Path) -> Result<()> {
    use std::io::Write;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    file.write_all(csv_rows(results).as_bytes())
        .context("Failed to write CSV rows")?;

    file.commit()
        .with_context(|| format!("Failed to save CSV at {}", path.display()))?;

    Ok(())
}

/// Serialize results to the output schema, scores rounded to 3 decimals.
pub fn results_json(results: &[QuestionResult]) -> Value {
    Value::Array(
        results
            .iter()
            .map(|result| {
                json!({
                    "question_id": result.question_id,
                    "question_text": result.question_text,
                    "student_ans": result.student_answer,
                    "marks_awarded": result.marks_awarded,
                    "max_marks": result.max_marks,
                    "point_details": result
                        .point_details
                        .iter()
                        .map(|point| {
                            json!({
                                "point_id": point.point_id,
                                "point_text": point.point_text,
                                "tfidf_score": round3(point.similarity),
                                "awarded": point.awarded,
                            })
                        })
                        .collect::<Vec<_>>(),
                })
            })
            .collect(),
    )
}

/// Write results as pretty JSON atomically.
pub fn write_json(results: &[QuestionResult], path: &Path) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, &results_json(results))
        .context("Failed to serialize results")?;

    file.commit()
        .with_context(|| format!("Failed to save results JSON at {}", path.display()))?;

    Ok(())
}

/// Quote a CSV field if it contains a comma, quote, or newline.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
