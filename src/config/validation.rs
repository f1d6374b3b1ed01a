use super::schema::GradingConfig;

/// Validate grading configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_grading(config: &GradingConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(threshold) = config.threshold {
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            errors.push(format!(
                "grading.threshold: must be in [0, 1], got {}",
                threshold
            ));
        }
    }

    if let Some(ref exceptions) = config.negation_exceptions {
        for (i, word) in exceptions.iter().enumerate() {
            if word.trim().is_empty() {
                errors.push(format!(
                    "grading.negation_exceptions[{}]: must not be empty",
                    i
                ));
            } else if word.chars().any(|c| c.is_whitespace()) {
                errors.push(format!(
                    "grading.negation_exceptions[{}]: must be a single word, got '{}'",
                    i, word
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
