use serde::{Deserialize, Serialize};

use crate::grading::{DEFAULT_NEGATION_EXCEPTIONS, DEFAULT_THRESHOLD};

/// Top-level run configuration.
///
/// Example YAML:
/// ```yaml
/// grading:
///   threshold: 0.25
///   negation_exceptions: ["not", "without", "never"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub grading: Option<GradingConfig>,
}

/// Grading options. Each field is optional; absent fields fall back to the
/// built-in defaults.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GradingConfig {
    /// Minimum similarity for a point to be considered matched
    /// (default: 0.25)
    #[serde(default)]
    pub threshold: Option<f64>,

    /// Stopwords that must survive stopword removal, so negated answers
    /// keep their negators (default: ["not", "without", "never"])
    #[serde(default)]
    pub negation_exceptions: Option<Vec<String>>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            threshold: Some(DEFAULT_THRESHOLD),
            negation_exceptions: Some(
                DEFAULT_NEGATION_EXCEPTIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grading_config() {
        let config = GradingConfig::default();
        assert_eq!(config.threshold, Some(0.25));
        assert_eq!(
            config.negation_exceptions,
            Some(vec!["not".to_string(), "without".to_string(), "never".to_string()])
        );
    }

    #[test]
    fn test_partial_grading_config_parse() {
        let yaml = "threshold: 0.4\n";
        let config: GradingConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.threshold, Some(0.4));
        assert!(config.negation_exceptions.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
grading:
  threshold: 0.3
  negation_exceptions:
    - not
    - never
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let grading = config.grading.unwrap();
        assert_eq!(grading.threshold, Some(0.3));
        assert_eq!(grading.negation_exceptions.unwrap().len(), 2);
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.grading.is_none());
    }

    #[test]
    fn test_unknown_grading_field_rejected() {
        let yaml = "threshold: 0.3\ncutoff: 0.5\n";
        let result: Result<GradingConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
