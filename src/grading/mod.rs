pub mod engine;
pub mod preprocess;
pub mod similarity;

pub use engine::{aggregate_marks, evaluate, Grader, PointResult, QuestionResult, DEFAULT_THRESHOLD};
pub use preprocess::{default_negation_exceptions, preprocess, DEFAULT_NEGATION_EXCEPTIONS};
pub use similarity::similarity;
