pub mod annotate;
pub mod config;
pub mod export;
pub mod grading;
pub mod output;
pub mod scheme;
