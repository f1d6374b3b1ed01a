use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use automark::annotate::BasicAnnotator;
use automark::config::GradingConfig;
use automark::grading::Grader;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grade student answers against a mark scheme
    Grade {
        /// Path to the mark scheme JSON file
        #[arg(short, long)]
        scheme: PathBuf,

        /// Path to the student answers JSON file
        #[arg(short, long)]
        answers: PathBuf,

        /// Minimum similarity for a point to be awarded (overrides config)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Write a flattened per-point CSV table to this path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the full results JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Validate a mark scheme without grading
    Check {
        /// Path to the mark scheme JSON file
        #[arg(short, long)]
        scheme: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "automark")]
#[command(about = "Lexical-similarity auto-marker for free-text answers", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/automark/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match automark::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let grading_config = config.grading.unwrap_or_default();

    match cli.command {
        Commands::Grade {
            scheme,
            answers,
            threshold,
            csv,
            json,
        } => {
            // CLI threshold overrides the config file
            let effective = GradingConfig {
                threshold: threshold.or(grading_config.threshold),
                ..grading_config
            };

            // Validate grading config at startup
            if let Err(errors) = automark::config::validate_grading(&effective) {
                eprintln!("Grading config errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_CONFIG);
            }

            let mark_scheme = match automark::scheme::load_scheme(&scheme) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Mark scheme error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            // Fail fast on a malformed scheme; no partial grading
            if let Err(errors) = automark::scheme::validate_scheme(&mark_scheme) {
                eprintln!("Mark scheme errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_CONFIG);
            }

            let student_answers = match automark::scheme::load_answers(&answers) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("Answers error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if cli.verbose {
                eprintln!(
                    "Loaded {} questions and {} answers",
                    mark_scheme.questions.len(),
                    student_answers.len()
                );
            }

            let mut grader = Grader::new(BasicAnnotator::new());
            if let Some(threshold) = effective.threshold {
                grader = grader.with_threshold(threshold);
            }
            if let Some(ref exceptions) = effective.negation_exceptions {
                let set: HashSet<String> =
                    exceptions.iter().map(|w| w.to_lowercase()).collect();
                grader = grader.with_negation_exceptions(set);
            }

            if cli.verbose {
                eprintln!("Grading with threshold {}", grader.threshold());
            }

            let results = grader.grade_all(&mark_scheme, &student_answers);

            let use_colors = automark::output::should_use_colors();
            println!("{}", automark::output::format_report(&results, use_colors));

            if let Some(ref csv_path) = csv {
                if let Err(e) = automark::export::write_csv(&results, csv_path) {
                    eprintln!("CSV export error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
                if cli.verbose {
                    eprintln!("Wrote CSV to {}", csv_path.display());
                }
            }

            if let Some(ref json_path) = json {
                if let Err(e) = automark::export::write_json(&results, json_path) {
                    eprintln!("JSON export error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
                if cli.verbose {
                    eprintln!("Wrote JSON to {}", json_path.display());
                }
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Graded {} questions in {:?}",
                    results.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Check { scheme } => {
            let mark_scheme = match automark::scheme::load_scheme(&scheme) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Mark scheme error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            match automark::scheme::validate_scheme(&mark_scheme) {
                Ok(()) => {
                    let point_count: usize = mark_scheme
                        .questions
                        .iter()
                        .map(|q| q.points.len())
                        .sum();
                    println!(
                        "Mark scheme OK: {} questions, {} points",
                        mark_scheme.questions.len(),
                        point_count
                    );
                }
                Err(errors) => {
                    eprintln!("Mark scheme errors:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
