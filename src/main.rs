//! CLI entry point for the GradeBook Analyzer.
//!
//! Provides an interactive menu loop for entering or loading marks and a
//! non-interactive subcommand for analyzing a CSV in one shot.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gradebook_analyzer::{
    analysis::analyze,
    filter::DEFAULT_PASS_THRESHOLD,
    gradebook::Gradebook,
    loader::{load_csv, parse_score},
    output::{export_csv, print_json, render_summary, render_table},
};
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{error, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook_analyzer")]
#[command(about = "A tool to analyze student marks", long_about = None)]
struct Cli {
    /// Minimum score to count as passed
    #[arg(long, global = true, default_value_t = DEFAULT_PASS_THRESHOLD)]
    pass_threshold: f64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu loop (default)
    Interactive,
    /// Analyze a marks CSV and print the results
    Analyze {
        /// Path to a name,score CSV file
        #[arg(value_name = "INPUT_CSV")]
        input: String,

        /// CSV file to export the graded results to
        #[arg(short, long)]
        output: Option<String>,

        /// Also log the full report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/gradebook_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gradebook_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Interactive) => run_interactive(cli.pass_threshold)?,
        Some(Commands::Analyze {
            input,
            output,
            json,
        }) => {
            let book = load_csv(&input)?;
            if book.is_empty() {
                warn!(path = %input, "No valid student data loaded from CSV");
                return Ok(());
            }

            let report = analyze(&book, cli.pass_threshold);
            print!("\n{}", render_table(&book));
            print!("{}", render_summary(&report));

            if json {
                print_json(&report)?;
            }
            if let Some(path) = output {
                export_csv(&path, &book)?;
                println!("Exported results to '{path}'.");
            }
        }
    }

    Ok(())
}

/// Menu loop: manual entry or CSV load, analyze, optionally export, repeat.
fn run_interactive(pass_threshold: f64) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{}", "=".repeat(50));
    println!("Welcome to GradeBook Analyzer");
    println!("Options: 1) Manual entry  2) Load CSV  3) Exit");
    println!("{}", "=".repeat(50));

    loop {
        let choice = prompt(&mut input, "\nChoose an option (1-manual, 2-csv, 3-exit): ")?;
        let book = match choice.as_str() {
            "1" => manual_entry(&mut input)?,
            "2" => {
                let path = prompt(&mut input, "Enter CSV file path (e.g., students.csv): ")?;
                match load_csv(&path) {
                    Ok(book) => {
                        if book.is_empty() {
                            println!("No valid student data loaded from CSV.");
                        }
                        book
                    }
                    Err(e) => {
                        error!(error = %e, "CSV load failed");
                        Gradebook::new()
                    }
                }
            }
            "3" => {
                println!("Exiting. Goodbye!");
                return Ok(());
            }
            _ => {
                println!("Invalid choice. Please select 1, 2, or 3.");
                continue;
            }
        };

        if book.is_empty() {
            println!("No student records to analyze. Try again or add students.");
            continue;
        }

        let report = analyze(&book, pass_threshold);
        print!("\n{}", render_table(&book));
        print!("{}", render_summary(&report));

        offer_export(&mut input, &book)?;

        let again = prompt(&mut input, "\nDo you want to run another analysis? (y/n): ")?;
        if !again.eq_ignore_ascii_case("y") {
            println!("Thank you. Have a nice day!");
            return Ok(());
        }
    }
}

/// Prompts for name/score pairs until the "done" sentinel.
fn manual_entry(input: &mut impl BufRead) -> Result<Gradebook> {
    let mut book = Gradebook::new();
    println!("\nManual data entry. Type 'done' as name when finished.");

    loop {
        let name = prompt(input, "Enter student name (or 'done'): ")?;
        if name.eq_ignore_ascii_case("done") {
            break;
        }
        if name.is_empty() {
            println!("Name cannot be empty. Try again.");
            continue;
        }

        let raw = prompt(input, &format!("Enter marks for {name}: "))?;
        match parse_score(&raw) {
            Ok(score) => book.insert(name, score),
            Err(e) => {
                warn!(error = %e, "Rejected manual mark entry");
                println!("Invalid mark. Please enter a numeric value (e.g., 78 or 78.5).");
            }
        }
    }

    Ok(book)
}

fn offer_export(input: &mut impl BufRead, book: &Gradebook) -> Result<()> {
    let answer = prompt(input, "\nExport results to CSV? (y/n): ")?;
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(());
    }

    let path = prompt(input, "Enter output CSV path (e.g., results.csv): ")?;
    match export_csv(&path, book) {
        Ok(()) => println!("Exported results to '{path}'."),
        Err(e) => error!(error = %e, "CSV export failed"),
    }
    Ok(())
}

/// Prints a prompt and reads one trimmed line.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}
