#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradebook
//!
//! Builds a student record from the command line and prints what was
//! recorded.
//!
//! ```text
//! gradebook subjects --subjects subjects.csv
//! gradebook report "Ivanov Ivan" --rating Physics=5 --test Physics=87
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use gradebook::{StudentRecord, config, report};
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// A `SUBJECT=VALUE` pair given on the command line.
#[derive(Debug, Clone)]
struct Entry {
    /// Subject the value is recorded for.
    subject: String,
    /// The value as typed.
    value:   String,
}

impl std::str::FromStr for Entry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (subject, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected SUBJECT=VALUE, got `{s}`"))?;

        Ok(Self {
            subject: subject.trim().to_string(),
            value:   value.trim().to_string(),
        })
    }
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// List the subjects in a subject file
    Subjects(Option<PathBuf>),
    /// Build a record and print its summary
    Report {
        /// Student name
        name:     String,
        /// Subject file, when not the configured one
        subjects: Option<PathBuf>,
        /// Ratings to record, in order
        ratings:  Vec<Entry>,
        /// Test results to record, in order
        tests:    Vec<Entry>,
        /// Print JSON instead of a table
        json:     bool,
    },
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the subject file location
    fn s() -> impl Parser<Option<PathBuf>> {
        long("subjects")
            .short('s')
            .help("File listing one subject per line")
            .argument::<PathBuf>("PATH")
            .optional()
    }

    let list = construct!(Cmd::Subjects(s()))
        .to_options()
        .command("subjects")
        .help("Print the subjects in a subject file");

    let name = positional::<String>("NAME").help("Full name of the student");
    let ratings = long("rating")
        .short('r')
        .help("Record a rating from 2 to 5")
        .argument::<Entry>("SUBJECT=VALUE")
        .many();
    let tests = long("test")
        .short('t')
        .help("Record a test result from 0 to 100")
        .argument::<Entry>("SUBJECT=VALUE")
        .many();
    let json = long("json").help("Print the report as JSON").switch();
    let subjects = s();

    let report = construct!(Cmd::Report {
        subjects,
        ratings,
        tests,
        json,
        name
    })
    .to_options()
    .command("report")
    .help("Record grades for a student and print a summary");

    construct!([list, report])
        .to_options()
        .descr("Student records with validated grades")
        .run()
}

/// Parses a grade value typed on the command line.
fn parse_value(entry: &Entry, kind: &str) -> Result<i64> {
    entry.value.parse::<i64>().with_context(|| {
        format!("{} for {} must be a whole number, got `{}`", kind, entry.subject, entry.value)
    })
}

fn main() -> Result<()> {
    dotenv().ok();
    let config = config::get();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(config.log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Subjects(path) => {
            let path = path.unwrap_or_else(|| config.subjects_path().to_path_buf());
            let subjects = gradebook::Subjects::load(path.as_path())?;
            for subject in subjects.sorted() {
                println!("{subject}");
            }
        }
        Cmd::Report {
            name,
            subjects,
            ratings,
            tests,
            json,
        } => {
            let path = subjects.unwrap_or_else(|| config.subjects_path().to_path_buf());
            let mut record = StudentRecord::new(&name, path.as_path())
                .with_context(|| format!("Could not create a record for {name}"))?;

            for entry in &ratings {
                record.add_rating(&entry.subject, parse_value(entry, "Rating")?)?;
            }
            for entry in &tests {
                record.add_test_result(&entry.subject, parse_value(entry, "Test result")?)?;
            }

            if json {
                println!("{}", report::render_json(&record)?);
            } else {
                println!("{}", report::render_table(&record));
                if record.average_rating().is_err() {
                    eprintln!("{}", "No ratings recorded yet".yellow());
                }
            }
        }
    };

    Ok(())
}
