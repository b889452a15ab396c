#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Per-subject summaries of a record, rendered as a table or as JSON.

use std::fmt::Display;

use anyhow::{Context, Result};
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{constants::MISSING_AVERAGE, student::StudentRecord};

/// An average that may not exist because nothing was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Average(pub Option<f64>);

impl Display for Average {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:.2}"),
            None => write!(f, "{MISSING_AVERAGE}"),
        }
    }
}

#[derive(Tabled, Debug, Clone, PartialEq, Serialize)]
/// What has been recorded for one subject
pub struct SubjectSummary {
    #[tabled(rename = "Subject")]
    /// * `subject`: name of the subject
    pub subject:        String,
    #[tabled(rename = "Ratings")]
    /// * `ratings`: how many ratings were recorded
    pub ratings:        usize,
    #[tabled(rename = "Avg. rating")]
    /// * `average_rating`: mean rating in this subject
    pub average_rating: Average,
    #[tabled(rename = "Tests")]
    /// * `tests`: how many test results were recorded
    pub tests:          usize,
    #[tabled(rename = "Avg. test")]
    /// * `average_test`: mean test result in this subject
    pub average_test:   Average,
}

impl SubjectSummary {
    /// Creates a summary row.
    pub fn new(
        subject: impl Into<String>,
        ratings: usize,
        average_rating: Option<f64>,
        tests: usize,
        average_test: Option<f64>,
    ) -> Self {
        Self {
            subject: subject.into(),
            ratings,
            average_rating: Average(average_rating),
            tests,
            average_test: Average(average_test),
        }
    }
}

/// JSON shape of a full report.
#[derive(Serialize)]
struct Report<'a> {
    /// Student the report is about.
    student:        &'a str,
    /// Mean of all ratings, `null` when there are none.
    average_rating: Average,
    /// One entry per subject.
    subjects:       Vec<SubjectSummary>,
}

/// Renders the record as a table with the student's name on top and the
/// overall rating average at the bottom.
pub fn render_table(record: &StudentRecord) -> String {
    let overall = Average(record.average_rating().ok());

    Table::new(record.summary())
        .with(Panel::header(format!("Grades of {}", record.name())))
        .with(Panel::footer(format!("Average rating: {overall}")))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Renders the record as pretty-printed JSON.
pub fn render_json(record: &StudentRecord) -> Result<String> {
    let report = Report {
        student:        record.name().as_str(),
        average_rating: Average(record.average_rating().ok()),
        subjects:       record.summary(),
    };

    serde_json::to_string_pretty(&report).context("Failed to serialize the report")
}
