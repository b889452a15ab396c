#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Errors raised while building or updating a student record.

use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

/// Which rule a name token broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// The token contains something other than letters.
    NotAlphabetic,
    /// The token is not capitalized (first letter upper, the rest lower).
    NotTitleCase,
}

impl Display for NameRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameRule::NotAlphabetic => write!(f, "must contain only letters"),
            NameRule::NotTitleCase => write!(f, "must start with a capital letter"),
        }
    }
}

/// What an average was requested over when there was nothing to average.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoDataKind {
    /// No ratings in any subject.
    Ratings,
    /// No ratings in the given subject.
    SubjectRatings(String),
    /// No test results in the given subject.
    TestResults(String),
}

impl Display for NoDataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoDataKind::Ratings => write!(f, "no ratings have been recorded"),
            NoDataKind::SubjectRatings(subject) => {
                write!(f, "no ratings have been recorded for {subject}")
            }
            NoDataKind::TestResults(subject) => {
                write!(f, "no test results have been recorded for {subject}")
            }
        }
    }
}

/// Errors specific to student records.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A token of the student's name failed validation.
    #[error("Name `{token}` {rule}")]
    InvalidName {
        /// The offending token.
        token: String,
        /// The rule it broke.
        rule:  NameRule,
    },

    /// Something tried to replace the subject list after construction.
    #[error("The subject list cannot be changed")]
    ImmutableSubjects,

    /// The subject is not part of the student's subject list.
    #[error("Subject `{subject}` is not taken by student {student}")]
    UnknownSubject {
        /// Subject that was asked for.
        subject: String,
        /// Name of the student the record belongs to.
        student: String,
    },

    /// Not an integer in the rating range.
    #[error("Invalid rating `{0}`, expected an integer from 2 to 5")]
    InvalidRating(String),

    /// Not an integer in the test score range.
    #[error("Invalid test result `{0}`, expected an integer from 0 to 100")]
    InvalidScore(String),

    /// An average was requested over an empty set of values.
    #[error("Cannot compute an average: {0}")]
    NoData(NoDataKind),

    /// The subject list could not be read.
    #[error("Could not read the subject list from {}", .path.display())]
    SubjectSource {
        /// Where the list was read from.
        path:   PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
