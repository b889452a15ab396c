//! # gradebook
//!
//! A student record with a validated name, a fixed list of subjects read
//! from a file, and the ratings and test results recorded per subject.
//!
//! ```no_run
//! use gradebook::StudentRecord;
//!
//! let mut record = StudentRecord::new("Ivanov Ivan", "subjects.csv")?;
//! record.add_rating("Physics", 5)?;
//! record.add_test_result("Physics", 87)?;
//! println!("{}", record.average_rating()?);
//! # Ok::<(), gradebook::RecordError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment-driven settings
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Error types
pub mod error;
/// Ratings and test scores
pub mod grade;
/// Student names
pub mod name;
/// Tables and JSON output
pub mod report;
/// The student record itself
pub mod student;
/// Subject lists
pub mod subjects;

pub use error::{NameRule, NoDataKind, RecordError};
pub use grade::{Rating, Score};
pub use name::StudentName;
pub use student::StudentRecord;
pub use subjects::{SubjectReader, SubjectSource, Subjects};
