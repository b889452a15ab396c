#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::ops::RangeInclusive;

/// Ratings a subject can be given
pub const RATING_RANGE: RangeInclusive<u8> = 2..=5;

/// Scores a test can come back with
pub const SCORE_RANGE: RangeInclusive<u8> = 0..=100;

/// Subject list used when nothing else is configured
pub const DEFAULT_SUBJECTS_FILE: &str = "subjects.csv";

/// Environment variable overriding the subject list location
pub const SUBJECTS_ENV: &str = "GRADEBOOK_SUBJECTS";

/// Environment variable selecting the log level of the binary
pub const LOG_ENV: &str = "GRADEBOOK_LOG";

/// Placeholder shown in reports where an average cannot be computed
pub const MISSING_AVERAGE: &str = "-";
