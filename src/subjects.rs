#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Loading the fixed list of subjects a student takes.

use std::{
    collections::HashSet,
    fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use itertools::Itertools;
use crate::error::RecordError;

/// Byte-order mark some editors put at the start of UTF-8 files.
const BOM: char = '\u{feff}';

/// Anything a list of subject names can be read from.
///
/// Each line is one subject. Surrounding whitespace is trimmed, so
/// `" Physics "` lists `Physics`; blank lines and a leading byte-order mark
/// are ignored.
///
/// Sources are consumed by a single read; the record built from them never
/// reads again.
pub trait SubjectSource {
    /// Reads every subject name, in file order, duplicates included.
    fn read_subjects(self) -> Result<Vec<String>, RecordError>;
}

/// A subject list read from any buffered reader, one subject per line.
pub struct SubjectReader<R> {
    /// Reader the lines come from.
    reader: R,
    /// Reported as the location of the list on read errors.
    origin: PathBuf,
}

impl<R: BufRead> SubjectReader<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            origin: PathBuf::from("<reader>"),
        }
    }

    /// Sets the location reported when reading fails.
    pub fn with_origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = origin.into();
        self
    }
}

impl<R: BufRead> SubjectSource for SubjectReader<R> {
    fn read_subjects(self) -> Result<Vec<String>, RecordError> {
        let origin = self.origin;
        let mut subjects = Vec::new();

        for (index, line) in self.reader.lines().enumerate() {
            let line = line.map_err(|source| RecordError::SubjectSource {
                path: origin.clone(),
                source,
            })?;
            let line = if index == 0 {
                line.trim_start_matches(BOM)
            } else {
                line.as_str()
            };

            let subject = line.trim();
            if !subject.is_empty() {
                subjects.push(subject.to_string());
            }
        }

        tracing::debug!("Read {} subjects from {}", subjects.len(), origin.display());
        Ok(subjects)
    }
}

impl SubjectSource for &Path {
    fn read_subjects(self) -> Result<Vec<String>, RecordError> {
        let file = fs::File::open(self).map_err(|source| RecordError::SubjectSource {
            path: self.to_path_buf(),
            source,
        })?;

        SubjectReader::new(BufReader::new(file))
            .with_origin(self)
            .read_subjects()
    }
}

impl SubjectSource for &PathBuf {
    fn read_subjects(self) -> Result<Vec<String>, RecordError> {
        self.as_path().read_subjects()
    }
}

impl SubjectSource for PathBuf {
    fn read_subjects(self) -> Result<Vec<String>, RecordError> {
        self.as_path().read_subjects()
    }
}

impl SubjectSource for &str {
    fn read_subjects(self) -> Result<Vec<String>, RecordError> {
        Path::new(self).read_subjects()
    }
}

/// The set of subjects a student takes, fixed once loaded.
///
/// There is no way to add, remove or replace entries; the only constructor
/// is [`Subjects::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subjects(HashSet<String>);

impl Subjects {
    /// Reads `source` once and collects its subjects.
    pub fn load(source: impl SubjectSource) -> Result<Self, RecordError> {
        Ok(Self(source.read_subjects()?.into_iter().collect()))
    }

    /// Whether `subject` is one of the student's subjects.
    pub fn contains(&self, subject: &str) -> bool {
        self.0.contains(subject)
    }

    /// Number of distinct subjects.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the source listed no subjects.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the subjects in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The subjects in alphabetical order.
    pub fn sorted(&self) -> Vec<&str> {
        self.iter().sorted_unstable().collect()
    }
}
