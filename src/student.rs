#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The student record: a validated name, a fixed subject list, and the
//! ratings and test results recorded per subject.

use std::collections::HashMap;

use crate::{
    error::{NoDataKind, RecordError},
    grade::{Rating, Score, mean},
    name::StudentName,
    report::SubjectSummary,
    subjects::{SubjectSource, Subjects},
};

/// A student together with everything recorded about them.
///
/// Grades only ever get appended; nothing is updated or removed once
/// recorded.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    /// Validated full name.
    name:         StudentName,
    /// Subjects the student takes, fixed at construction.
    subjects:     Subjects,
    /// Ratings per subject, in the order they were added.
    ratings:      HashMap<String, Vec<Rating>>,
    /// Test results per subject, in the order they were added.
    test_results: HashMap<String, Vec<Score>>,
}

impl StudentRecord {
    /// Creates a record for `name`, reading the subject list from `subjects`
    /// exactly once.
    ///
    /// The name is validated before the source is touched.
    pub fn new(name: &str, subjects: impl SubjectSource) -> Result<Self, RecordError> {
        let name = StudentName::new(name)?;
        let subjects = Subjects::load(subjects)?;
        tracing::trace!("Created record for {} with {} subjects", name, subjects.len());

        Ok(Self {
            name,
            subjects,
            ratings: HashMap::new(),
            test_results: HashMap::new(),
        })
    }

    /// The student's name.
    pub fn name(&self) -> &StudentName {
        &self.name
    }

    /// The subjects the student takes.
    pub fn subjects(&self) -> &Subjects {
        &self.subjects
    }

    /// The subject list is fixed at construction; this always fails with
    /// [`RecordError::ImmutableSubjects`] and leaves the record untouched.
    pub fn set_subjects<I, S>(&mut self, _subjects: I) -> Result<(), RecordError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Err(RecordError::ImmutableSubjects)
    }

    /// Records a rating for `subject`.
    ///
    /// The subject is checked first, so an unknown subject is reported even
    /// when the rating itself is also out of range.
    pub fn add_rating<R>(&mut self, subject: &str, rating: R) -> Result<(), RecordError>
    where
        R: TryInto<Rating, Error = RecordError>,
    {
        self.check_subject(subject)?;
        let rating = rating.try_into()?;
        self.ratings
            .entry(subject.to_string())
            .or_default()
            .push(rating);
        Ok(())
    }

    /// Records a test result for `subject`.
    pub fn add_test_result<S>(&mut self, subject: &str, score: S) -> Result<(), RecordError>
    where
        S: TryInto<Score, Error = RecordError>,
    {
        self.check_subject(subject)?;
        let score = score.try_into()?;
        self.test_results
            .entry(subject.to_string())
            .or_default()
            .push(score);
        Ok(())
    }

    /// Ratings recorded for `subject`, oldest first.
    pub fn ratings(&self, subject: &str) -> Result<&[Rating], RecordError> {
        self.check_subject(subject)?;
        Ok(self.ratings.get(subject).map(Vec::as_slice).unwrap_or_default())
    }

    /// Test results recorded for `subject`, oldest first.
    pub fn test_results(&self, subject: &str) -> Result<&[Score], RecordError> {
        self.check_subject(subject)?;
        Ok(self
            .test_results
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Mean of every rating in every subject taken together.
    pub fn average_rating(&self) -> Result<f64, RecordError> {
        mean(self.ratings.values().flatten().copied())
            .ok_or(RecordError::NoData(NoDataKind::Ratings))
    }

    /// Mean of the ratings recorded for a single subject.
    pub fn average_subject_rating(&self, subject: &str) -> Result<f64, RecordError> {
        mean(self.ratings(subject)?.iter().copied())
            .ok_or_else(|| RecordError::NoData(NoDataKind::SubjectRatings(subject.to_string())))
    }

    /// Mean of the test results recorded for `subject`.
    pub fn average_test_result(&self, subject: &str) -> Result<f64, RecordError> {
        mean(self.test_results(subject)?.iter().copied())
            .ok_or_else(|| RecordError::NoData(NoDataKind::TestResults(subject.to_string())))
    }

    /// One summary row per subject, sorted by subject name.
    pub fn summary(&self) -> Vec<SubjectSummary> {
        self.subjects
            .sorted()
            .into_iter()
            .map(|subject| {
                let ratings = self.ratings.get(subject).map_or(0, Vec::len);
                let tests = self.test_results.get(subject).map_or(0, Vec::len);

                SubjectSummary::new(
                    subject,
                    ratings,
                    self.average_subject_rating(subject).ok(),
                    tests,
                    self.average_test_result(subject).ok(),
                )
            })
            .collect()
    }

    /// Fails with [`RecordError::UnknownSubject`] unless the student takes
    /// `subject`.
    fn check_subject(&self, subject: &str) -> Result<(), RecordError> {
        if self.subjects.contains(subject) {
            Ok(())
        } else {
            Err(RecordError::UnknownSubject {
                subject: subject.to_string(),
                student: self.name.to_string(),
            })
        }
    }
}
