use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use gradebook::{NoDataKind, RecordError, StudentRecord, SubjectReader};
use uuid::Uuid;

fn subjects_file(contents: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("gradebook-record-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    let path = root.join("subjects.csv");
    fs::write(&path, contents).expect("write subjects");
    path
}

fn cleanup(path: &Path) {
    if let Some(root) = path.parent() {
        let _ = fs::remove_dir_all(root);
    }
}

fn record() -> StudentRecord {
    StudentRecord::new(
        "Ivanov Ivan Ivanovich",
        SubjectReader::new(Cursor::new("Chemistry\nPhysics\n")),
    )
    .expect("build record")
}

#[test]
fn reads_subjects_from_file() {
    let path = subjects_file("Physics\nChemistry\nHistory\n");
    let record = StudentRecord::new("Ivanov Ivan", path.as_path()).expect("build record");

    assert_eq!(record.name().as_str(), "Ivanov Ivan");
    assert_eq!(record.subjects().sorted(), vec!["Chemistry", "History", "Physics"]);

    cleanup(&path);
}

#[test]
fn missing_subject_file_is_reported() {
    let path = std::env::temp_dir()
        .join(format!("gradebook-missing-{}", Uuid::new_v4()))
        .join("subjects.csv");

    let err = StudentRecord::new("Ivanov Ivan", path.as_path()).expect_err("file is missing");
    match err {
        RecordError::SubjectSource { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_name_fails_before_reading_subjects() {
    let path = std::env::temp_dir()
        .join(format!("gradebook-missing-{}", Uuid::new_v4()))
        .join("subjects.csv");

    let err = StudentRecord::new("lowercase Name", path.as_path()).expect_err("bad name");
    assert!(matches!(err, RecordError::InvalidName { ref token, .. } if token == "lowercase"));
}

#[test]
fn blank_name_builds_a_record() {
    let record = StudentRecord::new("", SubjectReader::new(Cursor::new("Physics\n")))
        .expect("blank name is accepted");
    assert_eq!(record.name().as_str(), "");

    StudentRecord::new("   ", SubjectReader::new(Cursor::new("Physics\n")))
        .expect("whitespace-only name is accepted");
}

#[test]
fn subjects_cannot_be_replaced() {
    let mut record = record();

    let err = record
        .set_subjects(["Chemistry"])
        .expect_err("subjects are fixed");
    assert!(matches!(err, RecordError::ImmutableSubjects));
    assert_eq!(record.subjects().sorted(), vec!["Chemistry", "Physics"]);
}

#[test]
fn average_rating_spans_all_subjects() {
    let mut record = record();
    record.add_rating("Chemistry", 5).expect("rating");
    record.add_rating("Chemistry", 3).expect("rating");
    assert_eq!(record.average_rating().expect("average"), 4.0);

    record.add_rating("Physics", 2).expect("rating");
    record.add_rating("Physics", 2).expect("rating");
    assert_eq!(record.average_rating().expect("average"), 3.0);
}

#[test]
fn average_rating_without_ratings_is_no_data() {
    let mut record = record();
    record.add_test_result("Physics", 90).expect("test result");

    let err = record.average_rating().expect_err("no ratings");
    assert!(matches!(err, RecordError::NoData(NoDataKind::Ratings)));
}

#[test]
fn average_test_result_is_per_subject() {
    let mut record = record();
    record.add_test_result("Physics", 50).expect("test result");
    record.add_test_result("Physics", 70).expect("test result");

    assert_eq!(record.average_test_result("Physics").expect("average"), 60.0);

    let err = record
        .average_test_result("Chemistry")
        .expect_err("nothing recorded for chemistry");
    assert!(matches!(err, RecordError::NoData(NoDataKind::TestResults(ref s)) if s == "Chemistry"));
}

#[test]
fn unknown_subject_wins_over_invalid_value() {
    let mut record = record();

    for rating in [1, 3, 6] {
        let err = record.add_rating("Geography", rating).expect_err("unknown");
        assert!(matches!(err, RecordError::UnknownSubject { ref subject, .. } if subject == "Geography"));
    }
    for score in [-1, 50, 101] {
        let err = record
            .add_test_result("Geography", score)
            .expect_err("unknown");
        assert!(matches!(err, RecordError::UnknownSubject { .. }));
    }

    let err = record
        .average_test_result("Geography")
        .expect_err("unknown");
    assert!(matches!(err, RecordError::UnknownSubject { ref student, .. } if student == "Ivanov Ivan Ivanovich"));
}

#[test]
fn rating_bounds() {
    let mut record = record();

    for rating in 2..=5 {
        record.add_rating("Chemistry", rating).expect("in range");
    }
    for rating in [i64::MIN, -2, 0, 1, 6, 256, i64::MAX] {
        let err = record.add_rating("Chemistry", rating).expect_err("out of range");
        assert!(matches!(err, RecordError::InvalidRating(ref v) if *v == rating.to_string()));
    }

    let recorded: Vec<u8> = record
        .ratings("Chemistry")
        .expect("known subject")
        .iter()
        .map(|r| r.value())
        .collect();
    assert_eq!(recorded, vec![2, 3, 4, 5]);
}

#[test]
fn score_bounds() {
    let mut record = record();

    record.add_test_result("Physics", 0).expect("lower bound");
    record.add_test_result("Physics", 100u8).expect("upper bound");
    record.add_test_result("Physics", 55usize).expect("middle");

    for score in [-1i32, 101, 1000] {
        let err = record
            .add_test_result("Physics", score)
            .expect_err("out of range");
        assert!(matches!(err, RecordError::InvalidScore(_)));
    }

    assert_eq!(record.test_results("Physics").expect("known").len(), 3);
    assert!(record.test_results("Chemistry").expect("known").is_empty());
}

#[test]
fn rejected_values_are_not_recorded() {
    let mut record = record();
    record.add_rating("Chemistry", 4).expect("rating");
    let _ = record.add_rating("Chemistry", 7);
    let _ = record.add_rating("Biology", 5);

    assert_eq!(record.average_rating().expect("average"), 4.0);
    assert_eq!(record.ratings("Chemistry").expect("known").len(), 1);
}

#[test]
fn per_subject_rating_average() {
    let mut record = record();
    record.add_rating("Chemistry", 5).expect("rating");
    record.add_rating("Physics", 2).expect("rating");
    record.add_rating("Physics", 3).expect("rating");

    assert_eq!(record.average_subject_rating("Chemistry").expect("average"), 5.0);
    assert_eq!(record.average_subject_rating("Physics").expect("average"), 2.5);
}
