use std::io::Cursor;

use gradebook::{RecordError, SubjectReader, SubjectSource, Subjects};

#[test]
fn one_subject_per_line() {
    let subjects = SubjectReader::new(Cursor::new("Physics\nChemistry\n"))
        .read_subjects()
        .expect("read");
    assert_eq!(subjects, vec!["Physics", "Chemistry"]);
}

#[test]
fn trims_and_skips_blank_lines() {
    let subjects = SubjectReader::new(Cursor::new("\u{feff}Physics\r\n\n  Chemistry  \r\n\n"))
        .read_subjects()
        .expect("read");
    assert_eq!(subjects, vec!["Physics", "Chemistry"]);
}

#[test]
fn padded_subject_matches_trimmed_name() {
    let subjects =
        Subjects::load(SubjectReader::new(Cursor::new(" Physics \n\tHistory\n"))).expect("load");

    assert!(subjects.contains("Physics"));
    assert!(!subjects.contains(" Physics "));
    assert_eq!(subjects.sorted(), vec!["History", "Physics"]);
}

#[test]
fn duplicates_collapse_in_the_set() {
    let subjects =
        Subjects::load(SubjectReader::new(Cursor::new("Physics\nPhysics\nHistory"))).expect("load");

    assert_eq!(subjects.len(), 2);
    assert!(subjects.contains("Physics"));
    assert!(subjects.contains("History"));
    assert!(!subjects.contains("physics"));
}

#[test]
fn empty_source_gives_empty_set() {
    let subjects = Subjects::load(SubjectReader::new(Cursor::new(""))).expect("load");
    assert!(subjects.is_empty());
    assert_eq!(subjects.iter().count(), 0);
}

#[test]
fn keeps_non_ascii_subjects() {
    let subjects =
        Subjects::load(SubjectReader::new(Cursor::new("Химия\nФизика\n"))).expect("load");
    assert_eq!(subjects.sorted(), vec!["Физика", "Химия"]);
}

#[test]
fn invalid_utf8_reports_origin() {
    let err = SubjectReader::new(Cursor::new(vec![0xff, 0xfe, b'\n']))
        .with_origin("broken.csv")
        .read_subjects()
        .expect_err("not utf-8");

    match err {
        RecordError::SubjectSource { path, .. } => assert_eq!(path.to_str(), Some("broken.csv")),
        other => panic!("unexpected error: {other}"),
    }
}
