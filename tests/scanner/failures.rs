//! Integration tests for syllabification failures
//!
//! A line that cannot be segmented fails as a whole and reports the
//! unconsumed remainder; other lines are unaffected.

use chandas_foundation::ErrorKind;
use chandas_scanner::{Syllabifier, scan, segment_next, syllabify};

#[test]
fn bare_cluster_fails() {
    let err = scan("kr").unwrap_err();
    assert!(err.is_syllabification());
    assert_eq!(err.remainder(), Some("kr"));
}

#[test]
fn remainder_and_offset() {
    let err = syllabify("namaxyz").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Syllabification { ref remainder, offset: 2 } if remainder == "maxyz"
    ));
}

#[test]
fn offset_counts_characters() {
    // two-byte letters before the failure
    let err = scan("ṇīṇīxyz").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Syllabification { offset: 2, .. }));
    assert_eq!(err.remainder(), Some("ṇīxyz"));
}

#[test]
fn no_partial_result() {
    assert!(syllabify("nakr").is_err());
    let mut syllabifier = Syllabifier::new("nakr");
    assert_eq!(syllabifier.next().unwrap().unwrap().text, "nak");
    assert!(syllabifier.next().unwrap().is_err());
    assert!(syllabifier.next().is_none());
}

#[test]
fn failures_are_per_line() {
    let lines = ["nama", "kr", "nāma"];
    let results: Vec<_> = lines.iter().map(|line| scan(line)).collect();
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().compact(), "2X");
}

#[test]
fn single_step_grammar() {
    let (syllable, rest) = segment_next("nāma", chandas_scanner::Cursor::start()).unwrap();
    assert_eq!(syllable.text, "nā");
    assert_eq!(rest, "ma");
    assert!(segment_next("xyz", chandas_scanner::Cursor::start()).is_err());
}

#[test]
fn empty_line_scans_empty() {
    let scansion = scan("").unwrap();
    assert!(scansion.is_empty());
}
