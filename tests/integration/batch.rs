//! Batch behaviour: failures stay local to their line.

use std::fs;

use chandas_foundation::ErrorKind;
use chandas_metre::stdlib::OLD_GITI;
use chandas_runtime::{LineOutcome, ScanConfig, Session};

const MIXED: &str = "\
Karaṇīyamatthakusalena, yantasantaṃ padaṃ abhisamecca

Sakko xyz
Santussako ca subharo ca, appakicco ca sallahukavutti
";

#[test]
fn failing_line_does_not_stop_the_batch() {
    let session = Session::new().unwrap();
    let reports = session.scan_text(MIXED);

    assert_eq!(reports.len(), 3);
    assert!(reports[0].is_scanned());
    assert!(reports[2].is_scanned());
    assert_eq!(reports[2].index, 2);
    assert_eq!(reports[2].matching(OLD_GITI), vec!["normal"]);

    let LineOutcome::Failed {
        remainder, offset, ..
    } = &reports[1].outcome
    else {
        panic!("expected failure");
    };
    assert_eq!(remainder, "koxyz");
    assert_eq!(*offset, 3);
    assert!(reports[1].metres().is_empty());
}

#[test]
fn failed_line_renders_remainder() {
    let session = Session::with_registry(
        chandas_metre::MetreRegistry::standard().unwrap(),
        ScanConfig::new().with_trace(false),
    )
    .unwrap();
    let reports = session.scan_text(MIXED);
    let text = session.render(&reports).unwrap();
    assert!(text.contains("cannot scan at 3: \"koxyz\""));
    assert!(text.contains(&format!("{OLD_GITI}: normal")));
}

#[test]
fn interactive_lines_number_consecutively() {
    let mut session = Session::new().unwrap();
    let first = session.scan_line("Sakko xyz");
    let second = session.scan_line("nāma");
    assert!(!first.is_scanned());
    assert_eq!(first.index, 0);
    assert_eq!(second.index, 1);
    assert_eq!(session.next_index(), 2);
}

#[test]
fn selected_metre_limits_reports() {
    let config = ScanConfig::new().with_metre(OLD_GITI);
    let session =
        Session::with_registry(chandas_metre::MetreRegistry::standard().unwrap(), config).unwrap();
    let reports = session.scan_text(MIXED);
    assert_eq!(reports[0].metres().len(), 1);
    assert_eq!(reports[0].metres()[0].metre, OLD_GITI);
}

#[test]
fn unknown_metre_rejected() {
    let config = ScanConfig::new().with_metre("Siloka");
    let err = Session::with_registry(chandas_metre::MetreRegistry::standard().unwrap(), config)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownMetre(_)));
}

#[test]
fn scan_file_reads_verse() {
    let path = std::env::temp_dir().join(format!("chandas-batch-{}.txt", std::process::id()));
    fs::write(&path, MIXED).unwrap();
    let reports = Session::new().unwrap().scan_file(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(reports.len(), 3);
}

#[test]
fn missing_file_names_the_path() {
    let path = std::env::temp_dir().join("chandas-no-such-file.txt");
    let err = Session::new().unwrap().scan_file(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    let source = err.context.unwrap().source.unwrap();
    assert!(source.ends_with("chandas-no-such-file.txt"));
}
