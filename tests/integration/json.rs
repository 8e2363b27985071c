//! Machine-readable reports.

use chandas_metre::stdlib::OLD_GITI;
use chandas_runtime::{ScanConfig, Session};
use serde_json::Value;

fn json_session() -> Session {
    Session::with_registry(
        chandas_metre::MetreRegistry::standard().unwrap(),
        ScanConfig::json(),
    )
    .unwrap()
}

#[test]
fn scanned_line_as_json() {
    let session = json_session();
    let reports = session.scan_text("Dīghā vā yeva mahantā, majjhimā rassakā aṇukathūlā");
    let rendered = session.render(&reports).unwrap();
    let value: Value = serde_json::from_str(&rendered).unwrap();

    let line = &value[0];
    assert_eq!(line["status"], "scanned");
    assert_eq!(line["index"], 0);
    assert_eq!(line["scansion"], "22221122,2122121112X");

    let old_giti = &line["metres"][0];
    assert_eq!(old_giti["metre"], OLD_GITI);
    let fitness = old_giti["fitting"]["fitness"].as_array().unwrap();
    assert_eq!(fitness.len(), 12);
    let matching: Vec<&str> = fitness
        .iter()
        .filter(|f| f["matches"] == true)
        .filter_map(|f| f["name"].as_str())
        .collect();
    assert_eq!(matching, vec!["normal", "n2"]);
}

#[test]
fn failed_line_as_json() {
    let session = json_session();
    let reports = session.scan_text("namaxyz");
    let value: Value = serde_json::from_str(&session.render(&reports).unwrap()).unwrap();

    assert_eq!(value[0]["status"], "failed");
    assert_eq!(value[0]["remainder"], "maxyz");
    assert_eq!(value[0]["offset"], 2);
    assert!(value[0].get("metres").is_none());
}

#[test]
fn single_report_to_json() {
    let mut session = json_session();
    let report = session.scan_line("nāma");
    let value: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(value["scansion"], "2X");
    assert_eq!(value["padded"], "2 X ");
}
