//! Integration tests for syllable segmentation
//!
//! Tests the syllable grammar on words and full verse lines.

use chandas_foundation::Weight;
use chandas_scanner::{Syllabifier, SyllableKind, scan, syllabify};

fn texts(line: &str) -> Vec<String> {
    syllabify(line).unwrap().into_iter().map(|s| s.text).collect()
}

// =============================================================================
// Basic Shapes
// =============================================================================

#[test]
fn final_syllable_is_forced_heavy() {
    let syllables = syllabify("nama").unwrap();
    assert_eq!(texts("nama"), vec!["na", "ma"]);
    assert_eq!(syllables[0].weight, Weight::Light);
    assert_eq!(syllables[1].weight, Weight::FinalHeavy);
    assert!(syllables[1].line_final);
    assert_eq!(scan("nama").unwrap().compact(), "1X");
}

#[test]
fn long_vowel_makes_heavy() {
    assert_eq!(texts("nāma"), vec!["nā", "ma"]);
    assert_eq!(scan("nāma").unwrap().compact(), "2X");
}

#[test]
fn e_and_o_are_long() {
    assert_eq!(scan("vedanā").unwrap().compact(), "21X");
    assert_eq!(scan("sotapana").unwrap().compact(), "211X");
}

#[test]
fn closed_syllable_is_heavy() {
    let syllables = syllabify("sakko").unwrap();
    assert_eq!(syllables[0].text, "sak");
    assert_eq!(syllables[0].kind, SyllableKind::Closed);
    assert_eq!(syllables[0].weight, Weight::Heavy);
}

#[test]
fn niggahita_closes_before_vowel() {
    assert_eq!(texts("evaṃapi"), vec!["e", "vaṃ", "a", "pi"]);
    assert_eq!(scan("evaṃapi").unwrap().compact(), "221X");
}

#[test]
fn separator_stays_with_its_syllable() {
    let syllables = syllabify("kusalena,yanta").unwrap();
    let with_separator: Vec<&str> = syllables
        .iter()
        .filter(|s| s.separator)
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(with_separator, vec!["na,"]);
    assert_eq!(scan("kusalena,yanta").unwrap().compact(), "1121,2X");
}

// =============================================================================
// Verse Lines
// =============================================================================

#[test]
fn opening_line_of_the_sutta() {
    let line = "karaṇīyamatthakusalena,yantasantaṃpadaṃabhisamecca";
    assert_eq!(
        texts(line),
        vec![
            "ka", "ra", "ṇī", "ya", "mat", "tha", "ku", "sa", "le", "na,", "yan", "ta", "san",
            "taṃ", "pa", "daṃ", "a", "bhi", "sa", "mec", "ca",
        ]
    );
    let scansion = scan(line).unwrap();
    assert_eq!(scansion.compact(), "1121211121,2122121112X");
    assert_eq!(scansion.padded().chars().count(), line.chars().count());
}

#[test]
fn conjuncts_with_r_and_y_open_the_syllable() {
    assert_eq!(texts("santindriyo"), vec!["san", "tin", "dri", "yo"]);
    assert_eq!(texts("byārosanā"), vec!["byā", "ro", "sa", "nā"]);
}

#[test]
fn spans_cover_the_line() {
    let line = "mettañca,sabba";
    let syllables = syllabify(line).unwrap();
    let mut expected_start = 0;
    for syllable in &syllables {
        assert_eq!(syllable.span.start, expected_start);
        assert_eq!(syllable.span.text(line), syllable.text);
        expected_start = syllable.span.end;
    }
    assert_eq!(expected_start, line.len());
}

#[test]
fn iterator_matches_syllabify() {
    let line = "sukhinovakheminohontu";
    let collected: Vec<String> = Syllabifier::new(line)
        .map(|r| r.unwrap().text)
        .collect();
    assert_eq!(collected, texts(line));
}

#[test]
fn rescan_is_identical() {
    let line = "nacakhuddamācarekiñci,yenaviññūpareupavadeyyuṃ";
    assert_eq!(scan(line).unwrap(), scan(line).unwrap());
}
