//! Integration tests for class tokens and structures

use chandas_foundation::{ErrorKind, Mark};
use chandas_metre::{ClassToken, LineGrammar, Structure};

const L: Mark = Mark::LIGHT;
const H: Mark = Mark::HEAVY;

// =============================================================================
// Token Alphabet
// =============================================================================

#[test]
fn every_symbol_parses() {
    let structure = Structure::parse("12XxivyWN,").unwrap_err();
    // X is not last
    assert!(matches!(structure.kind, ErrorKind::InvalidStructure { position: 2, .. }));

    let structure = Structure::parse("1xivyWN,2X").unwrap();
    assert_eq!(structure.len(), 10);
    assert_eq!(structure.to_string(), "1xivyWN,2X");
}

#[test]
fn resolution_equivalence() {
    let v = ClassToken::Resolution;
    assert_eq!(v.match_prefix(&[H]), Some(1));
    assert_eq!(v.match_prefix(&[L, L]), Some(2));
    assert_eq!(v.match_prefix(&[L]), None);
    assert_eq!(v.match_prefix(&[L, Mark::Separator]), None);
}

#[test]
fn partial_resolution_admits_single_light() {
    assert_eq!(ClassToken::PartialResolution.match_prefix(&[L, H]), Some(1));
    assert_eq!(ClassToken::Resolution.match_prefix(&[L, H]), None);
}

#[test]
fn four_mora_groups() {
    assert_eq!(ClassToken::GroupA.match_prefix(&[L, H, L]), Some(3));
    assert_eq!(ClassToken::GroupA.match_prefix(&[H, H]), Some(2));
    assert_eq!(ClassToken::GroupB.match_prefix(&[L, L, H]), Some(3));
    assert_eq!(ClassToken::GroupB.match_prefix(&[H, L, L]), Some(3));
    assert_eq!(ClassToken::GroupB.match_prefix(&[L, H, L]), None);
}

#[test]
fn token_names() {
    assert_eq!(ClassToken::LineFinalHeavy.name(), "line-final-heavy");
    assert_eq!(ClassToken::from_symbol('W'), Some(ClassToken::GroupA));
    assert_eq!(ClassToken::Indifferent.to_string(), "i");
}

// =============================================================================
// Structures and Grammars
// =============================================================================

#[test]
fn structure_errors() {
    assert!(matches!(
        Structure::parse("").unwrap_err().kind,
        ErrorKind::InvalidStructure { .. }
    ));
    assert!(matches!(
        Structure::parse("1Z").unwrap_err().kind,
        ErrorKind::InvalidStructure { position: 1, .. }
    ));
}

#[test]
fn grammar_pattern_is_derived_from_tokens() {
    let structure = Structure::parse("y2Wv2x,2v2Wv2X").unwrap();
    let grammar = LineGrammar::compile(&structure).unwrap();
    assert_eq!(
        grammar.pattern(),
        "^(?:(?:11|2|1)2(?:121|22)(?:11|2)2(1|2),2(?:11|2)2(?:121|22)(?:11|2)2X)$"
    );
}

#[test]
fn half_lines() {
    let structure = Structure::parse("y2Wv2i,2iv2Wv2X").unwrap();
    let halves = structure.half_lines();
    assert_eq!(halves.len(), 2);
    assert_eq!(halves[0].len(), 6);
    assert_eq!(halves[1].len(), 8);
}
