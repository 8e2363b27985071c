//! Integration tests for metre templates
//!
//! Tests variant fitting, selection, adjustment, and template validation.

use chandas_foundation::{ErrorKind, Scansion};
use chandas_metre::stdlib::{OLD_GITI, old_giti};
use chandas_metre::{FitOutcome, MetreTemplate};

fn scansion(compact: &str) -> Scansion {
    compact.parse().unwrap()
}

// =============================================================================
// Fitting
// =============================================================================

#[test]
fn short_line_is_reported_not_raised() {
    let template = MetreTemplate::new("Test", [("only", "12X")]).unwrap();
    let fitting = template.fit_scansion(scansion("12"), 0);

    assert_eq!(fitting.fitness.len(), 1);
    let fitness = &fitting.fitness[0];
    assert!(!fitness.matches);
    assert_eq!(fitness.fitting.outcome, FitOutcome::ShortLine);
    assert!(fitness.adjusted_scansion.is_none());
    assert!(fitness.fitter_agrees());
}

#[test]
fn empty_line_is_short_for_every_variant() {
    let template = old_giti().unwrap();
    let fitting = template.get_fitting("", 0).unwrap();
    assert!(fitting.scansion.is_empty());
    assert!(
        fitting
            .fitness
            .iter()
            .all(|f| f.fitting.outcome == FitOutcome::ShortLine && !f.matches)
    );
}

#[test]
fn extra_light_diverges_rather_than_overruns() {
    let template = MetreTemplate::new("Test", [("short", "1X"), ("long", "11X")]).unwrap();
    let fitting = template.get_fitting("namana", 0).unwrap();

    assert_eq!(fitting.scansion.compact(), "11X");
    assert_eq!(
        fitting.fitness[0].fitting.outcome,
        FitOutcome::Diverged { token: 1 }
    );
    assert_eq!(fitting.fitness[1].fitting.outcome, FitOutcome::Complete);
    assert_eq!(fitting.matching_names(), vec!["long"]);
}

// The final syllable of a scanned line is always `X`, which ends every
// structure, so a line can only overrun one through a trailing separator.
#[test]
fn trailing_separator_is_a_long_line() {
    let template = MetreTemplate::new("Test", [("short", "1X"), ("long", "11X")]).unwrap();
    let fitting = template.get_fitting("nama,", 0).unwrap();

    assert_eq!(fitting.scansion.compact(), "1X,");
    assert_eq!(fitting.fitness[0].fitting.outcome, FitOutcome::LongLine);
    assert_eq!(
        fitting.fitness[1].fitting.outcome,
        FitOutcome::Diverged { token: 1 }
    );
    assert!(fitting.matching_names().is_empty());
    assert!(fitting.fitness.iter().all(|f| f.fitter_agrees()));
}

#[test]
fn light_after_y_splits_fitter_from_grammar() {
    let template = MetreTemplate::new("Test", [("ambiguous", "y1X")]).unwrap();
    let fitting = template.fit_scansion(scansion("11X"), 0);
    let fitness = &fitting.fitness[0];

    assert!(fitness.matches);
    assert!(matches!(
        fitness.fitting.outcome,
        FitOutcome::Diverged { .. }
    ));
    assert!(!fitness.fitter_agrees());
}

#[test]
fn unmatched_syllabification_error_propagates() {
    let template = old_giti().unwrap();
    assert!(template.get_fitting("kr", 0).unwrap_err().is_syllabification());
}

#[test]
fn default_adjustment_keeps_raw_scansion() {
    let template = MetreTemplate::new("Test", [("a", "1vX"), ("b", "2X")]).unwrap();
    let fitting = template.fit_scansion(scansion("12X"), 0);
    assert_eq!(fitting.fitness[0].adjusted_scansion, Some(scansion("12X")));
    assert_eq!(fitting.fitness[1].adjusted_scansion, None);
}

// =============================================================================
// Old Gīti Adjustment
// =============================================================================

#[test]
fn anceps_position_is_marked_in_four_variants() {
    let template = old_giti().unwrap();
    let fitting = template.fit_scansion(scansion("2222221,2222222X"), 0);

    assert_eq!(fitting.matching_names(), vec!["n4", "n24", "n46", "n246"]);
    for fitness in fitting.fitness.iter().filter(|f| f.matches) {
        assert_eq!(
            fitness.adjusted_scansion.as_ref().map(Scansion::compact),
            Some("222222x,2222222X".to_string())
        );
    }
}

#[test]
fn light_opening_before_heavy_counts_heavy() {
    let template = old_giti().unwrap();
    let fitting = template.fit_scansion(scansion("1222221,2222222X"), 0);

    let n4 = fitting.fitness.iter().find(|f| f.name == "n4").unwrap();
    assert!(n4.matches);
    assert_eq!(
        n4.adjusted_scansion.as_ref().map(Scansion::compact),
        Some("222222x,2222222X".to_string())
    );
}

#[test]
fn unmatched_variants_are_not_adjusted() {
    let template = old_giti().unwrap();
    let fitting = template.fit_scansion(scansion("1222221,2222222X"), 0);
    for fitness in fitting.fitness.iter().filter(|f| !f.matches) {
        assert!(fitness.adjusted_scansion.is_none(), "{}", fitness.name);
    }
}

#[test]
fn sutta_opening_adjusts_only_the_matching_variant() {
    let template = old_giti().unwrap();
    let fitting = template
        .get_fitting("karaṇīyamatthakusalena,yantasantaṃpadaṃabhisamecca", 0)
        .unwrap();

    assert_eq!(fitting.matching_names(), vec!["normal"]);
    let normal = &fitting.fitness[0];
    assert_eq!(
        normal.adjusted_scansion.as_ref().map(Scansion::compact),
        Some("1121211121,2122121112X".to_string())
    );
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn selector_restricts_variants_by_index() {
    let template = MetreTemplate::new("Test", [("odd", "1X"), ("even", "2X")])
        .unwrap()
        .with_selector(|index, names: &[String]| {
            let wanted = if index % 2 == 0 { "even" } else { "odd" };
            names.iter().filter(|n| *n == wanted).cloned().collect()
        });

    let even = template.fit_scansion(scansion("2X"), 0);
    assert_eq!(even.fitness.len(), 1);
    assert_eq!(even.matching_names(), vec!["even"]);

    let odd = template.fit_scansion(scansion("2X"), 1);
    assert_eq!(odd.fitness.len(), 1);
    assert!(!odd.is_match());
}

#[test]
fn selector_unknown_names_are_skipped() {
    let template = MetreTemplate::new("Test", [("a", "1X")])
        .unwrap()
        .with_selector(|_, _| vec!["missing".to_string(), "a".to_string()]);
    let names: Vec<&str> = template
        .eligible_variants(0)
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(names, vec!["a"]);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn duplicate_variant_names_rejected() {
    let err = MetreTemplate::new("Test", [("a", "1X"), ("a", "2X")]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateVariant(ref n) if n == "a"));
    assert_eq!(err.context.unwrap().source.as_deref(), Some("Test"));
}

#[test]
fn template_without_variants_rejected() {
    let err = MetreTemplate::new("Test", Vec::<(&str, &str)>::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoVariants(_)));
}

#[test]
fn invalid_structure_names_metre_and_variant() {
    let err = MetreTemplate::new("Test", [("bad", "1Q")]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidStructure { position: 1, .. }));
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("Test"));
    assert_eq!(context.stack, vec!["variant bad".to_string()]);
}

#[test]
fn old_giti_variants_in_order() {
    let template = old_giti().unwrap();
    assert_eq!(template.name(), OLD_GITI);
    assert_eq!(template.variants().len(), 12);
    assert_eq!(template.variant_names()[0], "normal");
    assert_eq!(template.variant_names()[11], "e26");
}
