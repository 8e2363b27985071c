//! Standard metre templates.

use chandas_foundation::{Result, Scansion, Weight};

use crate::grammar::LineMatch;
use crate::template::MetreTemplate;

/// Name of the Old Gīti template.
pub const OLD_GITI: &str = "Old Gīti";

/// Name of the Tuṭṭhubha template.
pub const TUTTHUBHA: &str = "Tuṭṭhubha (Triṣṭubh)";

/// Old Gīti variants. The `n` family has a four-syllable second half-line
/// opening, the `e` family an extended one; digits name the resolved
/// positions.
pub const OLD_GITI_VARIANTS: [(&str, &str); 12] = [
    ("normal", "y2Wv2i,2iv2Wv2X"),
    ("n2", "y2v2v2i,2iv2Wv2X"),
    ("n6", "y2Wv2i,2iv2v2v2X"),
    ("n26", "y2v2v2i,2iv2v2v2X"),
    ("n4", "y2Wv2x,2v2Wv2X"),
    ("n24", "y2v2v2x,2v2Wv2X"),
    ("n46", "y2Wv2x,2v2v2v2X"),
    ("n246", "y2v2v2x,2v2v2v2X"),
    ("extended", "y2Wv2i,v2v2Wv2X"),
    ("e2", "y2v2v2i,v2v2Wv2X"),
    ("e6", "y2Wv2i,v2v2v2v2X"),
    ("e26", "y2v2v2i,v2v2v2v2X"),
];

const TUTTHUBHA_LINE: &str = "y212i1i212x,y212i1i212X";

/// Tuṭṭhubha variants.
pub const TUTTHUBHA_VARIANTS: [(&str, &str); 6] = [
    ("n1", TUTTHUBHA_LINE),
    ("n2", TUTTHUBHA_LINE),
    ("n3", TUTTHUBHA_LINE),
    ("n4", TUTTHUBHA_LINE),
    ("n5", TUTTHUBHA_LINE),
    ("n6", TUTTHUBHA_LINE),
];

/// The Old Gīti template.
///
/// # Errors
///
/// Returns an error if a built-in structure fails to compile.
pub fn old_giti() -> Result<MetreTemplate> {
    Ok(MetreTemplate::new(OLD_GITI, OLD_GITI_VARIANTS)?.with_adjuster(old_giti_adjustment))
}

/// The Tuṭṭhubha template.
///
/// # Errors
///
/// Returns an error if a built-in structure fails to compile.
pub fn tutthubha() -> Result<MetreTemplate> {
    MetreTemplate::new(TUTTHUBHA, TUTTHUBHA_VARIANTS)
}

/// Every standard template, in registry order.
///
/// # Errors
///
/// Returns an error if a built-in structure fails to compile.
pub fn standard_templates() -> Result<Vec<MetreTemplate>> {
    Ok(vec![old_giti()?, tutthubha()?])
}

/// Old Gīti adjustment.
///
/// Declines unless the line matched. A light opening syllable before a
/// heavy one counts as heavy. In the `4` variants the syllable taken by the
/// anceps position is marked anceps.
#[must_use]
pub fn old_giti_adjustment(
    scansion: &Scansion,
    variant: &str,
    found: Option<&LineMatch>,
) -> Option<Scansion> {
    let found = found?;
    let mut adjusted = scansion.clone();
    if scansion.weight(0) == Some(Weight::Light) && scansion.weight(1) == Some(Weight::Heavy) {
        adjusted = adjusted.with_weight(0, Weight::Heavy);
    }
    if variant.contains('4') {
        for &index in &found.anceps {
            adjusted = adjusted.with_weight(index, Weight::Anceps);
        }
    }
    Some(adjusted)
}
