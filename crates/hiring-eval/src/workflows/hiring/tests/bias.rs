use std::collections::{BTreeMap, BTreeSet};

use super::common::ALICE_RESUME;
use crate::workflows::hiring::bias::{BiasCategory, BiasKeywordTable, BiasScanner};
use crate::workflows::hiring::scan_bias;

#[test]
fn flags_gender_age_and_location_language() {
    let findings = BiasScanner::default().scan(
        "Young female developer seeking local roles",
        "Developer Acme",
    );

    assert!(findings.is_flagged());
    assert_eq!(
        findings.categories(),
        BTreeSet::from([BiasCategory::Gender, BiasCategory::Age, BiasCategory::Location])
    );
    assert_eq!(findings.keywords_for(BiasCategory::Age), ["young"]);
    assert_eq!(findings.keywords_for(BiasCategory::Location), ["local"]);
    assert!(findings.keywords_for(BiasCategory::Prestige).is_empty());
}

#[test]
fn neutral_text_is_not_flagged() {
    let findings = BiasScanner::default().scan(ALICE_RESUME, "Python Developer TechCorp");

    assert!(!findings.is_flagged());
    assert!(findings.categories().is_empty());
}

#[test]
fn job_text_contributes_to_findings() {
    let findings = BiasScanner::default().scan("", "Senior Engineer at a Prestigious firm");

    assert_eq!(
        findings.categories(),
        BTreeSet::from([BiasCategory::Age, BiasCategory::Prestige])
    );
}

#[test]
fn substring_matching_is_coarse() {
    let findings = BiasScanner::default().scan("Worked with the platform team", "");

    assert_eq!(findings.keywords_for(BiasCategory::Gender), ["he"]);
}

#[test]
fn custom_table_limits_categories() {
    let scanner = BiasScanner::new(BiasKeywordTable {
        keywords: BTreeMap::from([(BiasCategory::Prestige, vec!["ivy league".to_string()])]),
    });

    let findings = scanner.scan("Young Ivy League graduate", "");

    assert_eq!(
        findings.categories(),
        BTreeSet::from([BiasCategory::Prestige])
    );
    assert_eq!(scanner.table().keywords.len(), 1);
}

#[test]
fn shared_default_scanner_matches_a_fresh_one() {
    let text = "Young female developer seeking local roles";

    assert_eq!(scan_bias(text, ""), BiasScanner::default().scan(text, ""));
    assert_eq!(scan_bias(text, ""), scan_bias(text, ""));
}
