use super::common::*;
use crate::workflows::qualification::QualificationLevel;

#[test]
fn degree_holder_qualifies_for_degree_career() {
    let engine = engine();
    let profile = strong_degree_profile();

    let outcome = engine.check_career(&profile, "Accountant");

    assert!(outcome.qualified);
    assert_eq!(
        outcome.suitable_courses,
        vec!["Bachelor of Commerce in Accounting".to_string()]
    );
    assert!(outcome.reasons.is_empty());
}

#[test]
fn underqualified_profile_is_routed_to_alternative_paths() {
    let engine = engine();
    let profile = profile(3.0, QualificationLevel::Certificate, &["Mathematics"], true);

    let outcome = engine.check_career(&profile, "Software Developer");

    assert!(!outcome.qualified);
    assert_eq!(
        outcome.suitable_courses,
        vec!["Diploma in Information Technology".to_string()]
    );
    assert!(outcome
        .reasons
        .iter()
        .any(|reason| reason.contains("degree") && reason.contains("certificate")));
    assert!(outcome
        .recommendations
        .iter()
        .any(|recommendation| recommendation.contains("Upgrade")));
}

#[test]
fn masters_and_phd_holders_pass_degree_minimums() {
    let engine = engine();
    let masters = profile(3.5, QualificationLevel::Masters, &[], true);
    let phd = profile(3.8, QualificationLevel::Phd, &[], true);

    assert!(engine.check_career(&masters, "Lawyer").qualified);
    assert!(engine.check_career(&phd, "Lawyer").qualified);
}

#[test]
fn career_check_is_monotonic_in_qualification_level() {
    let engine = engine();
    let levels = QualificationLevel::all();

    for career in engine.catalog().careers() {
        let mut previously_qualified = false;
        for level in levels {
            let candidate = profile(3.0, level, &["Mathematics", "English"], true);
            let outcome = engine.check_career(&candidate, &career.career);
            assert!(
                !previously_qualified || outcome.qualified,
                "raising the level must never disqualify {} at {:?}",
                career.career,
                level
            );
            previously_qualified = outcome.qualified;
        }
    }
}

#[test]
fn unknown_career_is_a_soft_failure() {
    let engine = engine();
    let profile = strong_degree_profile();

    let outcome = engine.check_career(&profile, "Astronaut");

    assert!(!outcome.qualified);
    assert!(outcome.suitable_courses.is_empty());
    assert!(outcome
        .reasons
        .iter()
        .any(|reason| reason.contains("not a recognised career path")));
}
