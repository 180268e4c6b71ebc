use super::common::*;
use crate::workflows::qualification::{QualificationLevel, RequirementKind};

#[test]
fn strong_profile_qualifies_for_accounting() {
    let engine = engine();
    let profile = strong_degree_profile();

    let outcome = engine.check_course(&profile, "Bachelor of Commerce in Accounting");

    assert!(outcome.qualified);
    assert!(outcome.reasons.is_empty());
    assert!(!outcome.used_default_requirements);
    assert!(outcome.checks.iter().all(|check| check.satisfied));
}

#[test]
fn additional_requirements_are_informational_only() {
    let engine = engine();
    let profile = strong_degree_profile();

    let outcome = engine.check_course(&profile, "Bachelor of Laws (LLB)");

    assert!(outcome.qualified);
    assert!(outcome.reasons.is_empty());
    assert!(outcome
        .recommendations
        .iter()
        .any(|recommendation| recommendation.contains("Interview")));
}

#[test]
fn weak_profile_fails_degree_course_with_multiple_reasons() {
    let engine = engine();
    let profile = weak_diploma_profile();

    let outcome = engine.check_course(&profile, "Bachelor of Commerce in Accounting");

    assert!(!outcome.qualified);
    assert!(outcome.reasons.len() >= 2);
    assert!(outcome
        .reasons
        .iter()
        .any(|reason| reason.contains("GPA")));
    assert!(outcome
        .reasons
        .iter()
        .any(|reason| reason.contains("English proficiency")));
}

#[test]
fn missing_subject_reason_names_exactly_the_missing_set() {
    let engine = engine();
    let profile = profile(
        3.0,
        QualificationLevel::Degree,
        &["English Language"],
        true,
    );

    let outcome = engine.check_course(&profile, "Bachelor of Science in Computer Science");

    assert!(!outcome.qualified);
    let subject_reason = outcome
        .reasons
        .iter()
        .find(|reason| reason.starts_with("Missing required subjects"))
        .expect("subject reason present");
    assert_eq!(
        subject_reason,
        "Missing required subjects: Mathematics, Physical Science"
    );
}

#[test]
fn subject_matching_is_case_insensitive_substring() {
    let engine = engine();
    let profile = profile(
        3.0,
        QualificationLevel::Degree,
        &["pure MATHEMATICS", "english language", "physical science"],
        true,
    );

    let outcome = engine.check_course(&profile, "Bachelor of Science in Computer Science");

    assert!(outcome.qualified, "reasons: {:?}", outcome.reasons);
}

#[test]
fn empty_subject_requirements_pass_trivially() {
    let engine = engine();
    let profile = profile(2.0, QualificationLevel::Certificate, &[], false);

    let outcome = engine.check_course(&profile, "Certificate in Office Administration");

    assert!(outcome.qualified);
    let subjects_check = outcome
        .checks
        .iter()
        .find(|check| check.requirement == RequirementKind::Subjects)
        .expect("subjects check present");
    assert!(subjects_check.satisfied);
}

#[test]
fn gpa_exactly_at_minimum_passes() {
    let engine = engine();
    let profile = profile(
        2.5,
        QualificationLevel::Degree,
        &["Mathematics", "English"],
        true,
    );

    let outcome = engine.check_course(&profile, "Bachelor of Commerce in Accounting");

    assert!(outcome.qualified);
}

#[test]
fn unknown_course_falls_back_to_level_defaults_and_flags_it() {
    let engine = engine();
    let profile = strong_degree_profile();

    let outcome = engine.check_course(&profile, "Bachelor of Astrogation");

    assert!(outcome.used_default_requirements);
    // Degree defaults: GPA 2.5, English subject, proficiency required.
    assert!(outcome.qualified, "reasons: {:?}", outcome.reasons);
}

#[test]
fn unknown_course_defaults_follow_the_profile_tier() {
    let engine = engine();
    let profile = profile(1.9, QualificationLevel::Certificate, &[], false);

    let outcome = engine.check_course(&profile, "Course Nobody Offers");

    assert!(outcome.used_default_requirements);
    // Certificate defaults require only GPA 1.8.
    assert!(outcome.qualified, "reasons: {:?}", outcome.reasons);
}

#[test]
fn failed_predicates_come_with_recommendations() {
    let engine = engine();
    let profile = weak_diploma_profile();

    let outcome = engine.check_course(&profile, "Bachelor of Laws (LLB)");

    assert!(!outcome.qualified);
    assert!(!outcome.recommendations.is_empty());
}
