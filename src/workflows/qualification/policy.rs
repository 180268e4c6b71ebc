use std::collections::BTreeMap;

use crate::catalog::Catalog;

use super::domain::{CareerCheckOutcome, OfflineCheckReport, StudentProfile};

pub(crate) fn decide_career(
    catalog: &Catalog,
    profile: &StudentProfile,
    career: &str,
) -> CareerCheckOutcome {
    let Some(requirement) = catalog.career_requirement(career) else {
        return CareerCheckOutcome {
            career: career.to_string(),
            qualified: false,
            suitable_courses: Vec::new(),
            alternative_paths: Vec::new(),
            reasons: vec![format!("{career} is not a recognised career path")],
            recommendations: vec![
                "Browse the career catalog for the supported paths".to_string(),
            ],
        };
    };

    let held = profile.qualification_level.ordinal();
    let needed = requirement.minimum_qualification_level.ordinal();

    if held >= needed {
        CareerCheckOutcome {
            career: requirement.career.clone(),
            qualified: true,
            suitable_courses: requirement.required_courses.clone(),
            alternative_paths: requirement.alternative_paths.clone(),
            reasons: Vec::new(),
            recommendations: Vec::new(),
        }
    } else {
        CareerCheckOutcome {
            career: requirement.career.clone(),
            qualified: false,
            suitable_courses: requirement.alternative_paths.clone(),
            alternative_paths: requirement.alternative_paths.clone(),
            reasons: vec![format!(
                "{} requires at least a {} qualification; current level is {}",
                requirement.career,
                requirement.minimum_qualification_level.label(),
                profile.qualification_level.label()
            )],
            recommendations: vec![format!(
                "Upgrade your qualification to {} level; in the meantime consider: {}",
                requirement.minimum_qualification_level.label(),
                requirement.alternative_paths.join(", ")
            )],
        }
    }
}

/// Sweep every catalog career with an independent check per entry.
pub(crate) fn offline_report(catalog: &Catalog, profile: &StudentProfile) -> OfflineCheckReport {
    let mut possible_careers = Vec::new();
    let mut career_specific_courses = BTreeMap::new();

    for requirement in catalog.careers() {
        let outcome = decide_career(catalog, profile, &requirement.career);
        if outcome.qualified {
            possible_careers.push(outcome.career.clone());
            career_specific_courses.insert(outcome.career, outcome.suitable_courses);
        }
    }

    let recommended_courses = catalog
        .courses_for_level(profile.qualification_level)
        .map(|course| course.course_name.clone())
        .collect();

    OfflineCheckReport {
        possible_careers,
        recommended_courses,
        career_specific_courses,
    }
}
