use super::domain::{CourseRequirement, RequirementCheck, RequirementKind, StudentProfile};

pub(crate) fn normalize_subject(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

fn subject_present(profile: &StudentProfile, required: &str) -> bool {
    let needle = normalize_subject(required);
    profile
        .subjects
        .iter()
        .any(|held| normalize_subject(held).contains(&needle))
}

/// Evaluate the three course predicates independently.
///
/// Every predicate emits a structured check; failed predicates additionally
/// contribute one reason and one recommendation. Additional requirements are
/// informational only and never block.
pub(crate) fn evaluate_course(
    profile: &StudentProfile,
    requirement: &CourseRequirement,
) -> (Vec<RequirementCheck>, Vec<String>, Vec<String>) {
    let mut checks = Vec::new();
    let mut reasons = Vec::new();
    let mut recommendations = Vec::new();

    if profile.gpa + f32::EPSILON >= requirement.minimum_gpa {
        checks.push(RequirementCheck {
            requirement: RequirementKind::Gpa,
            satisfied: true,
            detail: format!(
                "GPA {:.2} meets the minimum {:.2}",
                profile.gpa, requirement.minimum_gpa
            ),
        });
    } else {
        checks.push(RequirementCheck {
            requirement: RequirementKind::Gpa,
            satisfied: false,
            detail: format!(
                "GPA {:.2} below the minimum {:.2}",
                profile.gpa, requirement.minimum_gpa
            ),
        });
        reasons.push(format!(
            "GPA {:.2} is below the minimum {:.2} required for {}",
            profile.gpa, requirement.minimum_gpa, requirement.course_name
        ));
        recommendations.push(
            "Improve your GPA through bridging or foundation programmes before applying"
                .to_string(),
        );
    }

    let missing: Vec<String> = requirement
        .required_subjects
        .iter()
        .filter(|required| !subject_present(profile, required))
        .cloned()
        .collect();

    if missing.is_empty() {
        let detail = if requirement.required_subjects.is_empty() {
            "no subject requirements".to_string()
        } else {
            format!(
                "all {} required subject(s) present",
                requirement.required_subjects.len()
            )
        };
        checks.push(RequirementCheck {
            requirement: RequirementKind::Subjects,
            satisfied: true,
            detail,
        });
    } else {
        checks.push(RequirementCheck {
            requirement: RequirementKind::Subjects,
            satisfied: false,
            detail: format!("missing {} required subject(s)", missing.len()),
        });
        reasons.push(format!(
            "Missing required subjects: {}",
            missing.join(", ")
        ));
        recommendations.push(format!(
            "Add {} to your subject record before applying",
            missing.join(", ")
        ));
    }

    if requirement.english_proficiency && !profile.english_proficiency {
        checks.push(RequirementCheck {
            requirement: RequirementKind::EnglishProficiency,
            satisfied: false,
            detail: "English proficiency required but not demonstrated".to_string(),
        });
        reasons.push("English proficiency is required but not demonstrated".to_string());
        recommendations
            .push("Complete an accredited English proficiency assessment".to_string());
    } else {
        let detail = if requirement.english_proficiency {
            "English proficiency demonstrated".to_string()
        } else {
            "English proficiency not required".to_string()
        };
        checks.push(RequirementCheck {
            requirement: RequirementKind::EnglishProficiency,
            satisfied: true,
            detail,
        });
    }

    if !requirement.additional_requirements.is_empty() {
        recommendations.push(format!(
            "Be prepared for additional requirements: {}",
            requirement.additional_requirements.join(", ")
        ));
    }

    (checks, reasons, recommendations)
}
