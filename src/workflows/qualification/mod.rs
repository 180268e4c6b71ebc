//! Qualification rule engine: course and career eligibility checks over the
//! injected catalog, plus the validation guard that precedes them.

pub mod domain;
mod policy;
mod rules;
pub mod validation;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::catalog::Catalog;

pub use domain::{
    CareerCheckOutcome, CareerRequirement, CourseCheckOutcome, CourseRequirement,
    OfflineCheckReport, QualificationLevel, RequirementCheck, RequirementKind, StudentProfile,
};
pub use validation::{ProfileDraft, ProfileGuard, ProfileValidationError};

/// Stateless evaluator over the reference catalog.
///
/// Checks never fail for business-rule mismatches; a non-match is a valid
/// outcome with itemized reasons.
pub struct QualificationEngine {
    catalog: Arc<Catalog>,
}

impl QualificationEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Check a profile against one course's published requirements.
    ///
    /// Unknown courses fall back to the profile tier's default requirements;
    /// the fallback is flagged on the outcome rather than applied silently.
    pub fn check_course(&self, profile: &StudentProfile, course_name: &str) -> CourseCheckOutcome {
        let (requirement, used_default) = match self.catalog.course_requirement(course_name) {
            Some(found) => (found.clone(), false),
            None => {
                tracing::warn!(
                    course = %course_name,
                    level = %profile.qualification_level.label(),
                    "no catalog entry for course, applying level defaults"
                );
                (
                    self.catalog
                        .default_requirement(profile.qualification_level),
                    true,
                )
            }
        };

        let (checks, reasons, recommendations) = rules::evaluate_course(profile, &requirement);
        let qualified = checks.iter().all(|check| check.satisfied);

        CourseCheckOutcome {
            course_name: course_name.to_string(),
            qualified,
            reasons,
            recommendations,
            checks,
            used_default_requirements: used_default,
        }
    }

    /// Check a profile against one career path's minimum qualification level.
    pub fn check_career(&self, profile: &StudentProfile, career: &str) -> CareerCheckOutcome {
        policy::decide_career(&self.catalog, profile, career)
    }

    /// Sweep every catalog career, retaining those the profile qualifies for.
    pub fn offline_check(&self, profile: &StudentProfile) -> OfflineCheckReport {
        policy::offline_report(&self.catalog, profile)
    }
}
