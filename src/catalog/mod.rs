//! Read-only reference tables: institutions, course and career requirements,
//! and seed job postings. Engines receive the catalog by injection.

mod careers;
mod courses;
mod institutions;
mod jobs;

pub use institutions::{Institution, InstitutionKind};

use crate::workflows::matching::JobPosting;
use crate::workflows::qualification::{CareerRequirement, CourseRequirement, QualificationLevel};

pub struct Catalog {
    courses: Vec<CourseRequirement>,
    careers: Vec<CareerRequirement>,
    institutions: Vec<Institution>,
    jobs: Vec<JobPosting>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            courses: courses::standard_courses(),
            careers: careers::standard_careers(),
            institutions: institutions::standard_institutions(),
            jobs: jobs::seed_jobs(),
        }
    }

    /// Name lookup is case-insensitive on the trimmed course name.
    pub fn course_requirement(&self, course_name: &str) -> Option<&CourseRequirement> {
        let wanted = course_name.trim();
        self.courses
            .iter()
            .find(|course| course.course_name.eq_ignore_ascii_case(wanted))
    }

    /// Requirement record applied when no course entry exists for the name.
    pub fn default_requirement(&self, level: QualificationLevel) -> CourseRequirement {
        courses::default_requirement(level)
    }

    pub fn career_requirement(&self, career: &str) -> Option<&CareerRequirement> {
        let wanted = career.trim();
        self.careers
            .iter()
            .find(|entry| entry.career.eq_ignore_ascii_case(wanted))
    }

    pub fn courses(&self) -> &[CourseRequirement] {
        &self.courses
    }

    pub fn courses_for_level(
        &self,
        level: QualificationLevel,
    ) -> impl Iterator<Item = &CourseRequirement> {
        self.courses.iter().filter(move |course| course.level == level)
    }

    pub fn careers(&self) -> &[CareerRequirement] {
        &self.careers
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn institution(&self, name: &str) -> Option<&Institution> {
        let wanted = name.trim();
        self.institutions.iter().find(|entry| {
            entry.name.eq_ignore_ascii_case(wanted) || entry.short_name.eq_ignore_ascii_case(wanted)
        })
    }

    pub fn seed_jobs(&self) -> &[JobPosting] {
        &self.jobs
    }
}
