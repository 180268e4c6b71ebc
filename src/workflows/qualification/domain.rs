use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordinal tier gating course and career eligibility.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum QualificationLevel {
    #[default]
    Certificate,
    Diploma,
    Degree,
    Masters,
    Phd,
}

impl QualificationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            QualificationLevel::Certificate => "certificate",
            QualificationLevel::Diploma => "diploma",
            QualificationLevel::Degree => "degree",
            QualificationLevel::Masters => "masters",
            QualificationLevel::Phd => "phd",
        }
    }

    /// Complete five-tier ordinal used for minimum-level comparisons.
    pub const fn ordinal(self) -> u8 {
        match self {
            QualificationLevel::Certificate => 1,
            QualificationLevel::Diploma => 2,
            QualificationLevel::Degree => 3,
            QualificationLevel::Masters => 4,
            QualificationLevel::Phd => 5,
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "certificate" => Some(Self::Certificate),
            "diploma" => Some(Self::Diploma),
            "degree" | "bachelor" | "bachelors" => Some(Self::Degree),
            "masters" | "master" => Some(Self::Masters),
            "phd" | "doctorate" => Some(Self::Phd),
            _ => None,
        }
    }

    pub const fn all() -> [QualificationLevel; 5] {
        [
            QualificationLevel::Certificate,
            QualificationLevel::Diploma,
            QualificationLevel::Degree,
            QualificationLevel::Masters,
            QualificationLevel::Phd,
        ]
    }
}

/// Validated student snapshot consumed by every check; immutable per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub gpa: f32,
    pub qualification_level: QualificationLevel,
    pub field: String,
    pub subjects: Vec<String>,
    pub english_proficiency: bool,
    /// Set when an unrecognized level label was substituted with `Degree`.
    #[serde(default)]
    pub level_assumed: bool,
}

/// Published entry requirements for a single course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRequirement {
    pub course_name: String,
    pub level: QualificationLevel,
    pub minimum_gpa: f32,
    pub required_subjects: Vec<String>,
    pub english_proficiency: bool,
    pub additional_requirements: Vec<String>,
}

/// Entry requirements for a career path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRequirement {
    pub career: String,
    pub required_courses: Vec<String>,
    pub minimum_qualification_level: QualificationLevel,
    pub alternative_paths: Vec<String>,
}

/// The predicates a course check evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    Gpa,
    Subjects,
    EnglishProficiency,
}

/// Structured result of one predicate, kept for auditability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementCheck {
    pub requirement: RequirementKind,
    pub satisfied: bool,
    pub detail: String,
}

/// Outcome of checking a profile against one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseCheckOutcome {
    pub course_name: String,
    pub qualified: bool,
    pub reasons: Vec<String>,
    pub recommendations: Vec<String>,
    pub checks: Vec<RequirementCheck>,
    /// True when no catalog entry existed and level defaults were applied.
    pub used_default_requirements: bool,
}

/// Outcome of checking a profile against one career path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerCheckOutcome {
    pub career: String,
    pub qualified: bool,
    pub suitable_courses: Vec<String>,
    pub alternative_paths: Vec<String>,
    pub reasons: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Full guidance sweep across every catalog career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfflineCheckReport {
    pub possible_careers: Vec<String>,
    pub recommended_courses: Vec<String>,
    pub career_specific_courses: BTreeMap<String, Vec<String>>,
}
