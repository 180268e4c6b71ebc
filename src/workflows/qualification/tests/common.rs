use std::sync::Arc;

use crate::catalog::Catalog;
use crate::workflows::qualification::{
    ProfileDraft, ProfileGuard, QualificationEngine, QualificationLevel, StudentProfile,
};

pub(super) fn engine() -> QualificationEngine {
    QualificationEngine::new(Arc::new(Catalog::standard()))
}

pub(super) fn guard() -> ProfileGuard {
    ProfileGuard::default()
}

pub(super) fn profile(
    gpa: f32,
    level: QualificationLevel,
    subjects: &[&str],
    english: bool,
) -> StudentProfile {
    StudentProfile {
        gpa,
        qualification_level: level,
        field: "Commerce".to_string(),
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
        english_proficiency: english,
        level_assumed: false,
    }
}

pub(super) fn strong_degree_profile() -> StudentProfile {
    profile(
        3.2,
        QualificationLevel::Degree,
        &["Mathematics", "English"],
        true,
    )
}

pub(super) fn weak_diploma_profile() -> StudentProfile {
    profile(1.9, QualificationLevel::Diploma, &[], false)
}

pub(super) fn draft(gpa: Option<f32>, level: Option<&str>) -> ProfileDraft {
    ProfileDraft {
        gpa,
        qualification_level: level.map(|value| value.to_string()),
        field: Some("Commerce".to_string()),
        subjects: vec!["Mathematics".to_string(), "English".to_string()],
        english_proficiency: true,
    }
}
