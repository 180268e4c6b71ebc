use serde::{Deserialize, Serialize};

use super::domain::{QualificationLevel, StudentProfile};

/// Validation errors raised before any rule evaluation runs.
#[derive(Debug, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("a grade point average is required before a check can run")]
    MissingGpa,
    #[error("grade point average {found} falls outside the 0.0-{max} scale")]
    GpaOutOfRange { found: f32, max: f32 },
    #[error("a qualification level is required before a check can run")]
    MissingQualificationLevel,
}

/// Loosely-typed profile input as collected from forms or extracted documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub gpa: Option<f32>,
    pub qualification_level: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub english_proficiency: bool,
}

const DEFAULT_MAX_GPA: f32 = 5.0;

/// Guard responsible for producing `StudentProfile` instances.
#[derive(Debug, Clone)]
pub struct ProfileGuard {
    max_gpa: f32,
}

impl Default for ProfileGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GPA)
    }
}

impl ProfileGuard {
    pub fn new(max_gpa: f32) -> Self {
        let sanitized = if max_gpa.is_finite() && max_gpa > 0.0 {
            max_gpa
        } else {
            DEFAULT_MAX_GPA
        };
        Self { max_gpa: sanitized }
    }

    /// Convert a draft into a validated profile.
    ///
    /// Missing or out-of-range inputs fail with a typed error; an
    /// unrecognized level label is substituted with `Degree` and the
    /// substitution recorded on the profile.
    pub fn profile_from_draft(
        &self,
        draft: ProfileDraft,
    ) -> Result<StudentProfile, ProfileValidationError> {
        let gpa = draft.gpa.ok_or(ProfileValidationError::MissingGpa)?;
        if !gpa.is_finite() || !(0.0..=self.max_gpa).contains(&gpa) {
            return Err(ProfileValidationError::GpaOutOfRange {
                found: gpa,
                max: self.max_gpa,
            });
        }

        let raw_level = draft
            .qualification_level
            .ok_or(ProfileValidationError::MissingQualificationLevel)?;
        let raw_level = raw_level.trim().to_string();
        if raw_level.is_empty() {
            return Err(ProfileValidationError::MissingQualificationLevel);
        }

        let (qualification_level, level_assumed) = match QualificationLevel::from_label(&raw_level)
        {
            Some(level) => (level, false),
            None => {
                tracing::warn!(
                    label = %raw_level,
                    "unrecognized qualification level, assuming degree"
                );
                (QualificationLevel::Degree, true)
            }
        };

        let subjects = draft
            .subjects
            .into_iter()
            .map(|subject| subject.trim().to_string())
            .filter(|subject| !subject.is_empty())
            .collect();

        Ok(StudentProfile {
            gpa,
            qualification_level,
            field: draft.field.unwrap_or_default(),
            subjects,
            english_proficiency: draft.english_proficiency,
            level_assumed,
        })
    }
}
