use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::qualification::{CourseCheckOutcome, ProfileDraft, StudentProfile};

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Identifier wrapper for issued admissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdmissionId(pub String);

/// Lifecycle status tracked on every application record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    PendingReview,
    Accepted,
    Rejected,
    Closed,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "draft",
            ApplicationStatus::PendingReview => "pending_review",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Closed => "closed",
        }
    }

}

/// Inbound course application as collected from the applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub applicant_name: String,
    pub course_name: String,
    pub institution: String,
    pub profile: ProfileDraft,
    #[serde(default)]
    pub save_as_draft: bool,
}

/// Partial update applied to a stored application; absent fields are left
/// untouched. Last writer wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationPatch {
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
    #[serde(default)]
    pub reviewer_note: Option<String>,
}

/// Stored application with its validated profile and embedded check outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub applicant_name: String,
    pub course_name: String,
    pub institution: String,
    pub profile: StudentProfile,
    pub status: ApplicationStatus,
    pub check: Option<CourseCheckOutcome>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reviewer_notes: Vec<String>,
}

impl ApplicationRecord {
    pub fn eligibility_summary(&self) -> String {
        match &self.check {
            Some(outcome) if outcome.qualified => {
                "meets the published course requirements".to_string()
            }
            Some(outcome) if outcome.reasons.is_empty() => {
                "eligibility undetermined".to_string()
            }
            Some(outcome) => outcome.reasons.join("; "),
            None => "pending eligibility check".to_string(),
        }
    }

    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.application_id.clone(),
            status: self.status.label(),
            eligibility: self.eligibility_summary(),
            qualified: self.check.as_ref().map(|outcome| outcome.qualified),
            updated_at: self.updated_at,
        }
    }
}

/// Sanitized representation of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub status: &'static str,
    pub eligibility: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualified: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

/// Admission issued when an application is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionRecord {
    pub admission_id: AdmissionId,
    pub application_id: ApplicationId,
    pub applicant_name: String,
    pub course_name: String,
    pub institution: String,
    pub decided_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
