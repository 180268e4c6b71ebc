use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::workflows::qualification::{
    ProfileGuard, ProfileValidationError, QualificationEngine,
};

use super::domain::{
    AdmissionId, AdmissionRecord, ApplicationId, ApplicationPatch, ApplicationRecord,
    ApplicationStatus, ApplicationSubmission,
};
use super::repository::{
    AdmissionStore, ApplicationStore, DecisionNotice, DecisionNotifier, NotifyError,
    RegistryError,
};

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static ADMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

fn next_admission_id() -> AdmissionId {
    let id = ADMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AdmissionId(format!("adm-{id:06}"))
}

/// Service composing the validation guard, rule engine, registries, and the
/// decision notifier.
pub struct ApplicationsService<S, D, N> {
    guard: ProfileGuard,
    engine: Arc<QualificationEngine>,
    applications: Arc<S>,
    admissions: Arc<D>,
    notifier: Arc<N>,
}

impl<S, D, N> ApplicationsService<S, D, N>
where
    S: ApplicationStore + 'static,
    D: AdmissionStore + 'static,
    N: DecisionNotifier + 'static,
{
    pub fn new(
        engine: Arc<QualificationEngine>,
        applications: Arc<S>,
        admissions: Arc<D>,
        notifier: Arc<N>,
    ) -> Self {
        Self {
            guard: ProfileGuard::default(),
            engine,
            applications,
            admissions,
            notifier,
        }
    }

    /// Validate, check eligibility, and store a new application.
    pub fn submit(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<ApplicationRecord, GuidanceServiceError> {
        let profile = self.guard.profile_from_draft(submission.profile)?;
        let check = self.engine.check_course(&profile, &submission.course_name);

        let status = if submission.save_as_draft {
            ApplicationStatus::Draft
        } else {
            ApplicationStatus::PendingReview
        };

        let now = Utc::now();
        let record = ApplicationRecord {
            application_id: next_application_id(),
            applicant_name: submission.applicant_name,
            course_name: submission.course_name,
            institution: submission.institution,
            profile,
            status,
            check: Some(check),
            submitted_at: now,
            updated_at: now,
            reviewer_notes: Vec::new(),
        };

        let stored = self.applications.insert(record)?;
        Ok(stored)
    }

    /// Apply a patch to a stored application, stamping `updated_at`.
    ///
    /// Acceptance issues an admission record and a notification; repeated
    /// acceptance patches do not issue duplicates.
    pub fn decide(
        &self,
        application_id: &ApplicationId,
        patch: ApplicationPatch,
    ) -> Result<ApplicationRecord, GuidanceServiceError> {
        let mut record = self
            .applications
            .fetch(application_id)?
            .ok_or(RegistryError::NotFound)?;

        let previous_status = record.status;

        if let Some(note) = patch.reviewer_note {
            record.reviewer_notes.push(note);
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
        record.updated_at = Utc::now();

        self.applications.update(record.clone())?;

        if record.status == ApplicationStatus::Accepted
            && previous_status != ApplicationStatus::Accepted
        {
            let now = Utc::now();
            let admission = AdmissionRecord {
                admission_id: next_admission_id(),
                application_id: record.application_id.clone(),
                applicant_name: record.applicant_name.clone(),
                course_name: record.course_name.clone(),
                institution: record.institution.clone(),
                decided_at: now,
                updated_at: now,
            };
            self.admissions.insert(admission)?;

            let mut details = BTreeMap::new();
            details.insert("course".to_string(), record.course_name.clone());
            details.insert("institution".to_string(), record.institution.clone());
            self.notifier.publish(DecisionNotice {
                template: "application_accepted".to_string(),
                application_id: record.application_id.clone(),
                details,
            })?;
        }

        Ok(record)
    }

    /// Fetch an application for API responses.
    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, GuidanceServiceError> {
        let record = self
            .applications
            .fetch(application_id)?
            .ok_or(RegistryError::NotFound)?;
        Ok(record)
    }

    /// Remove an application entirely.
    pub fn withdraw(&self, application_id: &ApplicationId) -> Result<(), GuidanceServiceError> {
        self.applications.delete(application_id)?;
        Ok(())
    }

    /// Applications awaiting review, oldest ids first.
    pub fn pending(&self, limit: usize) -> Result<Vec<ApplicationRecord>, GuidanceServiceError> {
        Ok(self.applications.pending(limit)?)
    }

    /// Fetch an issued admission.
    pub fn admission(
        &self,
        admission_id: &AdmissionId,
    ) -> Result<AdmissionRecord, GuidanceServiceError> {
        let record = self
            .admissions
            .fetch(admission_id)?
            .ok_or(RegistryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the applications service.
#[derive(Debug, thiserror::Error)]
pub enum GuidanceServiceError {
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Notification(#[from] NotifyError),
}
