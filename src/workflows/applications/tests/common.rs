use std::sync::{Arc, Mutex};

use crate::catalog::Catalog;
use crate::workflows::applications::domain::{
    AdmissionId, AdmissionRecord, ApplicationId, ApplicationRecord, ApplicationSubmission,
};
use crate::workflows::applications::memory::{InMemoryAdmissions, InMemoryApplications};
use crate::workflows::applications::repository::{
    AdmissionStore, ApplicationStore, DecisionNotice, DecisionNotifier, NotifyError,
    RegistryError,
};
use crate::workflows::applications::service::ApplicationsService;
use crate::workflows::qualification::{ProfileDraft, QualificationEngine};

pub(super) fn submission() -> ApplicationSubmission {
    ApplicationSubmission {
        applicant_name: "Lineo Mokoena".to_string(),
        course_name: "Bachelor of Commerce in Accounting".to_string(),
        institution: "National University of Lesotho".to_string(),
        profile: ProfileDraft {
            gpa: Some(3.2),
            qualification_level: Some("degree".to_string()),
            field: Some("Commerce".to_string()),
            subjects: vec!["Mathematics".to_string(), "English".to_string()],
            english_proficiency: true,
        },
        save_as_draft: false,
    }
}

pub(super) fn missing_gpa_submission() -> ApplicationSubmission {
    let mut submission = submission();
    submission.profile.gpa = None;
    submission
}

pub(super) fn unqualified_submission() -> ApplicationSubmission {
    let mut submission = submission();
    submission.profile.gpa = Some(1.9);
    submission.profile.subjects.clear();
    submission.profile.english_proficiency = false;
    submission
}

pub(super) type MemoryService =
    ApplicationsService<InMemoryApplications, InMemoryAdmissions, MemoryNotifier>;

pub(super) fn build_service() -> (
    MemoryService,
    Arc<InMemoryApplications>,
    Arc<InMemoryAdmissions>,
    Arc<MemoryNotifier>,
) {
    let engine = Arc::new(QualificationEngine::new(Arc::new(Catalog::standard())));
    let applications = Arc::new(InMemoryApplications::default());
    let admissions = Arc::new(InMemoryAdmissions::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = ApplicationsService::new(
        engine,
        applications.clone(),
        admissions.clone(),
        notifier.clone(),
    );
    (service, applications, admissions, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    notices: Arc<Mutex<Vec<DecisionNotice>>>,
}

impl MemoryNotifier {
    pub(super) fn notices(&self) -> Vec<DecisionNotice> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }
}

impl DecisionNotifier for MemoryNotifier {
    fn publish(&self, notice: DecisionNotice) -> Result<(), NotifyError> {
        self.notices
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct ConflictApplications;

impl ApplicationStore for ConflictApplications {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RegistryError> {
        Err(RegistryError::Conflict)
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RegistryError> {
        Err(RegistryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RegistryError> {
        Ok(None)
    }

    fn delete(&self, _id: &ApplicationId) -> Result<(), RegistryError> {
        Err(RegistryError::NotFound)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RegistryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableApplications;

impl ApplicationStore for UnavailableApplications {
    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RegistryError> {
        Err(RegistryError::Unavailable("registry offline".to_string()))
    }

    fn update(&self, _record: ApplicationRecord) -> Result<(), RegistryError> {
        Err(RegistryError::Unavailable("registry offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RegistryError> {
        Err(RegistryError::Unavailable("registry offline".to_string()))
    }

    fn delete(&self, _id: &ApplicationId) -> Result<(), RegistryError> {
        Err(RegistryError::Unavailable("registry offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<ApplicationRecord>, RegistryError> {
        Err(RegistryError::Unavailable("registry offline".to_string()))
    }
}

pub(super) fn conflict_service() -> ApplicationsService<
    ConflictApplications,
    InMemoryAdmissions,
    MemoryNotifier,
> {
    let engine = Arc::new(QualificationEngine::new(Arc::new(Catalog::standard())));
    ApplicationsService::new(
        engine,
        Arc::new(ConflictApplications),
        Arc::new(InMemoryAdmissions::default()),
        Arc::new(MemoryNotifier::default()),
    )
}

pub(super) fn unavailable_service() -> ApplicationsService<
    UnavailableApplications,
    InMemoryAdmissions,
    MemoryNotifier,
> {
    let engine = Arc::new(QualificationEngine::new(Arc::new(Catalog::standard())));
    ApplicationsService::new(
        engine,
        Arc::new(UnavailableApplications),
        Arc::new(InMemoryAdmissions::default()),
        Arc::new(MemoryNotifier::default()),
    )
}

pub(super) fn admission_for(
    admissions: &InMemoryAdmissions,
    applicant: &str,
) -> Option<AdmissionRecord> {
    admissions
        .for_applicant(applicant)
        .expect("admission store reachable")
        .into_iter()
        .next()
}

pub(super) fn stored_admission(
    admissions: &InMemoryAdmissions,
    id: &AdmissionId,
) -> Option<AdmissionRecord> {
    admissions.fetch(id).expect("admission store reachable")
}
