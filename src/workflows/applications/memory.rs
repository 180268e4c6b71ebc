use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::{
    AdmissionId, AdmissionRecord, ApplicationId, ApplicationRecord, ApplicationStatus,
};
use super::repository::{
    AdmissionStore, ApplicationStore, DecisionNotice, DecisionNotifier, NotifyError,
    RegistryError,
};

fn poisoned(_: impl std::fmt::Debug) -> RegistryError {
    RegistryError::Unavailable("registry mutex poisoned".to_string())
}

/// Process-wide application registry; contents are lost on restart.
#[derive(Default, Clone)]
pub struct InMemoryApplications {
    records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationStore for InMemoryApplications {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RegistryError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        if guard.contains_key(&record.application_id) {
            return Err(RegistryError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ApplicationRecord) -> Result<(), RegistryError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        guard.insert(record.application_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RegistryError> {
        let guard = self.records.lock().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    fn delete(&self, id: &ApplicationId) -> Result<(), RegistryError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        guard.remove(id).map(|_| ()).ok_or(RegistryError::NotFound)
    }

    fn pending(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RegistryError> {
        let guard = self.records.lock().map_err(poisoned)?;
        let mut pending: Vec<ApplicationRecord> = guard
            .values()
            .filter(|record| record.status == ApplicationStatus::PendingReview)
            .cloned()
            .collect();
        pending.sort_by(|a, b| a.application_id.0.cmp(&b.application_id.0));
        pending.truncate(limit);
        Ok(pending)
    }
}

/// Process-wide admission registry.
#[derive(Default, Clone)]
pub struct InMemoryAdmissions {
    records: Arc<Mutex<HashMap<AdmissionId, AdmissionRecord>>>,
}

impl AdmissionStore for InMemoryAdmissions {
    fn insert(&self, record: AdmissionRecord) -> Result<AdmissionRecord, RegistryError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        if guard.contains_key(&record.admission_id) {
            return Err(RegistryError::Conflict);
        }
        guard.insert(record.admission_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AdmissionId) -> Result<Option<AdmissionRecord>, RegistryError> {
        let guard = self.records.lock().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    fn for_applicant(&self, applicant_name: &str) -> Result<Vec<AdmissionRecord>, RegistryError> {
        let guard = self.records.lock().map_err(poisoned)?;
        let mut matches: Vec<AdmissionRecord> = guard
            .values()
            .filter(|record| record.applicant_name.eq_ignore_ascii_case(applicant_name))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.admission_id.0.cmp(&b.admission_id.0));
        Ok(matches)
    }
}

/// Notifier that records decisions in the service log.
#[derive(Default, Clone)]
pub struct TracingNotifier;

impl DecisionNotifier for TracingNotifier {
    fn publish(&self, notice: DecisionNotice) -> Result<(), NotifyError> {
        tracing::info!(
            template = %notice.template,
            application_id = %notice.application_id.0,
            "decision notification published"
        );
        Ok(())
    }
}
