use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{AdmissionId, AdmissionRecord, ApplicationId, ApplicationRecord};

/// Error enumeration for registry failures.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("registry unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction for application records so the service can be
/// exercised against any backend.
pub trait ApplicationStore: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RegistryError>;
    fn update(&self, record: ApplicationRecord) -> Result<(), RegistryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RegistryError>;
    fn delete(&self, id: &ApplicationId) -> Result<(), RegistryError>;
    fn pending(&self, limit: usize) -> Result<Vec<ApplicationRecord>, RegistryError>;
}

/// Storage abstraction for issued admissions.
pub trait AdmissionStore: Send + Sync {
    fn insert(&self, record: AdmissionRecord) -> Result<AdmissionRecord, RegistryError>;
    fn fetch(&self, id: &AdmissionId) -> Result<Option<AdmissionRecord>, RegistryError>;
    fn for_applicant(&self, applicant_name: &str) -> Result<Vec<AdmissionRecord>, RegistryError>;
}

/// Outbound hook notifying applicants of decisions.
pub trait DecisionNotifier: Send + Sync {
    fn publish(&self, notice: DecisionNotice) -> Result<(), NotifyError>;
}

/// Notification payload so routes and tests can assert the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionNotice {
    pub template: String,
    pub application_id: ApplicationId,
    pub details: BTreeMap<String, String>,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
