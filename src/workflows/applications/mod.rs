//! Application and admission registries: records with lifecycle statuses,
//! storage traits with the in-memory backend, and the service tying intake,
//! eligibility checks, and decisions together.

pub mod domain;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AdmissionId, AdmissionRecord, ApplicationId, ApplicationPatch, ApplicationRecord,
    ApplicationStatus, ApplicationStatusView, ApplicationSubmission,
};
pub use memory::{InMemoryAdmissions, InMemoryApplications, TracingNotifier};
pub use repository::{
    AdmissionStore, ApplicationStore, DecisionNotice, DecisionNotifier, NotifyError,
    RegistryError,
};
pub use router::applications_router;
pub use service::{ApplicationsService, GuidanceServiceError};
