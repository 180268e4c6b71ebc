use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

use super::{JobPosting, QualificationLevel};

/// Posting fields supplied when a company publishes a new role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub employment_type: String,
    pub category: String,
    pub required_skills: Vec<String>,
    pub education_required: QualificationLevel,
    pub experience_required: u8,
    pub description: String,
}

static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_job_id() -> String {
    let id = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("job-{id:04}")
}

/// In-memory posting registry; contents are lost on restart.
///
/// Mutations are last-writer-wins; no ordering guarantees beyond the
/// insertion sequence are provided.
pub struct JobBoard {
    postings: Mutex<Vec<JobPosting>>,
}

impl JobBoard {
    pub fn empty() -> Self {
        Self {
            postings: Mutex::new(Vec::new()),
        }
    }

    /// Board preloaded with the catalog's seed postings.
    pub fn seeded(catalog: &Catalog) -> Self {
        Self {
            postings: Mutex::new(catalog.seed_jobs().to_vec()),
        }
    }

    pub fn add(&self, draft: JobDraft) -> JobPosting {
        let posting = JobPosting {
            id: next_job_id(),
            title: draft.title,
            company: draft.company,
            location: draft.location,
            salary: draft.salary,
            employment_type: draft.employment_type,
            category: draft.category,
            required_skills: draft.required_skills,
            education_required: draft.education_required,
            experience_required: draft.experience_required,
            description: draft.description,
        };
        self.postings
            .lock()
            .expect("job board mutex poisoned")
            .push(posting.clone());
        posting
    }

    pub fn all(&self) -> Vec<JobPosting> {
        self.postings
            .lock()
            .expect("job board mutex poisoned")
            .clone()
    }

    pub fn remove(&self, id: &str) -> bool {
        let mut postings = self.postings.lock().expect("job board mutex poisoned");
        let before = postings.len();
        postings.retain(|posting| posting.id != id);
        postings.len() < before
    }
}
