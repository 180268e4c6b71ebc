//! Job matching scorer and the in-memory job board it ranks against.

pub mod board;
pub mod import;
mod scoring;
pub mod weights;

use serde::{Deserialize, Serialize};

pub use crate::workflows::qualification::QualificationLevel;
pub use board::{JobBoard, JobDraft};
pub use import::{JobBoardCsvImporter, JobImportError, JobImportSummary};
pub use weights::MatchWeights;

/// An advertised role as companies publish it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
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

/// Candidate snapshot the scorer ranks postings against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub qualification_level: QualificationLevel,
    #[serde(default)]
    pub preferred_location: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub experience_years: u8,
}

/// A posting annotated with its match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJob {
    pub posting: JobPosting,
    pub match_score: u8,
    pub matched_skills: Vec<String>,
}

/// Pure scorer over candidate/posting pairs.
pub struct MatchEngine {
    weights: MatchWeights,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchWeights::default())
    }
}

impl MatchEngine {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    /// Rank postings by descending match score.
    ///
    /// The sort is stable, so tied postings keep their input order. Scores
    /// always land in the 0-100 range.
    pub fn rank(&self, profile: &CandidateProfile, jobs: &[JobPosting]) -> Vec<RankedJob> {
        let mut ranked: Vec<RankedJob> = jobs
            .iter()
            .map(|job| {
                let (score, signals) = scoring::score_job(profile, job, &self.weights);
                RankedJob {
                    posting: job.clone(),
                    match_score: score.round() as u8,
                    matched_skills: signals.matched_skills,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        ranked
    }

    /// Human-readable explanation of a single posting's score.
    pub fn match_reasons(&self, profile: &CandidateProfile, job: &JobPosting) -> Vec<String> {
        let (_, signals) = scoring::score_job(profile, job, &self.weights);
        let mut reasons = Vec::new();

        if signals.required_total == 0 {
            reasons.push("No specific skills required for this role".to_string());
        } else if signals.matched_skills.is_empty() {
            reasons.push(format!(
                "None of the {} required skills matched",
                signals.required_total
            ));
        } else {
            reasons.push(format!(
                "Matches {} of {} required skills: {}",
                signals.matched_skills.len(),
                signals.required_total,
                signals.matched_skills.join(", ")
            ));
        }

        if signals.education_gap > 0 {
            reasons.push(format!(
                "Role requires {} level; candidate holds {}",
                job.education_required.label(),
                profile.qualification_level.label()
            ));
        } else {
            reasons.push(format!(
                "Meets the {} education requirement",
                job.education_required.label()
            ));
        }

        if signals.experience_gap > 0 {
            reasons.push(format!(
                "Short {} year(s) of the required experience",
                signals.experience_gap
            ));
        }

        if signals.location_match {
            reasons.push(format!("Located in preferred area {}", job.location));
        }

        if signals.interest_match {
            reasons.push(format!(
                "{} work aligns with stated interests",
                job.category
            ));
        }

        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(id: &str, skills: &[&str], education: QualificationLevel) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: "Systems Analyst".to_string(),
            company: "Vodacom Lesotho".to_string(),
            location: "Maseru".to_string(),
            salary: "M15,000 per month".to_string(),
            employment_type: "full-time".to_string(),
            category: "Information Technology".to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            education_required: education,
            experience_required: 0,
            description: "Analyse and improve internal systems.".to_string(),
        }
    }

    fn candidate(skills: &[&str], level: QualificationLevel) -> CandidateProfile {
        CandidateProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            qualification_level: level,
            preferred_location: None,
            interests: Vec::new(),
            experience_years: 0,
        }
    }

    #[test]
    fn full_skill_overlap_scores_highest() {
        let engine = MatchEngine::default();
        let profile = candidate(&["SQL", "Networking"], QualificationLevel::Degree);
        let jobs = vec![
            posting("job-a", &["SQL", "Networking"], QualificationLevel::Degree),
            posting("job-b", &["SQL", "Python"], QualificationLevel::Degree),
            posting("job-c", &["Cobol"], QualificationLevel::Degree),
        ];

        let ranked = engine.rank(&profile, &jobs);

        assert_eq!(ranked[0].posting.id, "job-a");
        assert_eq!(ranked[0].match_score, 100);
        assert_eq!(ranked[1].posting.id, "job-b");
        assert_eq!(ranked[2].posting.id, "job-c");
        assert_eq!(ranked[2].match_score, 0);
    }

    #[test]
    fn scores_stay_within_bounds_and_sorted() {
        let engine = MatchEngine::default();
        let profile = CandidateProfile {
            skills: vec!["Accounting".to_string()],
            qualification_level: QualificationLevel::Certificate,
            preferred_location: Some("Maseru".to_string()),
            interests: vec!["Information Technology".to_string()],
            experience_years: 0,
        };
        let jobs = vec![
            posting("job-a", &["Accounting"], QualificationLevel::Phd),
            posting("job-b", &[], QualificationLevel::Certificate),
            posting("job-c", &["Accounting", "Auditing"], QualificationLevel::Certificate),
        ];

        let ranked = engine.rank(&profile, &jobs);

        for entry in &ranked {
            assert!(entry.match_score <= 100);
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn ties_keep_input_order() {
        let engine = MatchEngine::default();
        let profile = candidate(&["SQL"], QualificationLevel::Degree);
        let jobs = vec![
            posting("job-first", &["SQL"], QualificationLevel::Degree),
            posting("job-second", &["SQL"], QualificationLevel::Degree),
        ];

        let ranked = engine.rank(&profile, &jobs);

        assert_eq!(ranked[0].match_score, ranked[1].match_score);
        assert_eq!(ranked[0].posting.id, "job-first");
        assert_eq!(ranked[1].posting.id, "job-second");
    }

    #[test]
    fn empty_requirement_list_counts_as_full_match() {
        let engine = MatchEngine::default();
        let profile = candidate(&[], QualificationLevel::Degree);
        let jobs = vec![posting("job-open", &[], QualificationLevel::Certificate)];

        let ranked = engine.rank(&profile, &jobs);

        assert_eq!(ranked[0].match_score, 100);
    }

    #[test]
    fn education_gap_is_deducted_per_tier() {
        let engine = MatchEngine::default();
        let profile = candidate(&["Nursing"], QualificationLevel::Certificate);
        let degree_job = posting("job-degree", &["Nursing"], QualificationLevel::Degree);
        let diploma_job = posting("job-diploma", &["Nursing"], QualificationLevel::Diploma);

        let ranked = engine.rank(&profile, &[degree_job, diploma_job]);

        assert_eq!(ranked[0].posting.id, "job-diploma");
        assert_eq!(ranked[0].match_score, 80);
        assert_eq!(ranked[1].match_score, 60);
    }

    #[test]
    fn reasons_name_matched_skills_and_gaps() {
        let engine = MatchEngine::default();
        let profile = candidate(&["SQL"], QualificationLevel::Diploma);
        let job = posting("job-a", &["SQL", "Networking"], QualificationLevel::Degree);

        let reasons = engine.match_reasons(&profile, &job);

        assert!(reasons.iter().any(|reason| reason.contains("SQL")));
        assert!(reasons
            .iter()
            .any(|reason| reason.contains("degree") && reason.contains("diploma")));
    }

    #[test]
    fn skill_matching_ignores_case_and_partial_phrasing() {
        let engine = MatchEngine::default();
        let profile = candidate(&["customer service"], QualificationLevel::Degree);
        let job = posting("job-a", &["Customer Service"], QualificationLevel::Degree);

        let ranked = engine.rank(&profile, &[job]);

        assert_eq!(ranked[0].match_score, 100);
        assert_eq!(ranked[0].matched_skills, vec!["Customer Service".to_string()]);
    }
}
