use super::weights::MatchWeights;
use super::{CandidateProfile, JobPosting};

pub(crate) fn normalize_term(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

fn terms_match(left: &str, right: &str) -> bool {
    let left = normalize_term(left);
    let right = normalize_term(right);
    if left.is_empty() || right.is_empty() {
        return false;
    }
    left.contains(&right) || right.contains(&left)
}

pub(crate) struct MatchSignals {
    pub matched_skills: Vec<String>,
    pub required_total: usize,
    pub education_gap: u8,
    pub experience_gap: u8,
    pub location_match: bool,
    pub interest_match: bool,
}

/// Score one posting against a candidate.
///
/// Base score is the matched share of required skills scaled to 100; an empty
/// requirement list counts as fully matched. Deductions and bonuses are
/// applied afterwards and the result clamped to [0, 100].
pub(crate) fn score_job(
    profile: &CandidateProfile,
    job: &JobPosting,
    weights: &MatchWeights,
) -> (f32, MatchSignals) {
    let matched_skills: Vec<String> = job
        .required_skills
        .iter()
        .filter(|required| {
            profile
                .skills
                .iter()
                .any(|held| terms_match(held, required))
        })
        .cloned()
        .collect();

    let required_total = job.required_skills.len();
    let base = if required_total == 0 {
        100.0
    } else {
        100.0 * matched_skills.len() as f32 / required_total as f32
    };

    let education_gap = job
        .education_required
        .ordinal()
        .saturating_sub(profile.qualification_level.ordinal());

    let experience_gap = job
        .experience_required
        .saturating_sub(profile.experience_years);
    let experience_penalty = (f32::from(experience_gap) * weights.experience_gap_penalty)
        .min(weights.experience_penalty_cap);

    let location_match = profile
        .preferred_location
        .as_deref()
        .map(|preferred| terms_match(preferred, &job.location))
        .unwrap_or(false);

    let interest_match = profile
        .interests
        .iter()
        .any(|interest| terms_match(interest, &job.category) || terms_match(interest, &job.title));

    let mut score = base;
    score -= f32::from(education_gap) * weights.education_gap_penalty;
    score -= experience_penalty;
    if location_match {
        score += weights.location_bonus;
    }
    if interest_match {
        score += weights.interest_bonus;
    }

    let signals = MatchSignals {
        matched_skills,
        required_total,
        education_gap,
        experience_gap,
        location_match,
        interest_match,
    };

    (score.clamp(0.0, 100.0), signals)
}
