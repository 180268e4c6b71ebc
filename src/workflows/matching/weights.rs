use serde::{Deserialize, Serialize};

/// Scoring dials for the job matcher.
///
/// The skill-overlap base score carries most of the weight; bonuses and
/// deductions adjust it before the final clamp to the 0-100 range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    /// Deduction per qualification tier the candidate falls short of the role.
    pub education_gap_penalty: f32,
    /// Deduction per missing year of required experience.
    pub experience_gap_penalty: f32,
    /// Ceiling on the total experience deduction.
    pub experience_penalty_cap: f32,
    /// Bonus when the role sits in the candidate's preferred location.
    pub location_bonus: f32,
    /// Bonus when the role category or title aligns with a stated interest.
    pub interest_bonus: f32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            education_gap_penalty: 20.0,
            experience_gap_penalty: 5.0,
            experience_penalty_cap: 15.0,
            location_bonus: 8.0,
            interest_bonus: 7.0,
        }
    }
}
