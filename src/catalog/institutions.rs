use serde::{Deserialize, Serialize};

/// Broad classification used when rendering institution listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionKind {
    University,
    Polytechnic,
    College,
}

/// A registered tertiary institution and the courses it offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    pub short_name: String,
    pub location: String,
    pub kind: InstitutionKind,
    pub courses: Vec<String>,
}

fn institution(
    name: &str,
    short_name: &str,
    location: &str,
    kind: InstitutionKind,
    courses: &[&str],
) -> Institution {
    Institution {
        name: name.to_string(),
        short_name: short_name.to_string(),
        location: location.to_string(),
        kind,
        courses: courses.iter().map(|s| s.to_string()).collect(),
    }
}

pub(crate) fn standard_institutions() -> Vec<Institution> {
    vec![
        institution(
            "National University of Lesotho",
            "NUL",
            "Roma",
            InstitutionKind::University,
            &[
                "Bachelor of Commerce in Accounting",
                "Bachelor of Laws (LLB)",
                "Bachelor of Science in Computer Science",
                "Bachelor of Education",
                "Bachelor of Science in Nursing",
            ],
        ),
        institution(
            "Limkokwing University of Creative Technology",
            "Limkokwing",
            "Maseru",
            InstitutionKind::University,
            &[
                "Diploma in Information Technology",
                "Diploma in Business Management",
            ],
        ),
        institution(
            "Lerotholi Polytechnic",
            "Fokothi",
            "Maseru",
            InstitutionKind::Polytechnic,
            &[
                "Diploma in Electrical Engineering",
                "Diploma in Civil Engineering",
                "Certificate in Motor Mechanics",
            ],
        ),
        institution(
            "Centre for Accounting Studies",
            "CAS",
            "Maseru",
            InstitutionKind::College,
            &["Diploma in Accounting"],
        ),
        institution(
            "National Health Training College",
            "NHTC",
            "Maseru",
            InstitutionKind::College,
            &["Diploma in General Nursing"],
        ),
        institution(
            "Botho University",
            "Botho",
            "Maseru",
            InstitutionKind::University,
            &[
                "Master of Business Administration",
                "Bachelor of Commerce in Accounting",
                "Certificate in Office Administration",
                "Certificate in Early Childhood Development",
            ],
        ),
    ]
}
