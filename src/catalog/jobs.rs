use crate::workflows::matching::JobPosting;
use crate::workflows::qualification::QualificationLevel;

#[allow(clippy::too_many_arguments)]
fn posting(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    category: &str,
    required_skills: &[&str],
    education_required: QualificationLevel,
    experience_required: u8,
    description: &str,
) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        employment_type: "full-time".to_string(),
        category: category.to_string(),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        education_required,
        experience_required,
        description: description.to_string(),
    }
}

pub(crate) fn seed_jobs() -> Vec<JobPosting> {
    use QualificationLevel::{Certificate, Degree, Diploma};

    vec![
        posting(
            "job-seed-0001",
            "Accounts Officer",
            "Standard Lesotho Bank",
            "Maseru",
            "M12,000 - M16,000 per month",
            "Finance",
            &["Accounting", "Financial Reporting", "Excel"],
            Degree,
            2,
            "Maintain client ledgers and prepare monthly reconciliations.",
        ),
        posting(
            "job-seed-0002",
            "Software Developer",
            "Vodacom Lesotho",
            "Maseru",
            "M18,000 - M25,000 per month",
            "Information Technology",
            &["Java", "SQL", "Problem Solving"],
            Degree,
            2,
            "Build and maintain customer-facing billing services.",
        ),
        posting(
            "job-seed-0003",
            "Network Support Technician",
            "Econet Telecom Lesotho",
            "Maseru",
            "M8,000 - M11,000 per month",
            "Information Technology",
            &["Networking", "Customer Service"],
            Diploma,
            1,
            "First-line support for enterprise connectivity customers.",
        ),
        posting(
            "job-seed-0004",
            "Staff Nurse",
            "Queen Mamohato Memorial Hospital",
            "Maseru",
            "M14,000 - M18,000 per month",
            "Healthcare",
            &["Patient Care", "Nursing"],
            Degree,
            1,
            "Ward duty across the medical and surgical units.",
        ),
        posting(
            "job-seed-0005",
            "Electrician",
            "Letseng Diamonds",
            "Mokhotlong",
            "M10,000 - M15,000 per month",
            "Engineering",
            &["Electrical Wiring", "Safety Compliance"],
            Diploma,
            2,
            "Maintain plant electrical installations on a roster basis.",
        ),
        posting(
            "job-seed-0006",
            "Tax Auditor",
            "Revenue Services Lesotho",
            "Maseru",
            "M16,000 - M20,000 per month",
            "Finance",
            &["Auditing", "Accounting", "Tax Law"],
            Degree,
            3,
            "Conduct field audits of registered enterprises.",
        ),
        posting(
            "job-seed-0007",
            "Primary School Teacher",
            "Ministry of Education and Training",
            "Mafeteng",
            "M9,000 - M12,000 per month",
            "Education",
            &["Lesson Planning", "Classroom Management"],
            Degree,
            0,
            "Teach upper primary classes in the Mafeteng district.",
        ),
        posting(
            "job-seed-0008",
            "Office Administrator",
            "Lesotho National Development Corporation",
            "Maseru",
            "M7,500 - M9,500 per month",
            "Administration",
            &["Office Management", "Filing", "Customer Service"],
            Certificate,
            1,
            "Front-office administration and records management.",
        ),
    ]
}
