use crate::workflows::qualification::{CareerRequirement, QualificationLevel};

fn career(
    name: &str,
    required_courses: &[&str],
    minimum_qualification_level: QualificationLevel,
    alternative_paths: &[&str],
) -> CareerRequirement {
    CareerRequirement {
        career: name.to_string(),
        required_courses: required_courses.iter().map(|s| s.to_string()).collect(),
        minimum_qualification_level,
        alternative_paths: alternative_paths.iter().map(|s| s.to_string()).collect(),
    }
}

pub(crate) fn standard_careers() -> Vec<CareerRequirement> {
    use QualificationLevel::{Certificate, Degree, Diploma};

    vec![
        career(
            "Accountant",
            &["Bachelor of Commerce in Accounting"],
            Degree,
            &["Diploma in Accounting"],
        ),
        career(
            "Software Developer",
            &["Bachelor of Science in Computer Science"],
            Degree,
            &["Diploma in Information Technology"],
        ),
        career(
            "Lawyer",
            &["Bachelor of Laws (LLB)"],
            Degree,
            &["Diploma in Business Management"],
        ),
        career(
            "Registered Nurse",
            &["Bachelor of Science in Nursing"],
            Degree,
            &["Diploma in General Nursing"],
        ),
        career(
            "Teacher",
            &["Bachelor of Education"],
            Degree,
            &["Certificate in Early Childhood Development"],
        ),
        career(
            "Civil Engineer",
            &["Bachelor of Engineering in Civil Engineering"],
            Degree,
            &["Diploma in Civil Engineering"],
        ),
        career(
            "Electrician",
            &["Diploma in Electrical Engineering"],
            Diploma,
            &["Certificate in Motor Mechanics"],
        ),
        career(
            "Business Manager",
            &["Diploma in Business Management"],
            Diploma,
            &["Certificate in Office Administration"],
        ),
        career(
            "Office Administrator",
            &["Certificate in Office Administration"],
            Certificate,
            &[],
        ),
    ]
}
