use crate::workflows::qualification::{CourseRequirement, QualificationLevel};

fn course(
    course_name: &str,
    level: QualificationLevel,
    minimum_gpa: f32,
    required_subjects: &[&str],
    english_proficiency: bool,
    additional_requirements: &[&str],
) -> CourseRequirement {
    CourseRequirement {
        course_name: course_name.to_string(),
        level,
        minimum_gpa,
        required_subjects: required_subjects.iter().map(|s| s.to_string()).collect(),
        english_proficiency,
        additional_requirements: additional_requirements
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

pub(crate) fn standard_courses() -> Vec<CourseRequirement> {
    use QualificationLevel::{Certificate, Degree, Diploma, Masters};

    vec![
        course(
            "Bachelor of Commerce in Accounting",
            Degree,
            2.5,
            &["Mathematics", "English"],
            true,
            &[],
        ),
        course(
            "Bachelor of Laws (LLB)",
            Degree,
            2.8,
            &["English"],
            true,
            &["Interview"],
        ),
        course(
            "Bachelor of Science in Computer Science",
            Degree,
            2.6,
            &["Mathematics", "Physical Science"],
            true,
            &[],
        ),
        course(
            "Bachelor of Education",
            Degree,
            2.4,
            &["English"],
            true,
            &["Teaching aptitude assessment"],
        ),
        course(
            "Bachelor of Science in Nursing",
            Degree,
            2.8,
            &["Biology", "English"],
            true,
            &["Health screening"],
        ),
        course(
            "Bachelor of Engineering in Civil Engineering",
            Degree,
            3.0,
            &["Mathematics", "Physical Science"],
            true,
            &[],
        ),
        course(
            "Master of Business Administration",
            Masters,
            3.0,
            &[],
            true,
            &["Relevant work experience", "Interview"],
        ),
        course(
            "Diploma in Information Technology",
            Diploma,
            2.2,
            &["Mathematics"],
            false,
            &[],
        ),
        course(
            "Diploma in Business Management",
            Diploma,
            2.0,
            &["English"],
            false,
            &[],
        ),
        course(
            "Diploma in Electrical Engineering",
            Diploma,
            2.2,
            &["Mathematics", "Physical Science"],
            false,
            &[],
        ),
        course(
            "Diploma in Civil Engineering",
            Diploma,
            2.2,
            &["Mathematics"],
            false,
            &[],
        ),
        course(
            "Diploma in Accounting",
            Diploma,
            2.0,
            &["Mathematics"],
            false,
            &[],
        ),
        course(
            "Diploma in General Nursing",
            Diploma,
            2.4,
            &["Biology"],
            false,
            &["Health screening"],
        ),
        course(
            "Certificate in Office Administration",
            Certificate,
            1.8,
            &[],
            false,
            &[],
        ),
        course(
            "Certificate in Motor Mechanics",
            Certificate,
            1.6,
            &[],
            false,
            &[],
        ),
        course(
            "Certificate in Early Childhood Development",
            Certificate,
            1.8,
            &[],
            false,
            &[],
        ),
    ]
}

/// Fallback requirement record for a tier with no specific catalog entry.
pub(crate) fn default_requirement(level: QualificationLevel) -> CourseRequirement {
    let name = format!("{}-level programme defaults", level.label());
    match level {
        QualificationLevel::Certificate => course(&name, level, 1.8, &[], false, &[]),
        QualificationLevel::Diploma => course(&name, level, 2.2, &["English"], false, &[]),
        QualificationLevel::Degree => course(&name, level, 2.5, &["English"], true, &[]),
        QualificationLevel::Masters => course(&name, level, 3.0, &[], true, &[]),
        QualificationLevel::Phd => course(&name, level, 3.2, &[], true, &[]),
    }
}
