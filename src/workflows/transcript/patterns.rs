use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::workflows::qualification::QualificationLevel;

use super::grades::grade_points;
use super::SubjectGrade;

static SUBJECT_DELIMITED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*([A-Za-z][A-Za-z .&/'()-]{2,40}?)\s*[:\-]\s*([A-F]\*?)\s*$")
        .expect("pattern compiles")
});

static SUBJECT_TABULAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*([A-Za-z][A-Za-z .&/'()-]{2,40}?)\s{2,}([A-F]\*?)\s*$")
        .expect("pattern compiles")
});

static SUBJECT_LABELLED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([A-Za-z][A-Za-z .&/'-]{2,40}?)\s*[,:]?\s*grade\s*[:=]?\s*([A-F]\*?)")
        .expect("pattern compiles")
});

static GPA_FIGURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:gpa|grade\s+point\s+average)\s*[:=\-]?\s*([0-5](?:\.[0-9]{1,2})?)")
        .expect("pattern compiles")
});

static ENGLISH_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:ielts|toefl|english\s+proficiency|proficient\s+in\s+english)\b")
        .expect("pattern compiles")
});

/// Keyword table scanned in order; the first hit wins, so ambiguous texts
/// resolve to the earliest entry.
const LEVEL_KEYWORDS: &[(&str, QualificationLevel)] = &[
    ("lgcse", QualificationLevel::Certificate),
    ("cosc", QualificationLevel::Diploma),
    ("diploma", QualificationLevel::Diploma),
    ("degree", QualificationLevel::Degree),
    ("bachelor", QualificationLevel::Degree),
    ("university", QualificationLevel::Degree),
];

const NOISE_SUBJECTS: &[&str] = &[
    "gpa",
    "grade",
    "grades",
    "subject",
    "subjects",
    "name",
    "school",
    "candidate",
    "result",
    "results",
    "total",
];

fn tidy(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize(value: &str) -> String {
    tidy(value).to_ascii_lowercase()
}

fn is_noise(subject: &str) -> bool {
    let normalized = normalize(subject);
    normalized.len() < 3
        || NOISE_SUBJECTS
            .iter()
            .any(|noise| normalized == *noise || normalized.starts_with("grade point"))
}

/// Pull subject/grade pairs from free text.
///
/// The pattern families run in sequence over the same text; duplicates are
/// dropped by normalized subject string, first match wins.
pub(crate) fn extract_subjects(text: &str) -> Vec<SubjectGrade> {
    let mut seen = BTreeSet::new();
    let mut subjects = Vec::new();

    for pattern in [&*SUBJECT_DELIMITED, &*SUBJECT_TABULAR, &*SUBJECT_LABELLED] {
        for captures in pattern.captures_iter(text) {
            let subject = tidy(&captures[1]);
            let grade = captures[2].to_ascii_uppercase();

            if is_noise(&subject) {
                continue;
            }
            if !seen.insert(normalize(&subject)) {
                continue;
            }

            subjects.push(SubjectGrade { subject, grade });
        }
    }

    subjects
}

pub(crate) fn extract_gpa(text: &str) -> Option<f32> {
    GPA_FIGURE
        .captures(text)
        .and_then(|captures| captures[1].parse::<f32>().ok())
}

pub(crate) fn detect_level(text: &str) -> Option<QualificationLevel> {
    let lowered = text.to_ascii_lowercase();
    LEVEL_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, level)| *level)
}

/// English proficiency is satisfied by an explicit signal or an English
/// subject graded C or better.
pub(crate) fn detect_english(text: &str, subjects: &[SubjectGrade]) -> bool {
    if ENGLISH_SIGNAL.is_match(text) {
        return true;
    }

    subjects.iter().any(|entry| {
        normalize(&entry.subject).contains("english")
            && grade_points(&entry.grade).is_some_and(|points| points >= 2.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimited_lines_are_extracted() {
        let text = "Mathematics: A\nPhysical Science - B\nSesotho: A*\n";

        let subjects = extract_subjects(text);

        assert_eq!(subjects.len(), 3);
        assert_eq!(subjects[0].subject, "Mathematics");
        assert_eq!(subjects[0].grade, "A");
        assert_eq!(subjects[2].grade, "A*");
    }

    #[test]
    fn tabular_lines_are_extracted() {
        let text = "Mathematics    A\nEnglish Language   C\n";

        let subjects = extract_subjects(text);

        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[1].subject, "English Language");
        assert_eq!(subjects[1].grade, "C");
    }

    #[test]
    fn labelled_grades_are_extracted() {
        let text = "Accounting grade B, Economics grade: C";

        let subjects = extract_subjects(text);

        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].subject, "Accounting");
        assert_eq!(subjects[1].grade, "C");
    }

    #[test]
    fn duplicate_subjects_keep_the_first_grade() {
        let text = "Mathematics: A\nmathematics grade B\n";

        let subjects = extract_subjects(text);

        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].grade, "A");
    }

    #[test]
    fn noise_rows_are_filtered() {
        let text = "Subject: A\nTotal: B\nMathematics: A\n";

        let subjects = extract_subjects(text);

        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].subject, "Mathematics");
    }

    #[test]
    fn gpa_figure_is_recognised() {
        assert_eq!(extract_gpa("GPA: 3.25"), Some(3.25));
        assert_eq!(extract_gpa("Grade Point Average 2.8"), Some(2.8));
        assert_eq!(extract_gpa("no figure here"), None);
    }

    #[test]
    fn level_keywords_resolve_first_match_wins() {
        assert_eq!(
            detect_level("LGCSE results slip"),
            Some(QualificationLevel::Certificate)
        );
        assert_eq!(
            detect_level("COSC certificate"),
            Some(QualificationLevel::Diploma)
        );
        // Ambiguous: lgcse is listed before degree, so it wins.
        assert_eq!(
            detect_level("LGCSE holder now pursuing a degree"),
            Some(QualificationLevel::Certificate)
        );
        assert_eq!(
            detect_level("Bachelor transcript"),
            Some(QualificationLevel::Degree)
        );
        assert_eq!(detect_level("plain results"), None);
    }

    #[test]
    fn english_detected_from_signal_or_graded_subject() {
        assert!(detect_english("IELTS band 7", &[]));
        assert!(detect_english(
            "",
            &[SubjectGrade {
                subject: "English Language".to_string(),
                grade: "B".to_string(),
            }]
        ));
        assert!(!detect_english(
            "",
            &[SubjectGrade {
                subject: "English Language".to_string(),
                grade: "E".to_string(),
            }]
        ));
    }
}
