use super::SubjectGrade;

/// Fixed grade-point scale (A* = 5 down to F = 0).
pub fn grade_points(grade: &str) -> Option<f32> {
    match grade.trim().to_ascii_uppercase().as_str() {
        "A*" => Some(5.0),
        "A" => Some(4.0),
        "B" => Some(3.0),
        "C" => Some(2.0),
        "D" => Some(1.0),
        "E" => Some(0.5),
        "F" => Some(0.0),
        _ => None,
    }
}

/// Average the mapped grade points across extracted subjects.
///
/// Unmappable grades are ignored; returns `None` when nothing maps, rounded
/// to two decimals otherwise.
pub fn calculate_gpa(subjects: &[SubjectGrade]) -> Option<f32> {
    let points: Vec<f32> = subjects
        .iter()
        .filter_map(|entry| grade_points(&entry.grade))
        .collect();

    if points.is_empty() {
        return None;
    }

    let average = points.iter().sum::<f32>() / points.len() as f32;
    Some((average * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(subject: &str, grade: &str) -> SubjectGrade {
        SubjectGrade {
            subject: subject.to_string(),
            grade: grade.to_string(),
        }
    }

    #[test]
    fn scale_is_anchored_at_both_ends() {
        assert_eq!(grade_points("A*"), Some(5.0));
        assert_eq!(grade_points("f"), Some(0.0));
        assert_eq!(grade_points("G"), None);
    }

    #[test]
    fn gpa_averages_mapped_grades_only() {
        let subjects = vec![
            entry("Mathematics", "A"),
            entry("English", "B"),
            entry("Sesotho", "ungraded"),
        ];

        assert_eq!(calculate_gpa(&subjects), Some(3.5));
    }

    #[test]
    fn gpa_is_none_without_mappable_grades() {
        assert_eq!(calculate_gpa(&[]), None);
        assert_eq!(calculate_gpa(&[entry("Mathematics", "pass")]), None);
    }

    #[test]
    fn gpa_rounds_to_two_decimals() {
        let subjects = vec![
            entry("Mathematics", "A"),
            entry("English", "B"),
            entry("Science", "B"),
        ];

        assert_eq!(calculate_gpa(&subjects), Some(3.33));
    }
}
