use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::board::{JobBoard, JobDraft};
use super::QualificationLevel;

#[derive(Debug, thiserror::Error)]
pub enum JobImportError {
    #[error("failed to read job export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid job CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Counts reported after a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Loads company job exports onto the board.
///
/// Rows missing a title or company, or carrying an unrecognized education
/// label, are skipped and counted rather than aborting the import.
pub struct JobBoardCsvImporter;

impl JobBoardCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        board: &JobBoard,
    ) -> Result<JobImportSummary, JobImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, board)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        board: &JobBoard,
    ) -> Result<JobImportSummary, JobImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut imported = 0;
        let mut skipped = 0;

        for record in csv_reader.deserialize::<JobRow>() {
            let row = record?;
            match row.into_draft() {
                Some(draft) => {
                    board.add(draft);
                    imported += 1;
                }
                None => skipped += 1,
            }
        }

        Ok(JobImportSummary { imported, skipped })
    }
}

#[derive(Debug, Deserialize)]
struct JobRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Location", default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(rename = "Salary", default, deserialize_with = "empty_string_as_none")]
    salary: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "empty_string_as_none")]
    employment_type: Option<String>,
    #[serde(rename = "Category", default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(rename = "Required Skills", default)]
    required_skills: String,
    #[serde(rename = "Education", default, deserialize_with = "empty_string_as_none")]
    education: Option<String>,
    #[serde(rename = "Experience", default, deserialize_with = "empty_string_as_none")]
    experience: Option<String>,
    #[serde(rename = "Description", default)]
    description: String,
}

impl JobRow {
    fn into_draft(self) -> Option<JobDraft> {
        if self.title.is_empty() || self.company.is_empty() {
            return None;
        }

        let education_required = match self.education {
            Some(label) => QualificationLevel::from_label(&label)?,
            None => QualificationLevel::Certificate,
        };

        let experience_required = match self.experience {
            Some(years) => years.parse::<u8>().ok()?,
            None => 0,
        };

        let required_skills = self
            .required_skills
            .split(';')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();

        Some(JobDraft {
            title: self.title,
            company: self.company,
            location: self.location.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
            employment_type: self.employment_type.unwrap_or_else(|| "full-time".to_string()),
            category: self.category.unwrap_or_default(),
            required_skills,
            education_required,
            experience_required,
            description: self.description,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXPORT: &str = "\
Title,Company,Location,Salary,Type,Category,Required Skills,Education,Experience,Description
Accounts Officer,Standard Lesotho Bank,Maseru,M12000,full-time,Finance,Accounting;Excel,degree,2,Manage client ledgers
,Standard Lesotho Bank,Maseru,,full-time,Finance,Accounting,degree,2,Missing title row
Field Technician,Econet Telecom,Leribe,,,Telecommunications,Networking,unknown-tier,1,Bad education label
Support Clerk,LNDC,Maseru,,,Administration,,,,No skills listed
";

    #[test]
    fn import_loads_valid_rows_and_counts_skips() {
        let board = JobBoard::empty();
        let summary = JobBoardCsvImporter::from_reader(Cursor::new(EXPORT), &board)
            .expect("import succeeds");

        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 2);

        let postings = board.all();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title, "Accounts Officer");
        assert_eq!(
            postings[0].required_skills,
            vec!["Accounting".to_string(), "Excel".to_string()]
        );
        assert_eq!(postings[0].education_required, QualificationLevel::Degree);
        assert_eq!(postings[0].experience_required, 2);
        assert_eq!(postings[1].employment_type, "full-time");
        assert!(postings[1].required_skills.is_empty());
    }

    #[test]
    fn import_propagates_malformed_csv() {
        let board = JobBoard::empty();
        let result = JobBoardCsvImporter::from_reader(
            Cursor::new("Title,Company\n\"unterminated"),
            &board,
        );

        assert!(matches!(result, Err(JobImportError::Csv(_))));
    }
}
