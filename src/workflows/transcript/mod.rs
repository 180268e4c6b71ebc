//! Best-effort transcript extraction: MIME dispatch to a text pass, then
//! regex families over the extracted text. No-match cases return partial data
//! with warnings; only malformed external input raises an error.

pub mod grades;
mod patterns;
mod text;

use serde::{Deserialize, Serialize};

use crate::workflows::qualification::{ProfileDraft, QualificationLevel};

/// One extracted subject/grade pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectGrade {
    pub subject: String,
    pub grade: String,
}

/// Structured best-effort extraction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptExtraction {
    pub subjects: Vec<SubjectGrade>,
    pub gpa: Option<f32>,
    pub qualification_level: Option<QualificationLevel>,
    pub english_proficiency: bool,
    pub warnings: Vec<String>,
}

impl TranscriptExtraction {
    /// Carry the extraction into the qualification flow as loose input.
    pub fn to_profile_draft(&self, field: Option<String>) -> ProfileDraft {
        ProfileDraft {
            gpa: self.gpa,
            qualification_level: self
                .qualification_level
                .map(|level| level.label().to_string()),
            field,
            subjects: self
                .subjects
                .iter()
                .map(|entry| entry.subject.clone())
                .collect(),
            english_proficiency: self.english_proficiency,
        }
    }
}

/// Failures caused by malformed or unsupported external input.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("empty document payload")]
    EmptyPayload,
    #[error("unrecognised content type: {0}")]
    UnknownFormat(String),
    #[error("{0} transcripts are not supported; convert to PDF or plain text")]
    UnsupportedFormat(&'static str),
    #[error("document text is not valid UTF-8")]
    InvalidEncoding,
    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),
}

/// Regex-chain extractor over uploaded transcript bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptExtractor;

impl TranscriptExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<TranscriptExtraction, ExtractError> {
        if bytes.is_empty() {
            return Err(ExtractError::EmptyPayload);
        }

        let format = text::SourceFormat::from_content_type(content_type)?;
        let document = text::extract_text(bytes, format)?;

        Ok(self.parse_text(&document))
    }

    /// Run the pattern families over already-extracted text.
    pub fn parse_text(&self, document: &str) -> TranscriptExtraction {
        let subjects = patterns::extract_subjects(document);
        let gpa = patterns::extract_gpa(document)
            .or_else(|| grades::calculate_gpa(&subjects));
        let qualification_level = patterns::detect_level(document);
        let english_proficiency = patterns::detect_english(document, &subjects);

        let mut warnings = Vec::new();
        if subjects.is_empty() {
            warnings.push("no subject/grade pairs recognised".to_string());
        }
        if gpa.is_none() {
            warnings.push("no GPA figure found or derivable".to_string());
        }
        if qualification_level.is_none() {
            warnings.push("qualification level could not be inferred".to_string());
        }

        TranscriptExtraction {
            subjects,
            gpa,
            qualification_level,
            english_proficiency,
            warnings,
        }
    }
}
