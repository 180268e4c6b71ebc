use mime::Mime;

use super::ExtractError;

/// Document formats the extractor recognises from MIME types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SourceFormat {
    Pdf,
    PlainText,
    Docx,
    Xlsx,
}

impl SourceFormat {
    pub(crate) fn from_content_type(raw: &str) -> Result<Self, ExtractError> {
        let parsed: Mime = raw
            .trim()
            .parse()
            .map_err(|_| ExtractError::UnknownFormat(raw.to_string()))?;

        match (parsed.type_().as_str(), parsed.subtype().as_str()) {
            ("application", "pdf") => Ok(Self::Pdf),
            ("text", _) => Ok(Self::PlainText),
            ("application", "msword")
            | (
                "application",
                "vnd.openxmlformats-officedocument.wordprocessingml.document",
            ) => Ok(Self::Docx),
            ("application", "vnd.ms-excel")
            | ("application", "vnd.openxmlformats-officedocument.spreadsheetml.sheet") => {
                Ok(Self::Xlsx)
            }
            ("application", "octet-stream") => Ok(Self::PlainText),
            _ => Err(ExtractError::UnknownFormat(raw.to_string())),
        }
    }

    pub(crate) const fn label(self) -> &'static str {
        match self {
            SourceFormat::Pdf => "PDF",
            SourceFormat::PlainText => "plain text",
            SourceFormat::Docx => "DOCX",
            SourceFormat::Xlsx => "XLSX",
        }
    }
}

/// Extract readable text for the pattern pass.
pub(crate) fn extract_text(bytes: &[u8], format: SourceFormat) -> Result<String, ExtractError> {
    match format {
        SourceFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|err| ExtractError::Pdf(err.to_string())),
        SourceFormat::PlainText => String::from_utf8(bytes.to_vec())
            .map_err(|_| ExtractError::InvalidEncoding),
        SourceFormat::Docx | SourceFormat::Xlsx => {
            Err(ExtractError::UnsupportedFormat(format.label()))
        }
    }
}
