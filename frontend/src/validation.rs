//! Input validation for the submission form.
//!
//! Pure checks, no side effects. The form disables its submit button from
//! [`can_submit`], and the workflow re-checks the same rules before issuing
//! a request.

use thiserror::Error;

use crate::types::FileLike;

/// MIME type of a PDF resume.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// MIME type of a Word (DOCX) resume.
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The only media types accepted for a resume.
pub const ACCEPTED_MEDIA_TYPES: [&str; 2] = [PDF_MEDIA_TYPE, DOCX_MEDIA_TYPE];

/// Why an input was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Declared media type is not PDF or DOCX (or is absent).
    #[error("unsupported file type")]
    UnsupportedFileType,

    /// No resume has been selected.
    #[error("no resume selected")]
    MissingFile,

    /// Job description is empty or whitespace only.
    #[error("job description is empty")]
    EmptyDescription,
}

impl Rejection {
    /// Text shown next to the offending field.
    pub fn hint(&self) -> &'static str {
        match self {
            Rejection::UnsupportedFileType => "Please upload a PDF or DOCX file",
            Rejection::MissingFile => "Please choose a resume to analyze",
            Rejection::EmptyDescription => "Please paste the job description",
        }
    }
}

/// Outcome of a single check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validation {
    Accepted,
    Rejected(Rejection),
}

impl Validation {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Validation::Accepted)
    }

    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Validation::Accepted => Ok(()),
            Validation::Rejected(reason) => Err(reason),
        }
    }
}

/// Accepts a file iff its declared media type is exactly PDF or DOCX.
pub fn validate_file<F: FileLike + ?Sized>(file: &F) -> Validation {
    let media_type = file.media_type();
    if ACCEPTED_MEDIA_TYPES.contains(&media_type.as_str()) {
        Validation::Accepted
    } else {
        Validation::Rejected(Rejection::UnsupportedFileType)
    }
}

/// Accepts a description iff it is non-empty once trimmed.
pub fn validate_description(text: &str) -> Validation {
    if text.trim().is_empty() {
        Validation::Rejected(Rejection::EmptyDescription)
    } else {
        Validation::Accepted
    }
}

/// True iff a file is present and both validators accept.
pub fn can_submit<F: FileLike>(file: Option<&F>, text: &str) -> bool {
    file.is_some_and(|f| validate_file(f).is_accepted()) && validate_description(text).is_accepted()
}

/// State of the resume picker.
///
/// Holds at most one accepted file. A new selection always replaces the
/// previous one, and a rejected selection clears it.
#[derive(Clone, Debug)]
pub struct FileField<F> {
    accepted: Option<F>,
    rejection: Option<Rejection>,
}

impl<F> Default for FileField<F> {
    fn default() -> Self {
        Self {
            accepted: None,
            rejection: None,
        }
    }
}

impl<F: FileLike> FileField<F> {
    /// Applies a new selection from the picker.
    pub fn select(&mut self, file: F) -> Validation {
        let validation = validate_file(&file);
        match validation {
            Validation::Accepted => {
                log::debug!("📄 Resume selected: {}", file.file_name());
                self.accepted = Some(file);
                self.rejection = None;
            }
            Validation::Rejected(reason) => {
                log::warn!("⚠️ Rejected resume {}: {}", file.file_name(), reason);
                self.accepted = None;
                self.rejection = Some(reason);
            }
        }
        validation
    }

    pub fn accepted(&self) -> Option<&F> {
        self.accepted.as_ref()
    }

    /// Rejection of the latest selection, if it was refused.
    pub fn rejection(&self) -> Option<Rejection> {
        self.rejection
    }

    /// Label for the picker: the accepted file's name, if any.
    pub fn label(&self) -> Option<String> {
        self.accepted.as_ref().map(FileLike::file_name)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Stand-in for `web_sys::File`.
    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct FakeFile {
        pub name: String,
        pub media_type: String,
    }

    impl FakeFile {
        pub(crate) fn new(name: &str, media_type: &str) -> Self {
            Self {
                name: name.to_string(),
                media_type: media_type.to_string(),
            }
        }

        pub(crate) fn pdf() -> Self {
            Self::new("resume.pdf", PDF_MEDIA_TYPE)
        }
    }

    impl FileLike for FakeFile {
        fn file_name(&self) -> String {
            self.name.clone()
        }

        fn media_type(&self) -> String {
            self.media_type.clone()
        }
    }

    #[test]
    fn test_accepted_media_types() {
        assert_eq!(validate_file(&FakeFile::pdf()), Validation::Accepted);
        assert_eq!(
            validate_file(&FakeFile::new("resume.docx", DOCX_MEDIA_TYPE)),
            Validation::Accepted
        );
    }

    #[test]
    fn test_rejected_media_types() {
        for media_type in ["", "text/plain", "application/msword", "image/png", "application/PDF", " application/pdf"] {
            let file = FakeFile::new("resume", media_type);
            assert_eq!(
                validate_file(&file),
                Validation::Rejected(Rejection::UnsupportedFileType),
                "media type {:?} should be rejected",
                media_type
            );
        }
        assert_eq!(Rejection::UnsupportedFileType.to_string(), "unsupported file type");
    }

    #[test]
    fn test_description_is_trimmed() {
        assert_eq!(validate_description("Senior Engineer"), Validation::Accepted);
        assert_eq!(validate_description("  Rust developer \n"), Validation::Accepted);
        assert_eq!(validate_description(""), Validation::Rejected(Rejection::EmptyDescription));
        assert_eq!(validate_description("   "), Validation::Rejected(Rejection::EmptyDescription));
        assert_eq!(validate_description("\n\t"), Validation::Rejected(Rejection::EmptyDescription));
    }

    #[test]
    fn test_can_submit() {
        let pdf = FakeFile::pdf();
        let txt = FakeFile::new("resume.txt", "text/plain");

        assert!(can_submit(Some(&pdf), "Senior Engineer"));
        assert!(!can_submit(Some(&pdf), "   "));
        assert!(!can_submit(Some(&txt), "Senior Engineer"));
        assert!(!can_submit(None::<&FakeFile>, "Senior Engineer"));
    }

    #[test]
    fn test_second_file_replaces_first() {
        let mut field = FileField::default();
        field.select(FakeFile::pdf());
        field.select(FakeFile::new("cv.docx", DOCX_MEDIA_TYPE));

        assert_eq!(field.label().as_deref(), Some("cv.docx"));
        assert_eq!(field.rejection(), None);
    }

    #[test]
    fn test_invalid_file_clears_accepted() {
        let mut field = FileField::default();
        field.select(FakeFile::pdf());

        let validation = field.select(FakeFile::new("photo.png", "image/png"));
        assert_eq!(validation, Validation::Rejected(Rejection::UnsupportedFileType));
        assert!(field.accepted().is_none());
        assert_eq!(field.rejection(), Some(Rejection::UnsupportedFileType));

        // Corrected by a valid selection
        field.select(FakeFile::pdf());
        assert!(field.accepted().is_some());
        assert_eq!(field.rejection(), None);
    }
}
