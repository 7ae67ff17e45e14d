//! Document preview classification and the reading clock.

use std::path::Path;

pub const UNSUPPORTED_MESSAGE: &str = "Sorry, preview not available for this file type.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
    Markdown,
    Unsupported,
}

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Self {
        match mime.split(';').next().unwrap_or("").trim() {
            "application/pdf" => DocumentKind::Pdf,
            "text/plain" => DocumentKind::PlainText,
            "text/markdown" | "text/x-markdown" => DocumentKind::Markdown,
            _ => DocumentKind::Unsupported,
        }
    }

    /// Guess from the file extension
    pub fn from_path(path: &Path) -> Self {
        Self::from_mime(mime_guess::from_path(path).first_raw().unwrap_or(""))
    }

    /// Browsers often leave the MIME type empty for local files; fall back to
    /// the file name then.
    pub fn detect(mime: &str, file_name: &str) -> Self {
        match Self::from_mime(mime) {
            DocumentKind::Unsupported => Self::from_path(Path::new(file_name)),
            kind => kind,
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, DocumentKind::PlainText | DocumentKind::Markdown)
    }
}

/// Seconds spent on the open document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadingClock {
    seconds: u64,
}

impl ReadingClock {
    /// A new document was opened
    pub fn restart(&mut self) {
        self.seconds = 0;
    }

    pub fn tick(&mut self) {
        self.seconds += 1;
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn label(&self) -> String {
        format!("Time spent on document: {} seconds", self.seconds)
    }
}
