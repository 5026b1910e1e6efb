//! NASA Astronomy Picture of the Day.
//!
//! Polls the APOD API for one entry and keeps three artifacts: the raw JSON,
//! the image it references and a text rendering of title, explanation,
//! credit and date. Non-image entries and placeholder entries are rejected.
//!
//! Secrets: `nasa_api_key`

mod descriptor;
mod parser;
mod tool;

pub use descriptor::apod_descriptor;
pub use parser::ApodEntry;
pub use tool::ApodTool;

/// Default maximum explanation length in characters.
pub const DEFAULT_MAX_EXPLANATION_LENGTH: usize = 600;

/// Default text template. Line breaks are written as `\n`.
pub const DEFAULT_TEXT_TEMPLATE: &str =
    r"{title}\n\n{explanation}\n\n[ {copyright} | apod.nasa.gov | {date} ]";

/// Fields available to the text template.
pub const TEXT_TEMPLATE_FIELDS: &[&str] = &["title", "explanation", "copyright", "date"];

/// Options for the `apod` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApodOptions {
    /// Maximum explanation length in characters.
    pub max_explanation_length: usize,
    /// Template for the text artifact.
    pub text_template: String,
}

impl Default for ApodOptions {
    fn default() -> Self {
        Self {
            max_explanation_length: DEFAULT_MAX_EXPLANATION_LENGTH,
            text_template: DEFAULT_TEXT_TEMPLATE.to_string(),
        }
    }
}
