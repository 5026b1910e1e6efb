//! APOD response parsing.

use serde::Deserialize;
use serde_json::Value;
use space2obs_core::{TemplateFields, normalize_whitespace, shorten};
use space2obs_fetch::FetchError;

/// Media type of entries worth keeping.
const IMAGE_MEDIA_TYPE: &str = "image";

/// Explanation text the API serves before the next picture is ready.
const PLACEHOLDER_MARKER: &str = "tomorrow's picture:";

/// One APOD entry. Every field is optional in practice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApodEntry {
    /// Publication date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    /// Picture title.
    #[serde(default)]
    pub title: Option<String>,
    /// Image credit.
    #[serde(default)]
    pub copyright: Option<String>,
    /// Long description.
    #[serde(default)]
    pub explanation: Option<String>,
    /// `image` or `video`.
    #[serde(default)]
    pub media_type: Option<String>,
    /// Media URL.
    #[serde(default)]
    pub url: Option<String>,
}

impl ApodEntry {
    /// Parses the first entry of an APOD response.
    ///
    /// The API answers `count=1` queries with a one-element array. A bare
    /// object is accepted as well; anything else yields an empty entry,
    /// which the media type check then rejects.
    pub fn from_payload(bytes: &[u8]) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_slice(bytes)?;
        let entry = match value {
            Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
            obj @ Value::Object(_) => obj,
            _ => return Ok(Self::default()),
        };
        Ok(serde_json::from_value(entry)?)
    }

    /// Returns the reason this entry must be skipped, if any.
    pub fn rejection(&self) -> Option<String> {
        let media_type = self.media_type.as_deref().unwrap_or("none");
        if media_type != IMAGE_MEDIA_TYPE {
            return Some(format!("skipping media type '{media_type}'"));
        }

        let explanation = self.explanation.as_deref().unwrap_or_default();
        if explanation.to_lowercase().contains(PLACEHOLDER_MARKER) {
            let head: String = explanation.chars().take(30).collect();
            return Some(format!("skipping bad data '{head}...'"));
        }

        if self.url.as_deref().is_none_or(str::is_empty) {
            return Some("entry has no image url".to_string());
        }

        None
    }

    /// Builds the template fields, shortening the explanation.
    pub fn template_fields(&self, max_explanation_length: usize) -> TemplateFields {
        let or_unknown = |v: &Option<String>| {
            v.as_deref()
                .map_or_else(|| "?".to_string(), normalize_whitespace)
        };

        let mut fields = TemplateFields::new();
        fields.insert("date", or_unknown(&self.date));
        fields.insert("title", or_unknown(&self.title));
        fields.insert("copyright", or_unknown(&self.copyright));
        fields.insert(
            "explanation",
            shorten(
                self.explanation.as_deref().unwrap_or_default(),
                max_explanation_length,
            ),
        );
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[{
        "date": "2024-03-01",
        "title": "  The   Horsehead\nNebula ",
        "explanation": "A dark cloud of dust.",
        "media_type": "image",
        "url": "https://apod.nasa.gov/apod/image/horsehead.jpg"
    }]"#;

    #[test]
    fn test_parse_first_entry() {
        let entry = ApodEntry::from_payload(SAMPLE.as_bytes()).unwrap();
        assert_eq!(entry.date.as_deref(), Some("2024-03-01"));
        assert!(entry.copyright.is_none());
        assert!(entry.rejection().is_none());
    }

    #[test]
    fn test_parse_non_list_payload() {
        let entry = ApodEntry::from_payload(b"[]").unwrap();
        assert!(entry.media_type.is_none());
        assert_eq!(entry.rejection().unwrap(), "skipping media type 'none'");

        let entry = ApodEntry::from_payload(b"42").unwrap();
        assert!(entry.rejection().is_some());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            ApodEntry::from_payload(b"<html>"),
            Err(FetchError::Json(_))
        ));
    }

    #[test]
    fn test_rejects_video() {
        let entry = ApodEntry {
            media_type: Some("video".into()),
            ..ApodEntry::default()
        };
        assert_eq!(entry.rejection().unwrap(), "skipping media type 'video'");
    }

    #[test]
    fn test_rejects_placeholder_explanation() {
        let entry = ApodEntry {
            media_type: Some("image".into()),
            url: Some("https://example.org/a.jpg".into()),
            explanation: Some("Tomorrow's Picture: a surprise".into()),
            ..ApodEntry::default()
        };
        assert!(entry.rejection().unwrap().starts_with("skipping bad data"));
    }

    #[test]
    fn test_template_fields() {
        let entry = ApodEntry::from_payload(SAMPLE.as_bytes()).unwrap();
        let fields = entry.template_fields(600);
        assert_eq!(fields["title"], "The Horsehead Nebula");
        assert_eq!(fields["copyright"], "?");
        assert_eq!(fields["explanation"], "A dark cloud of dust.");
    }
}
