//! Text helpers for derived artifacts.
//!
//! Templates are supplied on the command line, so a line break is written
//! as the two characters `\n` and converted before rendering. Placeholders
//! use `{name}` or `{name:>width}` (also `<` and `^`). Names that are not
//! among the supplied fields are left untouched.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Marker appended to shortened text.
pub const SHORTEN_PLACEHOLDER: &str = " [...]";

/// Field values substituted into a [`Template`].
pub type TemplateFields = BTreeMap<&'static str, String>;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{([a-z_]+)(?::([<>^]?)(\d+))?\}").expect("placeholder pattern is valid")
    })
}

// ============================================================================
// Whitespace & Shortening
// ============================================================================

/// Collapses every run of whitespace, newlines included, to a single space
/// and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shortens `text` to at most `width` characters without splitting words.
///
/// The text is whitespace-normalized first. If it still does not fit, whole
/// words are dropped from the end and [`SHORTEN_PLACEHOLDER`] is appended.
/// When not even one word fits, only the trimmed marker is returned, or an
/// empty string if the marker itself is too long.
pub fn shorten(text: &str, width: usize) -> String {
    let text = normalize_whitespace(text);
    if text.chars().count() <= width {
        return text;
    }

    let marker_len = SHORTEN_PLACEHOLDER.chars().count();
    let mut out = String::new();
    let mut out_len = 0;

    for word in text.split(' ') {
        let word_len = word.chars().count();
        let sep = usize::from(!out.is_empty());
        if out_len + sep + word_len + marker_len > width {
            break;
        }
        if sep == 1 {
            out.push(' ');
        }
        out.push_str(word);
        out_len += sep + word_len;
    }

    if out.is_empty() {
        let marker = SHORTEN_PLACEHOLDER.trim_start();
        return if marker.chars().count() <= width {
            marker.to_string()
        } else {
            String::new()
        };
    }

    out.push_str(SHORTEN_PLACEHOLDER);
    out
}

// ============================================================================
// Template
// ============================================================================

/// A text template with named placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Creates a template, turning literal `\n` sequences into line breaks.
    pub fn new(raw: &str) -> Self {
        Self {
            source: raw.replace("\\n", "\n"),
        }
    }

    /// Returns the template text after escape conversion.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders the template with the given fields.
    pub fn render(&self, fields: &TemplateFields) -> String {
        placeholder_regex()
            .replace_all(&self.source, |caps: &Captures<'_>| {
                let name = &caps[1];
                let Some(value) = fields.get(name) else {
                    return caps[0].to_string();
                };

                let width = caps
                    .get(3)
                    .and_then(|m| m.as_str().parse::<usize>().ok())
                    .unwrap_or(0);
                let align = caps.get(2).map_or("", |m| m.as_str());

                pad(value, align, width)
            })
            .into_owned()
    }
}

fn pad(value: &str, align: &str, width: usize) -> String {
    match align {
        ">" => format!("{value:>width$}"),
        "^" => format!("{value:^width$}"),
        _ => format!("{value:<width$}"),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&'static str, &str)]) -> TemplateFields {
        pairs.iter().map(|(k, v)| (*k, (*v).to_string())).collect()
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a\n\n b\t c  "), "a b c");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_shorten_fits() {
        assert_eq!(shorten("hello   world", 20), "hello world");
        assert_eq!(shorten("hello world", 11), "hello world");
    }

    #[test]
    fn test_shorten_on_word_boundary() {
        let out = shorten("The quick brown fox jumps over the lazy dog", 25);
        assert_eq!(out, "The quick brown fox [...]");
        assert!(out.chars().count() <= 25);
    }

    #[test]
    fn test_shorten_never_splits_a_word() {
        let out = shorten("supercalifragilistic expialidocious", 12);
        assert_eq!(out, "[...]");
        assert_eq!(shorten("supercalifragilistic", 3), "");
    }

    #[test]
    fn test_template_escaped_newlines() {
        let tpl = Template::new("{title}\\n\\n{date}");
        let out = tpl.render(&fields(&[("title", "Moon"), ("date", "2024-01-01")]));
        assert_eq!(out, "Moon\n\n2024-01-01");
    }

    #[test]
    fn test_template_alignment() {
        let tpl = Template::new("[{status:>6}] [{id:<4}] [{x:^5}]");
        let out = tpl.render(&fields(&[("status", "open"), ("id", "E1"), ("x", "a")]));
        assert_eq!(out, "[  open] [E1  ] [  a  ]");
    }

    #[test]
    fn test_template_unknown_placeholder_left_verbatim() {
        let tpl = Template::new("{title} {nope}");
        assert_eq!(tpl.render(&fields(&[("title", "Sun")])), "Sun {nope}");
    }
}
