//! EONET response parsing.

use serde::Deserialize;
use space2obs_core::{Template, TemplateFields, normalize_whitespace};

/// Top-level events document.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsDocument {
    /// Events, newest first.
    pub events: Vec<EonetEvent>,
}

/// A natural event.
#[derive(Debug, Clone, Deserialize)]
pub struct EonetEvent {
    /// Event id, e.g. `EONET_6543`.
    pub id: String,
    /// Event title.
    pub title: String,
    /// Closing timestamp; `null` while the event is open.
    #[serde(default)]
    pub closed: Option<String>,
    /// Event categories.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Observations, oldest first.
    #[serde(default)]
    pub geometry: Vec<Geometry>,
}

/// Event category.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    /// Category title, e.g. `Wildfires`.
    pub title: String,
}

/// One observation of an event.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// Observation timestamp.
    #[serde(default)]
    pub date: Option<String>,
}

impl EonetEvent {
    /// Returns true if the event has ended.
    pub fn is_closed(&self) -> bool {
        self.closed.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Returns the closing date, or the first observation date while open.
    pub fn date(&self) -> &str {
        let timestamp = if self.is_closed() {
            self.closed.as_deref()
        } else {
            self.geometry.first().and_then(|g| g.date.as_deref())
        };

        timestamp
            .and_then(|t| t.split('T').next())
            .unwrap_or("?")
    }

    /// Builds the template fields.
    pub fn template_fields(&self) -> TemplateFields {
        let status = if self.is_closed() { "closed" } else { "open" };
        let categories = self
            .categories
            .iter()
            .map(|c| c.title.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut fields = TemplateFields::new();
        fields.insert("id", self.id.clone());
        fields.insert("date", self.date().to_string());
        fields.insert("status", status.to_string());
        fields.insert("categories", categories);
        fields.insert("title", normalize_whitespace(&self.title));
        fields
    }
}

impl EventsDocument {
    /// Renders one template line per event, joined by line breaks.
    pub fn render(&self, template: &Template) -> String {
        self.events
            .iter()
            .map(|event| template.render(&event.template_fields()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
