//! NASA Earth Observatory Natural Event Tracker.
//!
//! Polls the EONET events feed and keeps the raw JSON plus a text list with
//! one template-rendered line per event.

mod descriptor;
mod parser;
mod tool;

use std::fmt;
use std::str::FromStr;

pub use descriptor::eonet_descriptor;
pub use parser::{EonetEvent, EventsDocument};
pub use tool::EonetTool;

/// Default number of events requested.
pub const DEFAULT_LIMIT: u32 = 50;

/// Default line template. Line breaks are written as `\n`.
pub const DEFAULT_TEXT_TEMPLATE: &str = "{status:>6}  {date}  {id}  {categories}:  {title}";

/// Fields available to the line template.
pub const TEXT_TEMPLATE_FIELDS: &[&str] = &["status", "date", "id", "categories", "title"];

/// Which events to request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EonetStatus {
    /// Open and closed events.
    #[default]
    All,
    /// Ongoing events only.
    Open,
    /// Finished events only.
    Closed,
}

impl EonetStatus {
    /// Every status choice.
    pub const CHOICES: &'static [&'static str] = &["all", "open", "closed"];

    /// Returns the query parameter value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for EonetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EonetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            other => Err(format!("unknown event status: {other}")),
        }
    }
}

/// Options for the `eonet` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EonetOptions {
    /// Event status filter.
    pub status: EonetStatus,
    /// Maximum number of events.
    pub limit: u32,
    /// Template for one line of the text artifact.
    pub text_template: String,
}

impl Default for EonetOptions {
    fn default() -> Self {
        Self {
            status: EonetStatus::default(),
            limit: DEFAULT_LIMIT,
            text_template: DEFAULT_TEXT_TEMPLATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("open".parse::<EonetStatus>().unwrap(), EonetStatus::Open);
        assert_eq!("CLOSED".parse::<EonetStatus>().unwrap(), EonetStatus::Closed);
        assert!("pending".parse::<EonetStatus>().is_err());
        for choice in EonetStatus::CHOICES {
            assert_eq!(choice.parse::<EonetStatus>().unwrap().as_str(), *choice);
        }
    }
}
