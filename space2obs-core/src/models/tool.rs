//! Tool identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The data sources space2obs can poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// NASA Astronomy Picture of the Day.
    Apod,
    /// Day and night world map.
    Dnmap,
    /// NASA Earth Observatory Natural Event Tracker.
    Eonet,
    /// SOHO/SDO real-time solar images.
    Soho,
}

impl ToolKind {
    /// Returns every tool kind.
    pub fn all() -> &'static [ToolKind] {
        &[Self::Apod, Self::Dnmap, Self::Eonet, Self::Soho]
    }

    /// Returns the name used on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            Self::Apod => "apod",
            Self::Dnmap => "dnmap",
            Self::Eonet => "eonet",
            Self::Soho => "soho",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for ToolKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.cli_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidConfig(format!("unknown tool: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_kind() {
        assert_eq!("apod".parse::<ToolKind>().unwrap(), ToolKind::Apod);
        assert_eq!("SOHO".parse::<ToolKind>().unwrap(), ToolKind::Soho);
        assert!("hubble".parse::<ToolKind>().is_err());
    }

    #[test]
    fn test_cli_names_round_trip() {
        for kind in ToolKind::all() {
            assert_eq!(kind.cli_name().parse::<ToolKind>().unwrap(), *kind);
        }
    }
}
