//! Tool registry.
//!
//! The registry is the static table of every tool space2obs knows about.
//! Looking a tool up by name never loads code at runtime.

use std::collections::HashMap;
use std::sync::OnceLock;

use space2obs_core::ToolKind;

use crate::apod::apod_descriptor;
use crate::descriptor::ToolDescriptor;
use crate::dnmap::dnmap_descriptor;
use crate::eonet::eonet_descriptor;
use crate::soho::soho_descriptor;

// ============================================================================
// Static Registry
// ============================================================================

/// Static storage for all tool descriptors.
static DESCRIPTORS: OnceLock<Vec<ToolDescriptor>> = OnceLock::new();

/// Static storage for CLI name to tool kind mapping.
static CLI_NAME_MAP: OnceLock<HashMap<&'static str, ToolKind>> = OnceLock::new();

fn init_descriptors() -> Vec<ToolDescriptor> {
    vec![
        apod_descriptor(),
        dnmap_descriptor(),
        eonet_descriptor(),
        soho_descriptor(),
    ]
}

fn build_cli_name_map(descriptors: &[ToolDescriptor]) -> HashMap<&'static str, ToolKind> {
    descriptors.iter().map(|d| (d.cli.name, d.id)).collect()
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Global registry of all tool descriptors.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Returns all tool descriptors.
    pub fn all() -> &'static [ToolDescriptor] {
        DESCRIPTORS.get_or_init(init_descriptors)
    }

    /// Gets a tool descriptor by kind.
    pub fn get(id: ToolKind) -> Option<&'static ToolDescriptor> {
        Self::all().iter().find(|d| d.id == id)
    }

    /// Returns the CLI name to tool kind mapping.
    pub fn cli_name_map() -> &'static HashMap<&'static str, ToolKind> {
        CLI_NAME_MAP.get_or_init(|| build_cli_name_map(Self::all()))
    }

    /// Looks up a tool by CLI name.
    pub fn get_by_cli_name(name: &str) -> Option<&'static ToolDescriptor> {
        let kind = Self::cli_name_map().get(name)?;
        Self::get(*kind)
    }

    /// Returns the primary CLI names in registry order.
    pub fn cli_names() -> Vec<&'static str> {
        Self::all().iter().map(|d| d.cli.name).collect()
    }

    /// Returns the number of registered tools.
    pub fn count() -> usize {
        Self::all().len()
    }
}

// ============================================================================
// Tests
// ============================================================================
