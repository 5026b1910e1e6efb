//! Day and night world map.
//!
//! Downloads the current sun map from timeanddate.com. The URL carries the
//! current UTC time, so it is rebuilt on every cycle.

mod descriptor;
mod tool;

pub use descriptor::dnmap_descriptor;
pub use tool::DnmapTool;

/// Options for the `dnmap` tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnmapOptions {
    /// Download the plain map instead of the satellite rendering.
    pub simple: bool,
}
