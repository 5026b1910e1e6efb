//! SOHO/SDO real-time solar images.
//!
//! Polls the latest image of each selected camera. Every camera has its own
//! artifact and fingerprint; all cameras share one idle wait per cycle.

mod cameras;
mod descriptor;
mod tool;

pub use cameras::{ALL_CAMERAS, CAMERAS, Camera, select_cameras};
pub use descriptor::soho_descriptor;
pub use tool::SohoTool;

/// Options for the `soho` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SohoOptions {
    /// Camera ids to poll; `all` selects every camera.
    pub cameras: Vec<String>,
}

impl Default for SohoOptions {
    fn default() -> Self {
        Self {
            cameras: vec![ALL_CAMERAS.to_string()],
        }
    }
}
