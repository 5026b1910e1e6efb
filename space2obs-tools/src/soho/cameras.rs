//! SOHO camera table.

use crate::error::ToolError;

/// Selection keyword for every camera.
pub const ALL_CAMERAS: &str = "all";

/// A real-time image feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    /// Id used on the command line and in the URL.
    pub id: &'static str,
    /// Instrument name.
    pub name: &'static str,
}

impl Camera {
    /// Returns the path of the latest 1024px image, relative to the host.
    pub fn latest_image_path(&self) -> String {
        format!("/data/realtime/{}/1024/latest.jpg", self.id)
    }

    /// Returns the artifact file name.
    pub fn artifact_name(&self) -> String {
        format!("soho_last_{}_image", self.id)
    }
}

/// Every camera, in polling order.
pub const CAMERAS: &[Camera] = &[
    Camera { id: "c2", name: "LASCO C2" },
    Camera { id: "c3", name: "LASCO C3" },
    Camera { id: "eit_171", name: "EIT 171" },
    Camera { id: "eit_195", name: "EIT 195" },
    Camera { id: "eit_284", name: "EIT 284" },
    Camera { id: "eit_304", name: "EIT 304" },
    Camera { id: "hmi_igr", name: "SDO/HMI Continuum" },
    Camera { id: "hmi_mag", name: "SDO/HMI Magnetogram" },
];

/// Resolves a camera selection.
///
/// `all` anywhere in the selection picks every camera. Otherwise the result
/// follows table order, without duplicates.
pub fn select_cameras<S: AsRef<str>>(selection: &[S]) -> Result<Vec<Camera>, ToolError> {
    if selection.is_empty() {
        return Err(ToolError::Config("no camera selected".into()));
    }

    if let Some(unknown) = selection
        .iter()
        .map(AsRef::as_ref)
        .find(|id| *id != ALL_CAMERAS && !CAMERAS.iter().any(|c| c.id == *id))
    {
        return Err(ToolError::Config(format!("unknown camera: {unknown}")));
    }

    if selection.iter().any(|id| id.as_ref() == ALL_CAMERAS) {
        return Ok(CAMERAS.to_vec());
    }

    Ok(CAMERAS
        .iter()
        .filter(|c| selection.iter().any(|id| id.as_ref() == c.id))
        .copied()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all() {
        assert_eq!(select_cameras(&["all"]).unwrap().len(), CAMERAS.len());
        assert_eq!(select_cameras(&["c2", "all"]).unwrap().len(), CAMERAS.len());
    }

    #[test]
    fn test_select_subset_in_table_order() {
        let ids: Vec<_> = select_cameras(&["hmi_mag", "c2", "c2"])
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, ["c2", "hmi_mag"]);
    }

    #[test]
    fn test_select_unknown() {
        assert!(matches!(
            select_cameras(&["c4"]),
            Err(ToolError::Config(_))
        ));
        assert!(select_cameras::<&str>(&[]).is_err());
    }

    #[test]
    fn test_camera_paths() {
        let c3 = CAMERAS[1];
        assert_eq!(c3.latest_image_path(), "/data/realtime/c3/1024/latest.jpg");
        assert_eq!(c3.artifact_name(), "soho_last_c3_image");
    }
}
