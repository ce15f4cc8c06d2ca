//! Export Settings
//!
//! ```rust,ignore
//! use mechlink_export::ExportSettings;
//! use mechlink_message::TransformLayout;
//!
//! let settings = ExportSettings {
//!     transform_layout: TransformLayout::Rows3x4,
//!     ..Default::default()
//! };
//!
//! // or from a JSON file shipped with the host plugin
//! let settings = ExportSettings::from_json_str(r#"{ "include_mesh_bodies": true }"#)?;
//! ```

use mechlink_message::TransformLayout;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Namespace group under which UIDs are persisted on host entities.
pub const DEFAULT_NAMESPACE: &str = "MechlinkExporter";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Identity namespace tag handed to the identity service.
    pub namespace: String,
    pub transform_layout: TransformLayout,
    /// Fill `Component::mesh_bodies`. When off the field stays
    /// `Pending::Unimplemented`.
    pub include_mesh_bodies: bool,
    /// Abort on an unresolvable joint origin instead of skipping the joint.
    pub strict_joint_origins: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            transform_layout: TransformLayout::Rows4x4,
            include_mesh_bodies: false,
            strict_joint_origins: false,
        }
    }
}

impl ExportSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
