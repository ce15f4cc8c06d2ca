#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Mechlink
//!
//! Serializes a CAD assembly (components, placed occurrences, joints,
//! materials, appearances) into one message for a robot simulation consumer.
//!
//! ```rust,ignore
//! use mechlink::prelude::*;
//!
//! let export = export_document(&design, &ExportSettings::default())?;
//! for skipped in &export.diagnostics {
//!     log::warn!("{skipped}");
//! }
//! let bytes = export.document.to_bytes()?;
//! ```

pub use mechlink_export as export;
pub use mechlink_host as host;
pub use mechlink_message as message;

pub use mechlink_export::{
    Diagnostic, DiagnosticKind, Diagnostics, Export, ExportError, ExportSettings,
    export_document, export_with_identity, render_hierarchy,
};
pub use mechlink_host::{DesignSource, IdentityService};
pub use mechlink_message::{Document, SCHEMA_VERSION, TransformLayout};

pub mod prelude {
    pub use mechlink_export::{
        DiagnosticKind, Export, ExportError, ExportSettings, export_document,
        export_with_identity, render_hierarchy,
    };
    pub use mechlink_host::{
        AppearanceData, BoundingBox, ComponentData, DataFileInfo, Design, DesignSource,
        DocumentInfo, IdentityService, JointData, JointGeometry, MaterialData, MeshBodyData,
        OccurrenceData, PhysicalPropertiesData, UserInfo,
    };
    pub use mechlink_message::{Document, Pending, TransformLayout, Uid};
}
