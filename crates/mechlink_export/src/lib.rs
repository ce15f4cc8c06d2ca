//! Mechlink Export
//!
//! Turns a host design into one immutable [`Document`](mechlink_message::Document).
//!
//! # Pipeline
//!
//! ```text
//! export_document
//!   ├─ precondition: document has a backing file
//!   ├─ user / document metadata
//!   └─ ExportPass
//!        ├─ flat component walk   → design.components
//!        ├─ flat joint walk       → design.joints      (corruption filter)
//!        ├─ material / appearance → design.materials, design.appearances
//!        └─ occurrence tree walk  → design.hierarchy_root (synthetic root)
//! ```
//!
//! Every UID is produced by a single [`IdentityResolver`] owned by the pass,
//! so the memo table never leaks between exports. Per-entity defects end up
//! in [`Diagnostics`]; anything else aborts the whole export.

pub mod assembler;
pub mod debug;
pub mod diagnostics;
pub mod encode;
pub mod error;
pub mod identity;
pub mod settings;
pub mod walker;

pub use assembler::{Export, export_document, export_with_identity};
pub use debug::render_hierarchy;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use encode::joint::{is_joint_corrupted, resolve_joint_origin};
pub use error::{ExportError, Result};
pub use identity::{IdentityResolver, Namespace};
pub use settings::{DEFAULT_NAMESPACE, ExportSettings};
pub use walker::ExportPass;
