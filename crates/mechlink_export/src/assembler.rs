//! Document Assembler
//!
//! Entry point of an export. Checks the saved-document precondition, copies
//! the session and document metadata, then hands the design section to an
//! [`ExportPass`]. Either a complete [`Document`] comes back or nothing does.

use mechlink_host::{DesignSource, DocumentInfo, IdentityService, UserInfo};
use mechlink_message::{Document, DocumentMeta, SCHEMA_VERSION, UserMeta};

use crate::diagnostics::Diagnostics;
use crate::error::{ExportError, Result};
use crate::settings::ExportSettings;
use crate::walker::ExportPass;

/// A finished export.
#[derive(Debug, Clone)]
pub struct Export {
    pub document: Document,
    /// Entities that were skipped while walking.
    pub diagnostics: Diagnostics,
}

/// Exports a host that provides both the scene graph and identities.
pub fn export_document<H>(host: &H, settings: &ExportSettings) -> Result<Export>
where
    H: DesignSource + IdentityService + ?Sized,
{
    export_with_identity(host, host, settings)
}

/// Exports `source`, asking `identity` for every UID.
pub fn export_with_identity<S, I>(
    source: &S,
    identity: &I,
    settings: &ExportSettings,
) -> Result<Export>
where
    S: DesignSource + ?Sized,
    I: IdentityService + ?Sized,
{
    let document = source.document();
    let Some(document_meta) = document_meta(&document) else {
        log::error!("Export aborted: document `{}` has not been saved", document.name);
        return Err(ExportError::DocumentNotSaved {
            name: document.name,
        });
    };

    let mut pass = ExportPass::new(source, identity, settings);
    let design = pass.fill_design()?;
    let resolved = pass.resolved_count();
    let diagnostics = pass.into_diagnostics();

    log::info!(
        "Exported `{}`: {} components, {} joints, {} occurrences, {} UIDs, {} skipped",
        document_meta.name,
        design.components.len(),
        design.joints.len(),
        design.hierarchy_root.subtree_len(),
        resolved,
        diagnostics.len()
    );

    Ok(Export {
        document: Document {
            schema_version: SCHEMA_VERSION,
            user_meta: user_meta(source.current_user()),
            document_meta,
            design,
        },
        diagnostics,
    })
}

fn user_meta(user: UserInfo) -> UserMeta {
    UserMeta {
        user_name: user.user_name,
        id: user.user_id,
        display_name: user.display_name,
        email: user.email,
    }
}

/// `None` for a document without a backing file.
fn document_meta(document: &DocumentInfo) -> Option<DocumentMeta> {
    let file = document.data_file.as_ref()?;
    Some(DocumentMeta {
        format_version: document.version.clone(),
        name: document.name.clone(),
        version_number: file.version_number,
        description: file.description.clone(),
        id: file.id.clone(),
    })
}
