//! Document export tests
//!
//! Tests for:
//! - Saved-document precondition
//! - Single synthetic root sharing the root component UID
//! - Occurrence tree order and component references
//! - Corrupted and unresolvable joints as diagnostics
//! - Stable UIDs across repeated exports
//! - Mesh body toggle and settings loading

use glam::{DMat4, DVec3};
use mechlink::prelude::*;
use mechlink::{Diagnostics, TransformLayout};

// ============================================================================
// Helper
// ============================================================================

fn saved_design(root_name: &str) -> Design {
    let mut design = Design::new(ComponentData::named(root_name));
    design.set_document(DocumentInfo {
        name: "Fixture".into(),
        version: "1.0.0".into(),
        data_file: Some(DataFileInfo {
            id: "urn:fixture".into(),
            version_number: 1,
            description: String::new(),
        }),
    });
    design
}

/// Root ─┬─ a ── a1
///       └─ b
fn tree_design() -> (Design, [mechlink::host::OccurrenceKey; 3]) {
    let mut design = saved_design("Root");
    let part = design.add_component(ComponentData::named("Part"));
    let a = design
        .add_occurrence(None, OccurrenceData::new("a", part).grounded(true))
        .unwrap();
    let a1 = design
        .add_occurrence(
            Some(a),
            OccurrenceData::new("a1", part).with_transform(DMat4::from_translation(DVec3::X)),
        )
        .unwrap();
    let b = design.add_occurrence(None, OccurrenceData::new("b", part)).unwrap();
    (design, [a, a1, b])
}

fn direct(origin: DVec3) -> Option<JointGeometry> {
    Some(JointGeometry::Direct { origin })
}

// ============================================================================
// Preconditions
// ============================================================================

#[test]
fn unsaved_document_produces_no_document() {
    let design = Design::new(ComponentData::named("Root"));
    let result = export_document(&design, &ExportSettings::default());

    match result {
        Err(ExportError::DocumentNotSaved { name }) => assert_eq!(name, ""),
        other => panic!("expected DocumentNotSaved, got {other:?}"),
    }
}

#[test]
fn saving_later_makes_the_same_design_exportable() {
    let mut design = Design::new(ComponentData::named("Root"));
    assert!(export_document(&design, &ExportSettings::default()).is_err());

    design.document_mut().data_file = Some(DataFileInfo::default());
    assert!(export_document(&design, &ExportSettings::default()).is_ok());
}

// ============================================================================
// Occurrence Tree
// ============================================================================

#[test]
fn tree_has_one_root_with_root_component_uid() {
    let (design, _) = tree_design();
    let doc = export_document(&design, &ExportSettings::default()).unwrap().document;
    let root = &doc.design.hierarchy_root;

    let root_component = doc
        .design
        .components
        .iter()
        .find(|c| c.header.name == "Root")
        .unwrap();

    assert_eq!(root.header.uuid, root_component.header.uuid);
    assert_eq!(root.component_uuid, root_component.header.uuid);
    assert!(root.is_grounded);
    assert!(root.transform.is_empty());
    assert_eq!(root.subtree_len(), 4);
}

#[test]
fn tree_is_pre_order_in_host_order() {
    let (design, _) = tree_design();
    let doc = export_document(&design, &ExportSettings::default()).unwrap().document;

    let names: Vec<&str> = doc
        .design
        .hierarchy_root
        .iter()
        .map(|o| o.header.name.as_str())
        .collect();
    assert_eq!(names, ["Root", "a", "a1", "b"]);
}

#[test]
fn occurrences_reference_components_in_the_flat_list() {
    let (design, _) = tree_design();
    let doc = export_document(&design, &ExportSettings::default()).unwrap().document;

    for occurrence in doc.design.hierarchy_root.iter() {
        assert!(
            doc.design
                .components
                .iter()
                .any(|c| c.header.uuid == occurrence.component_uuid),
            "dangling component reference from `{}`",
            occurrence.header.name
        );
    }
}

#[test]
fn occurrence_transforms_are_row_major() {
    let (design, _) = tree_design();
    let doc = export_document(&design, &ExportSettings::default()).unwrap().document;
    let a1 = doc
        .design
        .hierarchy_root
        .iter()
        .find(|o| o.header.name == "a1")
        .unwrap();

    assert_eq!(
        a1.transform.cells,
        [
            1.0, 0.0, 0.0, 1.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ]
    );
}

#[test]
fn short_transform_layout_drops_the_last_row() {
    let (design, _) = tree_design();
    let settings = ExportSettings {
        transform_layout: TransformLayout::Rows3x4,
        ..Default::default()
    };
    let doc = export_document(&design, &settings).unwrap().document;

    for occurrence in doc.design.hierarchy_root.iter().skip(1) {
        assert_eq!(occurrence.transform.cells.len(), 12);
    }
}

#[test]
fn shared_child_is_emitted_once() {
    let (mut design, [a, _, b]) = tree_design();
    let shared = design.occurrence(a).unwrap().children[0];
    design.occurrence_mut(b).unwrap().children.push(shared);

    let export = export_document(&design, &ExportSettings::default()).unwrap();

    assert_eq!(export.document.design.hierarchy_root.subtree_len(), 4);
    assert_eq!(export.diagnostics.count(DiagnosticKind::RevisitedOccurrence), 1);
}

// ============================================================================
// Joints
// ============================================================================

#[test]
fn corrupted_joint_yields_no_joint_and_one_diagnostic() {
    let mut design = saved_design("Root");
    let root = design.root_component();
    design
        .add_joint(JointData::new("stub", root).with_geometry(direct(DVec3::ONE), direct(DVec3::ONE)))
        .unwrap();

    let export = export_document(&design, &ExportSettings::default()).unwrap();

    assert!(export.document.design.joints.is_empty());
    assert_eq!(export.diagnostics.len(), 1);
    let diagnostic = export.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::CorruptedJoint);
    assert_eq!(diagnostic.name, "stub");
}

#[test]
fn joint_with_absent_side_points_at_parent_root() {
    let (mut design, [a, _, _]) = tree_design();
    let root = design.root_component();
    design
        .add_joint(
            JointData::new("pin", root)
                .between(Some(a), None)
                .with_geometry(direct(DVec3::ZERO), None),
        )
        .unwrap();

    let doc = export_document(&design, &ExportSettings::default()).unwrap().document;
    let joint = &doc.design.joints[0];
    let a_uid = &doc
        .design
        .hierarchy_root
        .iter()
        .find(|o| o.header.name == "a")
        .unwrap()
        .header
        .uuid;

    assert_eq!(&joint.occurrence_one_uuid, a_uid);
    assert_eq!(joint.occurrence_two_uuid, doc.design.hierarchy_root.header.uuid);
}

#[test]
fn unresolvable_joint_is_skipped_but_siblings_survive() {
    let (mut design, [a, a1, b]) = tree_design();
    let root = design.root_component();
    design
        .add_joint(JointData::new("no-origin", root).between(Some(a), Some(b)))
        .unwrap();
    design
        .add_joint(
            JointData::new("ok", root)
                .between(Some(a), Some(a1))
                .with_geometry(None, direct(DVec3::Y)),
        )
        .unwrap();

    let export = export_document(&design, &ExportSettings::default()).unwrap();

    let names: Vec<&str> = export
        .document
        .design
        .joints
        .iter()
        .map(|j| j.header.name.as_str())
        .collect();
    assert_eq!(names, ["ok"]);
    assert_eq!(export.diagnostics.count(DiagnosticKind::UnresolvedJointOrigin), 1);
}

#[test]
fn strict_mode_aborts_on_unresolvable_joint() {
    let (mut design, [a, _, b]) = tree_design();
    let root = design.root_component();
    design
        .add_joint(JointData::new("no-origin", root).between(Some(a), Some(b)))
        .unwrap();
    let settings = ExportSettings {
        strict_joint_origins: true,
        ..Default::default()
    };

    let err = export_document(&design, &settings).unwrap_err();
    assert!(matches!(err, ExportError::UnresolvedJointOrigin { .. }));
    assert!(!err.is_programmer_error());
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn repeated_export_keeps_uids() {
    let (mut design, [a, _, _]) = tree_design();
    let root = design.root_component();
    design
        .add_joint(
            JointData::new("pin", root)
                .between(Some(a), None)
                .with_geometry(direct(DVec3::ZERO), None),
        )
        .unwrap();

    let first = export_document(&design, &ExportSettings::default()).unwrap().document;
    let second = export_document(&design, &ExportSettings::default()).unwrap().document;

    assert_eq!(first, second);
}

#[test]
fn uids_are_unique_across_entity_kinds() {
    let (design, _) = tree_design();
    let doc = export_document(&design, &ExportSettings::default()).unwrap().document;

    let mut uids: Vec<&str> = doc
        .design
        .components
        .iter()
        .map(|c| c.header.uuid.as_str())
        .chain(doc.design.hierarchy_root.iter().skip(1).map(|o| o.header.uuid.as_str()))
        .collect();
    let total = uids.len();
    uids.sort_unstable();
    uids.dedup();
    assert_eq!(uids.len(), total);
}

#[test]
fn namespaces_do_not_share_uids() {
    let (design, _) = tree_design();
    let other = ExportSettings {
        namespace: "Isolated".into(),
        ..Default::default()
    };

    let a = export_document(&design, &ExportSettings::default()).unwrap().document;
    let b = export_document(&design, &other).unwrap().document;

    assert_ne!(a.design.hierarchy_root.header.uuid, b.design.hierarchy_root.header.uuid);
}

// ============================================================================
// Catalogs & Settings
// ============================================================================

#[test]
fn materials_and_appearances_keep_host_ids() {
    let mut design = saved_design("Root");
    design.add_material(MaterialData {
        id: "mat-1".into(),
        name: "Steel".into(),
        appearance_id: "app-1".into(),
        ..Default::default()
    });
    design.add_appearance(AppearanceData {
        id: "app-1".into(),
        name: "Brushed".into(),
        has_texture: true,
    });

    let doc = export_document(&design, &ExportSettings::default()).unwrap().document;

    assert_eq!(doc.design.materials[0].id, "mat-1");
    assert_eq!(doc.design.materials[0].appearance_id, "app-1");
    assert!(doc.design.materials[0].properties.is_unimplemented());
    assert_eq!(doc.design.appearances[0].id, "app-1");
    assert!(doc.design.appearances[0].has_texture);
}

#[test]
fn mesh_bodies_follow_the_settings_toggle() {
    let mut design = saved_design("Root");
    let part = design.add_component(ComponentData::named("Part"));
    design
        .add_mesh_body(
            part,
            MeshBodyData {
                name: "Body1".into(),
                ..Default::default()
            },
        )
        .unwrap();

    let off = export_document(&design, &ExportSettings::default()).unwrap().document;
    assert!(off.design.components[1].mesh_bodies.is_unimplemented());

    let settings = ExportSettings::from_json_str(r#"{ "include_mesh_bodies": true }"#).unwrap();
    let on = export_document(&design, &settings).unwrap().document;
    let bodies = on.design.components[1].mesh_bodies.as_ready().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].header.name, "Body1");
    assert!(bodies[0].triangle_mesh.is_unimplemented());
}

#[test]
fn clean_export_has_no_diagnostics() {
    let (design, _) = tree_design();
    let export = export_document(&design, &ExportSettings::default()).unwrap();
    assert_eq!(export.diagnostics, Diagnostics::new());
}
