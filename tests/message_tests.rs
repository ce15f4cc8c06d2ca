//! Message encoding tests
//!
//! Tests for:
//! - Transform flattening order
//! - Double-fill guard
//! - Binary encoding and schema version check
//! - JSON wire names

use glam::{DMat4, DVec3};
use mechlink::message::{
    Matrix3D, MessageError, TransformLayout, encode_transform, fill_bounding_box, fill_transform,
};
use mechlink::prelude::*;
use mechlink::{ExportError, SCHEMA_VERSION};

// ============================================================================
// Helper
// ============================================================================

fn exported() -> Document {
    let mut design = Design::new(ComponentData::named("Root"));
    design.set_document(DocumentInfo {
        name: "Wire".into(),
        data_file: Some(DataFileInfo::default()),
        ..Default::default()
    });
    let part = design.add_component(ComponentData::named("Part"));
    let a = design.add_occurrence(None, OccurrenceData::new("a", part)).unwrap();
    let root = design.root_component();
    design
        .add_joint(
            JointData::new("j", root)
                .between(Some(a), None)
                .with_geometry(Some(JointGeometry::Direct { origin: DVec3::ZERO }), None),
        )
        .unwrap();
    export_document(&design, &ExportSettings::default())
        .unwrap()
        .document
}

// ============================================================================
// Transforms
// ============================================================================

#[test]
fn identity_transform_is_reproduced_exactly() {
    let expected = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];
    let cells = encode_transform(&DMat4::from_cols_array(&expected), TransformLayout::Rows4x4);
    assert_eq!(cells, expected);
}

#[test]
fn filling_a_populated_transform_fails() {
    let mut target = Matrix3D::default();
    fill_transform(&DMat4::IDENTITY, TransformLayout::Rows4x4, &mut target, "t").unwrap();
    let before = target.clone();

    let err = fill_transform(&DMat4::IDENTITY, TransformLayout::Rows4x4, &mut target, "t")
        .unwrap_err();

    assert!(matches!(err, MessageError::SlotAlreadyPopulated { field: "t" }));
    assert_eq!(target, before, "guard must not append or overwrite");
    assert!(ExportError::from(err).is_programmer_error());
}

#[test]
fn filling_a_populated_bounding_box_fails() {
    let mut slot = None;
    fill_bounding_box(DVec3::ZERO, DVec3::ONE, &mut slot, "bbox").unwrap();
    assert!(fill_bounding_box(DVec3::ZERO, DVec3::ONE, &mut slot, "bbox").is_err());
    assert_eq!(slot.unwrap().max_point.x, 1.0);
}

// ============================================================================
// Encodings
// ============================================================================

#[test]
fn binary_encoding_round_trips_an_export() {
    let doc = exported();
    let bytes = doc.to_bytes().unwrap();
    assert_eq!(Document::from_bytes(&bytes).unwrap(), doc);
}

#[test]
fn binary_decoding_rejects_other_schema_versions() {
    let mut doc = exported();
    doc.schema_version = SCHEMA_VERSION + 1;
    let bytes = doc.to_bytes().unwrap();

    let err = Document::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, MessageError::SchemaMismatch { found, expected }
        if found == SCHEMA_VERSION + 1 && expected == SCHEMA_VERSION));
}

#[test]
fn json_uses_consumer_field_names() {
    let value = exported().to_json_value().unwrap();

    let design = &value["design"];
    assert!(design["hierarchyRoot"]["componentUUID"].is_string());
    assert!(design["hierarchyRoot"]["childOccurrences"].is_array());
    assert!(design["joints"][0]["occurrenceOneUUID"].is_string());
    assert!(design["joints"][0]["occurrenceTwoUUID"].is_string());
    assert_eq!(design["joints"][0]["motion"], "unimplemented");
    assert_eq!(value["schemaVersion"], SCHEMA_VERSION);
    assert_eq!(value["documentMeta"]["name"], "Wire");
}

#[test]
fn compact_and_pretty_json_describe_the_same_document() {
    let doc = exported();
    let compact: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    let pretty: serde_json::Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();

    assert_eq!(compact, pretty);
    assert!(pretty.get("userMeta").is_some());
}
