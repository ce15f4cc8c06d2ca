//! Builds a two-link arm in memory, exports it and prints the result.
//!
//! ```text
//! RUST_LOG=debug cargo run -p export_dump -- --json
//! ```

use glam::{DMat4, DQuat, DVec3};
use mechlink::prelude::*;

fn build_arm() -> anyhow::Result<Design> {
    let mut design = Design::new(ComponentData {
        part_number: "ARM-000".into(),
        ..ComponentData::named("Arm")
    });
    design.set_user(UserInfo {
        user_name: "demo".into(),
        user_id: "demo-user".into(),
        display_name: "Demo User".into(),
        email: "demo@example.com".into(),
    });
    design.set_document(DocumentInfo {
        name: "Two Link Arm".into(),
        version: "2.0.0".into(),
        data_file: Some(DataFileInfo {
            id: "urn:mechlink:demo:arm".into(),
            version_number: 3,
            description: "Demo assembly".into(),
        }),
    });

    design.add_appearance(AppearanceData {
        id: "app-anodized".into(),
        name: "Anodized Blue".into(),
        has_texture: false,
    });
    design.add_material(MaterialData {
        id: "mat-6061".into(),
        name: "Aluminum 6061".into(),
        appearance_id: "app-anodized".into(),
        density: 2700.0,
        yield_strength: 276e6,
        tensile_strength: 310e6,
    });

    let base = design.add_component(ComponentData {
        part_number: "ARM-001".into(),
        material_id: "mat-6061".into(),
        bounding_box: BoundingBox::new(DVec3::new(-0.1, -0.1, 0.0), DVec3::new(0.1, 0.1, 0.05)),
        physical_properties: PhysicalPropertiesData {
            density: 2700.0,
            mass: 5.4,
            volume: 0.002,
            area: 0.09,
            center_of_mass: DVec3::new(0.0, 0.0, 0.025),
        },
        ..ComponentData::named("Base")
    });
    let link = design.add_component(ComponentData {
        part_number: "ARM-002".into(),
        material_id: "mat-6061".into(),
        bounding_box: BoundingBox::new(DVec3::new(-0.02, -0.02, 0.0), DVec3::new(0.02, 0.02, 0.3)),
        ..ComponentData::named("Link")
    });

    let base_occ = design.add_occurrence(None, OccurrenceData::new("Base:1", base).grounded(true))?;
    let lower = design.add_occurrence(
        Some(base_occ),
        OccurrenceData::new("Link:1", link)
            .with_transform(DMat4::from_translation(DVec3::new(0.0, 0.0, 0.05))),
    )?;
    let upper = design.add_occurrence(
        Some(lower),
        OccurrenceData::new("Link:2", link).with_transform(DMat4::from_rotation_translation(
            DQuat::from_rotation_y(std::f64::consts::FRAC_PI_4),
            DVec3::new(0.0, 0.0, 0.3),
        )),
    )?;

    let root = design.root_component();
    design.add_joint(
        JointData::new("Shoulder", root)
            .between(Some(lower), Some(base_occ))
            .with_geometry(
                Some(JointGeometry::Direct {
                    origin: DVec3::new(0.0, 0.0, 0.05),
                }),
                None,
            ),
    )?;
    design.add_joint(
        JointData::new("Elbow", root)
            .between(Some(upper), Some(lower))
            .with_geometry(
                None,
                Some(JointGeometry::OffsetOrigin {
                    base_origin: DVec3::new(0.0, 0.0, 0.05),
                    offset: DVec3::new(0.0, 0.0, 0.3),
                }),
            ),
    )?;
    // Pins the base to the root component.
    design.add_joint(
        JointData::new("Anchor", root)
            .between(Some(base_occ), None)
            .with_geometry(Some(JointGeometry::Direct { origin: DVec3::ZERO }), None),
    )?;
    // Left behind by a deleted occurrence; the exporter skips it.
    design.add_joint(JointData::new("Stale", root))?;

    Ok(design)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let print_json = std::env::args().any(|arg| arg == "--json");
    let design = build_arm()?;

    let export = export_document(&design, &ExportSettings::default())?;

    let bytes = export.document.to_bytes()?;
    log::info!(
        "Encoded `{}` into {} bytes (schema v{})",
        export.document.document_meta.name,
        bytes.len(),
        export.document.schema_version
    );
    if !export.diagnostics.is_empty() {
        log::warn!("{} entities were left out of the export", export.diagnostics.len());
    }

    println!("{}", render_hierarchy(&export.document.design.hierarchy_root));
    println!(
        "{} components, {} joints, {} skipped",
        export.document.design.components.len(),
        export.document.design.joints.len(),
        export.diagnostics.len()
    );
    for diagnostic in &export.diagnostics {
        println!("  skipped: {diagnostic}");
    }

    if print_json {
        println!("{}", export.document.to_json_pretty()?);
    }
    Ok(())
}
