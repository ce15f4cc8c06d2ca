//! Geometric Primitive Encoders
//!
//! Converts host floating-point geometry into the message's flat numeric
//! layout. Values are copied as-is: no unit conversion and no validation that
//! `min <= max`.
//!
//! # Transform layout
//!
//! Transforms are flattened **row-major**. For a matrix with rows `r0..r3`
//! the output is `r0.x r0.y r0.z r0.w r1.x ...`, so the translation lands in
//! cells 3, 7 and 11. [`TransformLayout::Rows3x4`] drops the last row.
//! This order is part of the consumer contract.
//!
//! # Slot guards
//!
//! The `fill_*` functions write into an output slot and refuse to overwrite
//! one that already holds data. Double-filling only happens through a walker
//! bug, so it is reported as [`MessageError::SlotAlreadyPopulated`] rather
//! than silently appended.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{MessageError, Result};
use crate::schema::{BoundingBox3D, Matrix3D, Vector3D};

/// Number and arrangement of transform cells written to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformLayout {
    /// All four rows, 16 cells.
    #[default]
    Rows4x4,
    /// The affine part only, 12 cells.
    Rows3x4,
}

impl TransformLayout {
    #[inline]
    #[must_use]
    pub const fn cell_count(self) -> usize {
        match self {
            Self::Rows4x4 => 16,
            Self::Rows3x4 => 12,
        }
    }
}

#[inline]
#[must_use]
pub fn encode_vector3(v: DVec3) -> Vector3D {
    Vector3D {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

#[inline]
#[must_use]
pub fn encode_bounding_box(min: DVec3, max: DVec3) -> BoundingBox3D {
    BoundingBox3D {
        max_point: encode_vector3(max),
        min_point: encode_vector3(min),
    }
}

/// Row-major flattening of `m` in the requested layout.
#[must_use]
pub fn encode_transform(m: &DMat4, layout: TransformLayout) -> Vec<f64> {
    let mut cells = m.transpose().to_cols_array().to_vec();
    cells.truncate(layout.cell_count());
    cells
}

pub fn fill_bounding_box(
    min: DVec3,
    max: DVec3,
    slot: &mut Option<BoundingBox3D>,
    field: &'static str,
) -> Result<()> {
    if slot.is_some() {
        log::error!("Refusing to overwrite populated bounding box `{field}`");
        return Err(MessageError::SlotAlreadyPopulated { field });
    }
    *slot = Some(encode_bounding_box(min, max));
    Ok(())
}

pub fn fill_transform(
    m: &DMat4,
    layout: TransformLayout,
    target: &mut Matrix3D,
    field: &'static str,
) -> Result<()> {
    if !target.is_empty() {
        log::error!(
            "Refusing to fill transform `{field}`: {} cells already present",
            target.cells.len()
        );
        return Err(MessageError::SlotAlreadyPopulated { field });
    }
    target.cells = encode_transform(m, layout);
    Ok(())
}
