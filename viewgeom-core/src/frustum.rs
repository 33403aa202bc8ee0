//! View frustum as six inward-facing planes

use crate::error::{Error, Result};
use crate::plane::Plane;
use nalgebra::{Matrix4, RealField, Scalar, Vector4};
use serde::{Deserialize, Serialize};

/// Six half-spaces bounding the visible volume
///
/// Plane `i` corresponds to bit `1 << i` in frustum classification masks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frustum<T: Scalar> {
    pub planes: [Plane<T>; 6],
}

impl<T: RealField + Copy> Frustum<T> {
    pub const LEFT: usize = 0;
    pub const RIGHT: usize = 1;
    pub const BOTTOM: usize = 2;
    pub const TOP: usize = 3;
    pub const NEAR: usize = 4;
    pub const FAR: usize = 5;

    pub fn new(planes: [Plane<T>; 6]) -> Self {
        Self { planes }
    }

    /// Extract the planes from a combined view-projection matrix
    ///
    /// Uses the Gribb/Hartmann row combination for column-vector matrices with
    /// OpenGL clip-space depth (`-w <= z <= w`). The resulting planes are
    /// normalized and face inward.
    pub fn from_view_projection(view_projection: &Matrix4<T>) -> Self {
        let row = |i: usize| -> Vector4<T> { view_projection.row(i).transpose() };
        let (row0, row1, row2, row3) = (row(0), row(1), row(2), row(3));

        Self::new([
            Plane::from(row3 + row0).normalize(),
            Plane::from(row3 - row0).normalize(),
            Plane::from(row3 + row1).normalize(),
            Plane::from(row3 - row1).normalize(),
            Plane::from(row3 + row2).normalize(),
            Plane::from(row3 - row2).normalize(),
        ])
    }

    /// Build a frustum from exactly six coefficient vectors
    pub fn from_coefficients(coefficients: &[Vector4<T>]) -> Result<Self> {
        let planes: [Vector4<T>; 6] = coefficients.try_into().map_err(|_| {
            Error::InvalidData(format!(
                "A frustum needs 6 planes, got {}",
                coefficients.len()
            ))
        })?;

        Ok(Self::new(planes.map(Plane::from)))
    }

    /// Plane coefficients in mask-bit order
    pub fn as_coefficients(&self) -> [Vector4<T>; 6] {
        self.planes.map(|plane| plane.coefficients)
    }
}
