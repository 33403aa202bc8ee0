//! Bounding-volume queries: oriented box closest point and AABB containment

use nalgebra::{Matrix4, Point, Point3, RealField, Scalar};
use viewgeom_core::{Aabb, DecomposedTransform, Transform3D};

/// Closest point on or inside an oriented box
///
/// The box is the transform itself: its translation is the origin corner,
/// its per-axis scale the extents and its rotation the orientation. In the
/// box's local frame it spans `[0, scale]` on every axis, so a centered box
/// needs the centering folded into the translation.
pub fn closest_point_on_oobb<T: RealField + Copy>(point: &Point3<T>, oobb: &Matrix4<T>) -> Point3<T> {
    let DecomposedTransform { origin, scale, rotation } = Transform3D::from(*oobb).decompose();

    let local = rotation.inverse_transform_vector(&(point - origin));

    let zero = T::zero();
    let clamped = local.zip_map(&scale, |v, s| {
        // A mirrored axis carries a negative scale
        let (lo, hi) = if s < zero { (s, zero) } else { (zero, s) };
        if v < lo {
            lo
        } else if v > hi {
            hi
        } else {
            v
        }
    });

    origin + rotation.transform_vector(&clamped)
}

/// True if every component of `point` lies in `[min, max]`, inclusive
pub fn point_in_aabb<T: Scalar + PartialOrd, const D: usize>(
    point: &Point<T, D>,
    min: &Point<T, D>,
    max: &Point<T, D>,
) -> bool {
    point
        .coords
        .iter()
        .zip(min.coords.iter())
        .zip(max.coords.iter())
        .all(|((p, lo), hi)| p >= lo && p <= hi)
}

/// Containment and closest-point queries on [`Aabb`]
pub trait AabbQuery<T: Scalar> {
    fn contains_point(&self, point: &Point3<T>) -> bool;

    fn closest_point(&self, point: &Point3<T>) -> Point3<T>;
}

impl<T: RealField + Copy> AabbQuery<T> for Aabb<T> {
    fn contains_point(&self, point: &Point3<T>) -> bool {
        point_in_aabb(point, &self.min, &self.max)
    }

    fn closest_point(&self, point: &Point3<T>) -> Point3<T> {
        let transform = Transform3D::translation(self.min.coords) * Transform3D::scaling(self.size());
        closest_point_on_oobb(point, &transform.matrix)
    }
}
