//! Half-space planes

use nalgebra::{Point3, RealField, Scalar, Vector3, Vector4};
use serde::{Deserialize, Serialize};

/// A plane defined by the equation ax + by + cz + d = 0
///
/// The positive half-space `n·p + d >= 0` is considered "inside". Frustum
/// planes are stored this way with their normals pointing into the volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane<T: Scalar> {
    /// Plane coefficients [a, b, c, d]
    pub coefficients: Vector4<T>,
}

impl<T: RealField + Copy> Plane<T> {
    /// Create a new plane from coefficients
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self {
            coefficients: Vector4::new(a, b, c, d),
        }
    }

    /// Create a plane through `point` facing along `normal`
    pub fn from_point_normal(point: &Point3<T>, normal: &Vector3<T>) -> Self {
        let d = -normal.dot(&point.coords);
        Self::new(normal.x, normal.y, normal.z, d)
    }

    /// Create a plane from three points, facing along `(p1 - p0) x (p2 - p0)`
    ///
    /// Returns `None` when the points are collinear or coincident.
    pub fn from_points(p0: &Point3<T>, p1: &Point3<T>, p2: &Point3<T>) -> Option<Self> {
        let normal = (p1 - p0).cross(&(p2 - p0)).try_normalize(T::zero())?;
        Some(Self::from_point_normal(p0, &normal))
    }

    /// Get the (not necessarily unit) normal vector of the plane
    pub fn normal(&self) -> Vector3<T> {
        self.coefficients.xyz()
    }

    /// Get the `d` coefficient
    pub fn offset(&self) -> T {
        self.coefficients.w
    }

    /// Signed distance from a point, scaled by the normal's length
    pub fn signed_distance(&self, point: &Point3<T>) -> T {
        self.coefficients.dot(&point.to_homogeneous())
    }

    /// Rescale so the normal has unit length
    pub fn normalize(&self) -> Self {
        let length = self.normal().norm();
        if length <= T::zero() {
            return *self;
        }

        Self {
            coefficients: self.coefficients / length,
        }
    }

    /// The same plane facing the opposite way
    pub fn flip(&self) -> Self {
        Self {
            coefficients: -self.coefficients,
        }
    }
}

impl<T: Scalar> From<Vector4<T>> for Plane<T> {
    fn from(coefficients: Vector4<T>) -> Self {
        Self { coefficients }
    }
}

impl<T: Scalar> From<Plane<T>> for Vector4<T> {
    fn from(plane: Plane<T>) -> Self {
        plane.coefficients
    }
}
