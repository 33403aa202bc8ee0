//! Triangle primitive

use nalgebra::{Point3, RealField, Scalar, Vector3};
use serde::{Deserialize, Serialize};

/// Three points in space. No normal is stored; it is derived on demand.
///
/// Degenerate triangles (collinear or coincident points) are valid values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle<T: Scalar> {
    pub p0: Point3<T>,
    pub p1: Point3<T>,
    pub p2: Point3<T>,
}

impl<T: RealField + Copy> Triangle<T> {
    pub fn new(p0: Point3<T>, p1: Point3<T>, p2: Point3<T>) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn vertices(&self) -> [Point3<T>; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Unnormalized face normal, `(p1 - p0) x (p2 - p0)`
    ///
    /// Its length is twice the triangle's area.
    pub fn normal(&self) -> Vector3<T> {
        (self.p1 - self.p0).cross(&(self.p2 - self.p0))
    }

    /// Unit face normal, or `None` for a degenerate triangle
    pub fn unit_normal(&self) -> Option<Vector3<T>> {
        self.normal().try_normalize(T::zero())
    }

    pub fn area(&self) -> T {
        self.normal().norm() * nalgebra::convert::<f64, T>(0.5)
    }

    /// True when the area is at or below `epsilon`
    pub fn is_degenerate(&self, epsilon: T) -> bool {
        self.area() <= epsilon
    }

    pub fn centroid(&self) -> Point3<T> {
        Point3::from((self.p0.coords + self.p1.coords + self.p2.coords) / nalgebra::convert::<f64, T>(3.0))
    }
}
