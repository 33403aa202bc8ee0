//! Core traits for viewgeom

use crate::{bounds::Aabb, mesh::TriangleMesh, transform::Transform3D, triangle::Triangle};
use nalgebra::{Point3, RealField, Scalar};

/// Trait for objects with a spatial extent
pub trait Bounded<T: Scalar> {
    /// Get the bounding box of the object, `None` if it has no points
    fn bounding_box(&self) -> Option<Aabb<T>>;

    /// Get the center point of the object's bounding box
    fn center(&self) -> Option<Point3<T>>;
}

/// Trait for objects that can be transformed
pub trait Transformable<T: Scalar> {
    /// Apply a transformation to the object
    fn transform(&mut self, transform: &Transform3D<T>);
}

impl<T: RealField + Copy> Bounded<T> for Triangle<T> {
    fn bounding_box(&self) -> Option<Aabb<T>> {
        Aabb::from_points(&self.vertices())
    }

    fn center(&self) -> Option<Point3<T>> {
        self.bounding_box().map(|aabb| aabb.center())
    }
}

impl<T: RealField + Copy> Bounded<T> for TriangleMesh<T> {
    fn bounding_box(&self) -> Option<Aabb<T>> {
        Aabb::from_points(&self.vertices)
    }

    fn center(&self) -> Option<Point3<T>> {
        self.bounding_box().map(|aabb| aabb.center())
    }
}

impl<T: RealField + Copy> Transformable<T> for Triangle<T> {
    fn transform(&mut self, transform: &Transform3D<T>) {
        self.p0 = transform.transform_point(&self.p0);
        self.p1 = transform.transform_point(&self.p1);
        self.p2 = transform.transform_point(&self.p2);
    }
}

impl<T: RealField + Copy> Transformable<T> for TriangleMesh<T> {
    fn transform(&mut self, transform: &Transform3D<T>) {
        for vertex in &mut self.vertices {
            *vertex = transform.transform_point(vertex);
        }
    }
}
