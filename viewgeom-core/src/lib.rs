//! Core data structures and traits for viewgeom
//!
//! This crate provides the geometric value types consumed by the query
//! kernel in `viewgeom-algorithms`: planes, bounding boxes, triangles,
//! frustums, transforms and indexed meshes. Every type is a plain value;
//! nothing here allocates except [`TriangleMesh`].

pub mod bounds;
pub mod error;
pub mod frustum;
pub mod mesh;
pub mod plane;
pub mod point;
pub mod traits;
pub mod transform;
pub mod triangle;

pub use bounds::*;
pub use error::*;
pub use frustum::*;
pub use mesh::*;
pub use plane::*;
pub use point::*;
pub use traits::*;
pub use transform::*;
pub use triangle::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, RealField, UnitQuaternion, Vector3, Vector4};
