//! Point and vector aliases used throughout the kernel

use nalgebra::{Point3, Vector3, Vector4};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// Homogeneous 4-component vector, mostly used to carry plane coefficients
pub type Vector4f = Vector4<f32>;

/// Double precision homogeneous 4-component vector
pub type Vector4d = Vector4<f64>;
