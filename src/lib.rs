//! # viewgeom
//!
//! Geometric query kernel for 3D point cloud and GIS viewers.
//!
//! This is the umbrella crate that provides convenient access to all viewgeom
//! functionality. You can use this crate to get everything in one place, or
//! use individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Value types (Plane, Aabb, Triangle, Frustum, Transform3D, TriangleMesh)
//! - **Algorithms**: Frustum classification, closest-point queries, spheres
//!   through three points, easing and periodic clamping
//!
//! ## Quick Start
//!
//! ```rust
//! use viewgeom::prelude::*;
//!
//! let frustum = Frustum::from_view_projection(&Matrix4::<f64>::identity());
//! let bounds = Aabb::from_center_extents(Point3::new(0.5, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
//!
//! match classify_aabb(&frustum, &bounds) {
//!     FrustumClass::Outside => {}
//!     FrustumClass::Inside => {}
//!     FrustumClass::Partial(mask) => assert!(mask.contains(Frustum::<f64>::RIGHT)),
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables algorithms
//! - `algorithms`: The query kernel

// Re-export core functionality
pub use viewgeom_core::*;

#[cfg(feature = "algorithms")]
pub use viewgeom_algorithms as algorithms;

/// Convenient imports for common use cases
pub mod prelude {
    pub use viewgeom_core::*;

    #[cfg(feature = "algorithms")]
    pub use viewgeom_algorithms::*;
}
