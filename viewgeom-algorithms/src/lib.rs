//! # viewgeom Algorithms
//!
//! Closed-form geometric queries used by a point cloud viewer's renderer:
//! frustum culling, closest points on oriented boxes and triangles, spheres
//! through three points, and the easing/wrapping helpers driving the camera.
//!
//! Every function is stateless and operates on the primitives or explicit
//! lists passed in. Degenerate input never panics; each function documents
//! what it returns instead.

pub mod bounds;
pub mod easing;
pub mod frustum;
pub mod sphere;
pub mod triangle;
pub mod wrap;

// Re-export commonly used items
pub use bounds::*;
pub use easing::*;
pub use frustum::*;
pub use sphere::*;
pub use triangle::*;
pub use wrap::*;
