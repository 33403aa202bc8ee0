//! Closest-point queries against triangles and triangle lists

use nalgebra::{Point3, RealField, Scalar};
use serde::{Deserialize, Serialize};
use viewgeom_core::TriangleMesh;

/// Feature of a triangle a closest point was found on
///
/// Vertices are numbered `0..=2` after `p0, p1, p2`. Edge 0 runs `p0-p1`,
/// edge 1 `p1-p2` and edge 2 `p2-p0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriangleRegion {
    Vertex(u8),
    Edge(u8),
    Face,
}

/// Result of a point-to-triangle query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleDistance<T: Scalar> {
    pub distance: T,
    pub closest_point: Point3<T>,
    pub region: TriangleRegion,
}

/// Distance from `point` to the triangle `p0, p1, p2`, with the closest point
///
/// Voronoi-region case analysis after Ericson, "Real-Time Collision
/// Detection", 5.1.5. Degenerate triangles resolve to the nearest point on
/// their edges.
pub fn distance_to_triangle<T: RealField + Copy>(
    p0: &Point3<T>,
    p1: &Point3<T>,
    p2: &Point3<T>,
    point: &Point3<T>,
) -> TriangleDistance<T> {
    let (closest_point, region) = closest_feature(p0, p1, p2, point);

    TriangleDistance {
        distance: (closest_point - point).norm(),
        closest_point,
        region,
    }
}

fn closest_feature<T: RealField + Copy>(
    p0: &Point3<T>,
    p1: &Point3<T>,
    p2: &Point3<T>,
    point: &Point3<T>,
) -> (Point3<T>, TriangleRegion) {
    let zero = T::zero();

    let p0_p1 = p1 - p0;
    let p0_p2 = p2 - p0;
    let p1_p2 = p2 - p1;

    // Parametric projections onto each edge, measured from both ends
    let snom = (point - p0).dot(&p0_p1);
    let sdenom = (point - p1).dot(&(p0 - p1));

    let tnom = (point - p0).dot(&p0_p2);
    let tdenom = (point - p2).dot(&(p0 - p2));

    if snom <= zero && tnom <= zero {
        return (*p0, TriangleRegion::Vertex(0));
    }

    let unom = (point - p1).dot(&p1_p2);
    let udenom = (point - p2).dot(&(p1 - p2));

    if sdenom <= zero && unom <= zero {
        return (*p1, TriangleRegion::Vertex(1));
    }

    if tdenom <= zero && udenom <= zero {
        return (*p2, TriangleRegion::Vertex(2));
    }

    let n = p0_p1.cross(&p0_p2);

    // Collinear vertices: every signed volume below would be zero
    if n.norm_squared() <= zero {
        return closest_on_edges(p0, p1, p2, point);
    }

    let v_p2 = n.dot(&(p0 - point).cross(&(p1 - point)));
    if v_p2 <= zero && snom >= zero && sdenom >= zero {
        return (p0 + p0_p1 * (snom / (snom + sdenom)), TriangleRegion::Edge(0));
    }

    let v_p0 = n.dot(&(p1 - point).cross(&(p2 - point)));
    if v_p0 <= zero && unom >= zero && udenom >= zero {
        return (p1 + p1_p2 * (unom / (unom + udenom)), TriangleRegion::Edge(1));
    }

    let v_p1 = n.dot(&(p2 - point).cross(&(p0 - point)));
    if v_p1 <= zero && tnom >= zero && tdenom >= zero {
        return (p0 + p0_p2 * (tnom / (tnom + tdenom)), TriangleRegion::Edge(2));
    }

    let sum = v_p0 + v_p1 + v_p2;
    if sum <= zero {
        return closest_on_edges(p0, p1, p2, point);
    }

    let u = v_p0 / sum;
    let v = v_p1 / sum;
    let w = T::one() - u - v;
    (
        Point3::from(p0.coords * u + p1.coords * v + p2.coords * w),
        TriangleRegion::Face,
    )
}

fn closest_on_edges<T: RealField + Copy>(
    p0: &Point3<T>,
    p1: &Point3<T>,
    p2: &Point3<T>,
    point: &Point3<T>,
) -> (Point3<T>, TriangleRegion) {
    [(p0, p1), (p1, p2), (p2, p0)]
        .into_iter()
        .enumerate()
        .map(|(edge, (a, b))| (closest_point_on_segment(a, b, point), edge))
        .fold(None, |best: Option<(Point3<T>, usize, T)>, (candidate, edge)| {
            let distance_sq = (candidate - point).norm_squared();
            match best {
                Some((_, _, best_sq)) if best_sq <= distance_sq => best,
                _ => Some((candidate, edge, distance_sq)),
            }
        })
        .map(|(closest, edge, _)| (closest, TriangleRegion::Edge(edge as u8)))
        .unwrap_or((*p0, TriangleRegion::Vertex(0)))
}

/// Closest point to `point` on the segment `a-b`
///
/// A zero-length segment yields `a`.
pub fn closest_point_on_segment<T: RealField + Copy>(a: &Point3<T>, b: &Point3<T>, point: &Point3<T>) -> Point3<T> {
    let ab = b - a;
    let length_sq = ab.norm_squared();
    if length_sq <= T::zero() {
        return *a;
    }

    let t = (point - a).dot(&ab) / length_sq;
    let t = if t < T::zero() {
        T::zero()
    } else if t > T::one() {
        T::one()
    } else {
        t
    };

    a + ab * t
}

/// Nearest face of a mesh to a query point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshHit<T: Scalar> {
    pub face: usize,
    pub distance: T,
    pub closest_point: Point3<T>,
}

/// Linear scan over every valid face of `mesh`
///
/// Returns `None` when the mesh has no usable faces. Ties keep the lower
/// face index.
pub fn closest_point_on_mesh<T: RealField + Copy>(mesh: &TriangleMesh<T>, point: &Point3<T>) -> Option<MeshHit<T>> {
    mesh.triangles()
        .map(|(face, triangle)| {
            let result = distance_to_triangle(&triangle.p0, &triangle.p1, &triangle.p2, point);
            MeshHit {
                face,
                distance: result.distance,
                closest_point: result.closest_point,
            }
        })
        .fold(None, |best: Option<MeshHit<T>>, hit| match best {
            Some(current) if current.distance <= hit.distance => Some(current),
            _ => Some(hit),
        })
}
