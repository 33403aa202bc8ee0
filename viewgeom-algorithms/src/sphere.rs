//! Circumcircles and fixed-radius spheres through three points

use nalgebra::{Point3, RealField, Scalar, Vector3};

/// The circle through three points, lying in their plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle<T: Scalar> {
    pub center: Point3<T>,
    pub radius: T,
    /// Unit normal of the triangle `p0, p1, p2` (right-hand rule)
    pub normal: Vector3<T>,
}

/// Circumscribed circle of a triangle, `None` if the points are collinear
/// or coincident
pub fn circumcircle<T: RealField + Copy>(p0: &Point3<T>, p1: &Point3<T>, p2: &Point3<T>) -> Option<Circumcircle<T>> {
    let a = p1 - p0;
    let b = p2 - p0;
    let a_cross_b = a.cross(&b);
    let normal = a_cross_b.try_normalize(T::zero())?;

    let a_mag_sq = a.norm_squared();
    let b_mag_sq = b.norm_squared();
    let cross_mag_sq = a_cross_b.norm_squared();
    let two: T = nalgebra::convert(2.0);

    let radius = (a_mag_sq.sqrt() * b_mag_sq.sqrt() * (a - b).norm()) / (two * cross_mag_sq.sqrt());
    let center = p0 + (b * a_mag_sq - a * b_mag_sq).cross(&a_cross_b) / (two * cross_mag_sq);

    Some(Circumcircle { center, radius, normal })
}

/// Center of the sphere of `radius` passing through all three points
///
/// The center is placed on the side of the triangle its normal points to.
/// Returns `None` when the radius is smaller than the circumradius, or the
/// points do not span a triangle.
pub fn sphere_center_from_points<T: RealField + Copy>(
    radius: T,
    p0: &Point3<T>,
    p1: &Point3<T>,
    p2: &Point3<T>,
) -> Option<Point3<T>> {
    let circle = circumcircle(p0, p1, p2)?;

    let distance_sq = radius * radius - circle.radius * circle.radius;
    if distance_sq < T::zero() {
        return None;
    }

    Some(circle.center + circle.normal * distance_sq.sqrt())
}

/// [`sphere_center_from_points`] with the origin standing in for "no sphere"
///
/// This cannot tell a failure apart from a sphere actually centered at the
/// origin.
pub fn sphere_center_from_points_or_zero<T: RealField + Copy>(
    radius: T,
    p0: &Point3<T>,
    p1: &Point3<T>,
    p2: &Point3<T>,
) -> Point3<T> {
    sphere_center_from_points(radius, p0, p1, p2).unwrap_or_else(Point3::origin)
}
