//! Property tests for the query kernel
//!
//! These drive the public functions with seeded random input and check the
//! invariants the renderer and picking tools rely on.

use approx::assert_relative_eq;
use nalgebra::{Matrix4, Perspective3, Point3, UnitQuaternion, Vector3, Vector4};
use rand::prelude::*;
use rand::rngs::StdRng;
use viewgeom_algorithms::*;
use viewgeom_core::{Aabb, Frustum, Transform3D};

fn random_point(rng: &mut StdRng, spread: f64) -> Point3<f64> {
    Point3::new(
        rng.gen_range(-spread..spread),
        rng.gen_range(-spread..spread),
        rng.gen_range(-spread..spread),
    )
}

fn random_oobb(rng: &mut StdRng) -> Matrix4<f64> {
    let origin = random_point(rng, 5.0);
    let scale = Vector3::new(rng.gen_range(0.1..4.0), rng.gen_range(0.1..4.0), rng.gen_range(0.1..4.0));
    let rotation = UnitQuaternion::from_euler_angles(
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-1.5..1.5),
        rng.gen_range(-3.0..3.0),
    );
    Transform3D::from_parts(origin, scale, rotation).matrix
}

/// Planes of the box [-10, 10]^3, inside facing
fn cube_planes() -> [Vector4<f64>; 6] {
    [
        Vector4::new(1.0, 0.0, 0.0, 10.0),
        Vector4::new(-1.0, 0.0, 0.0, 10.0),
        Vector4::new(0.0, 1.0, 0.0, 10.0),
        Vector4::new(0.0, -1.0, 0.0, 10.0),
        Vector4::new(0.0, 0.0, 1.0, 10.0),
        Vector4::new(0.0, 0.0, -1.0, 10.0),
    ]
}

#[test]
fn oobb_closest_point_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let oobb = random_oobb(&mut rng);
        let point = random_point(&mut rng, 12.0);

        let once = closest_point_on_oobb(&point, &oobb);
        let twice = closest_point_on_oobb(&once, &oobb);
        assert_relative_eq!(once, twice, epsilon = 1e-9);
    }
}

#[test]
fn oobb_closest_point_is_not_farther_than_box_samples() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..100 {
        let oobb = random_oobb(&mut rng);
        let point = random_point(&mut rng, 12.0);
        let best = (closest_point_on_oobb(&point, &oobb) - point).norm();

        // Any point of the box, expressed in its unit local frame
        for _ in 0..20 {
            let local = Point3::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            let sample = oobb.transform_point(&local);
            assert!(best <= (sample - point).norm() + 1e-9);
        }
    }
}

#[test]
fn frustum_classification_tracks_plane_offsets() {
    let center = Point3::new(0.0, 0.0, 0.0);
    let extents = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(frustum_test(&cube_planes(), &center, &extents), FrustumClass::Inside);

    for plane in 0..6 {
        // Pull the plane in until it cuts the box
        let mut planes = cube_planes();
        planes[plane].w = 0.5;
        match frustum_test(&planes, &center, &extents) {
            FrustumClass::Partial(mask) => {
                assert!(mask.contains(plane));
                assert_eq!(mask.count(), 1);
            }
            other => panic!("plane {} should be straddled, got {:?}", plane, other),
        }

        // Push it past the far side of the box
        planes[plane].w = -5.0;
        assert_eq!(frustum_test(&planes, &center, &extents), FrustumClass::Outside);
    }
}

#[test]
fn frustum_classification_is_conservative() {
    let projection = Perspective3::new(1.5, 1.0, 0.5, 50.0);
    let view = Matrix4::look_at_rh(&Point3::new(0.0, 0.0, 10.0), &Point3::origin(), &Vector3::y());
    let frustum = Frustum::from_view_projection(&(projection.into_inner() * view));
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..500 {
        let center = random_point(&mut rng, 40.0);
        let extents = Vector3::new(rng.gen_range(0.0..3.0), rng.gen_range(0.0..3.0), rng.gen_range(0.0..3.0));
        let aabb = Aabb::from_center_extents(center, extents);

        let corners: Vec<Point3<f64>> = (0..8)
            .map(|i| {
                Point3::new(
                    if i & 1 == 0 { aabb.min.x } else { aabb.max.x },
                    if i & 2 == 0 { aabb.min.y } else { aabb.max.y },
                    if i & 4 == 0 { aabb.min.z } else { aabb.max.z },
                )
            })
            .collect();

        match classify_aabb(&frustum, &aabb) {
            FrustumClass::Outside => {
                // Every corner behind one common plane
                assert!(frustum
                    .planes
                    .iter()
                    .any(|plane| corners.iter().all(|c| plane.signed_distance(c) < 1e-9)));
            }
            FrustumClass::Inside => {
                assert!(frustum
                    .planes
                    .iter()
                    .all(|plane| corners.iter().all(|c| plane.signed_distance(c) > -1e-9)));
            }
            FrustumClass::Partial(mask) => assert!(!mask.is_empty()),
        }
    }
}

#[test]
fn aabb_boundaries_are_inclusive() {
    let min = Point3::new(1.0, -2.0, 0.5);
    let max = Point3::new(3.0, 4.0, 0.75);
    assert!(point_in_aabb(&min, &min, &max));
    assert!(point_in_aabb(&max, &min, &max));

    for axis in 0..3 {
        let mut below = min;
        below[axis] -= 1e-9;
        assert!(!point_in_aabb(&below, &min, &max), "axis {}", axis);

        let mut above = max;
        above[axis] += 1e-9;
        assert!(!point_in_aabb(&above, &min, &max), "axis {}", axis);
    }
}

#[test]
fn clamp_wrap_is_periodic() {
    let mut rng = StdRng::seed_from_u64(19);

    for _ in 0..1000 {
        let min: i64 = rng.gen_range(-1000..1000);
        let max: i64 = min + rng.gen_range(1..500);
        let val: i64 = rng.gen_range(-100_000..100_000);
        let k: i64 = rng.gen_range(-50..50);

        let wrapped = clamp_wrap(val, min, max);
        assert!(wrapped >= min && wrapped < max);
        assert_eq!(clamp_wrap(val + k * (max - min), min, max), wrapped);
        assert_eq!(clamp_wrap(wrapped, min, max), wrapped);
    }

    for _ in 0..1000 {
        // Quarter-degree steps keep the float arithmetic exact
        let val = f64::from(rng.gen_range(-40_000i32..40_000)) * 0.25;
        let k = f64::from(rng.gen_range(-20i32..20));

        let wrapped = clamp_wrap(val, -180.0, 180.0);
        assert!((-180.0..180.0).contains(&wrapped));
        assert_eq!(clamp_wrap(val + k * 360.0, -180.0, 180.0), wrapped);
        assert_eq!(clamp_wrap(wrapped, -180.0, 180.0), wrapped);
    }
}

#[test]
fn sphere_center_round_trip() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..200 {
        let center = random_point(&mut rng, 10.0);
        let radius = rng.gen_range(0.5..8.0);

        let on_sphere = |rng: &mut StdRng| {
            let direction = Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            center + direction.normalize() * radius
        };
        let (p0, mut p1, mut p2) = (on_sphere(&mut rng), on_sphere(&mut rng), on_sphere(&mut rng));

        let Some(circle) = circumcircle(&p0, &p1, &p2) else {
            continue;
        };
        // Skip near-degenerate triangles whose circumcircle is ill-conditioned
        if (p1 - p0).cross(&(p2 - p0)).norm() < 1e-2 {
            continue;
        }
        // The center must lie on the normal side
        if circle.normal.dot(&(center - circle.center)) < 0.0 {
            std::mem::swap(&mut p1, &mut p2);
        }

        let found = sphere_center_from_points(radius, &p0, &p1, &p2).unwrap();
        assert_relative_eq!(found, center, epsilon = 1e-6);
        for p in [p0, p1, p2] {
            assert_relative_eq!((p - found).norm(), radius, epsilon = 1e-6);
        }
    }
}

#[test]
fn triangle_closest_point_beats_samples() {
    let mut rng = StdRng::seed_from_u64(29);

    for _ in 0..200 {
        let (p0, p1, p2) = (
            random_point(&mut rng, 3.0),
            random_point(&mut rng, 3.0),
            random_point(&mut rng, 3.0),
        );
        let point = random_point(&mut rng, 6.0);
        let result = distance_to_triangle(&p0, &p1, &p2, &point);

        assert_relative_eq!((result.closest_point - point).norm(), result.distance, epsilon = 1e-12);

        for _ in 0..30 {
            let (mut u, mut v) = (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            if u + v > 1.0 {
                u = 1.0 - u;
                v = 1.0 - v;
            }
            let sample = p0 + (p1 - p0) * u + (p2 - p0) * v;
            assert!(result.distance <= (sample - point).norm() + 1e-9);
        }
    }
}

#[test]
fn easing_curves_are_pinned_at_the_ends() {
    for kind in EaseType::ALL {
        assert_eq!(ease(0.0, kind), 0.0);
        assert_eq!(ease(1.0, kind), 1.0);
    }
    assert_eq!(ease(0.5, EaseType::QuadraticInOut), 0.5);
    assert_eq!(ease(0.5, EaseType::CubicInOut), 0.5);
}
