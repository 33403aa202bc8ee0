//! Picking Demo
//!
//! Snaps random cursor rays onto a small terrain mesh, finds the nearest
//! point on an oriented selection box, and fits a sphere of fixed radius
//! through each picked triangle, the way a measurement tool would.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use nalgebra::{Point3, UnitQuaternion, Vector3};
use rand::prelude::*;
use rand::rngs::StdRng;
use viewgeom_algorithms::{closest_point_on_mesh, closest_point_on_oobb, sphere_center_from_points};
use viewgeom_core::{Bounded, Transform3D, TriangleMesh};

#[derive(Parser, Debug)]
#[command(name = "pick_demo", version, about = "Closest-point picking against a terrain mesh")]
struct Args {
    /// Number of pick queries
    #[arg(long, default_value_t = 10)]
    picks: usize,

    /// Seed for the query generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Terrain grid resolution per side
    #[arg(long, default_value_t = 16)]
    grid: usize,

    /// Radius of the measurement sphere
    #[arg(long, default_value_t = 2.0)]
    radius: f64,
}

/// Gently rolling height field over `[0, grid]^2`
fn terrain(grid: usize) -> TriangleMesh<f64> {
    let side = grid + 1;
    let vertices = (0..side * side)
        .map(|i| {
            let (x, y) = ((i % side) as f64, (i / side) as f64);
            Point3::new(x, y, (x * 0.4).sin() * (y * 0.3).cos())
        })
        .collect();

    let mut faces = Vec::with_capacity(grid * grid * 2);
    for row in 0..grid {
        for col in 0..grid {
            let i = row * side + col;
            faces.push([i, i + 1, i + side + 1]);
            faces.push([i, i + side + 1, i + side]);
        }
    }

    TriangleMesh::from_vertices_and_faces(vertices, faces)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mesh = terrain(args.grid.max(1));
    mesh.validate().context("terrain mesh is malformed")?;
    let bounds = mesh.bounding_box().context("terrain mesh has no vertices")?;
    info!(
        "Terrain: {} vertices, {} faces, bounds {:?} to {:?}",
        mesh.vertex_count(),
        mesh.face_count(),
        bounds.min,
        bounds.max
    );

    // A tilted selection box over the middle of the terrain
    let center = bounds.center();
    let selection = Transform3D::from_parts(
        Point3::new(center.x - 2.0, center.y - 2.0, -1.0),
        Vector3::new(4.0, 4.0, 2.0),
        UnitQuaternion::from_euler_angles(0.0, 0.0, 0.5),
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let size = bounds.size();

    for pick in 0..args.picks {
        let cursor = Point3::new(
            bounds.min.x + rng.gen_range(0.0..1.0) * size.x,
            bounds.min.y + rng.gen_range(0.0..1.0) * size.y,
            rng.gen_range(2.0..6.0),
        );

        let Some(hit) = closest_point_on_mesh(&mesh, &cursor) else {
            warn!("pick {}: mesh has no usable faces", pick);
            continue;
        };
        info!(
            "pick {}: face {} at {:.3?}, {:.3} away",
            pick, hit.face, hit.closest_point, hit.distance
        );

        let snapped = closest_point_on_oobb(&hit.closest_point, &selection.matrix);
        debug!(
            "  selection box point {:.3?} ({:.3} from surface)",
            snapped,
            (snapped - hit.closest_point).norm()
        );

        let Some(triangle) = mesh.triangle(hit.face) else {
            continue;
        };
        match sphere_center_from_points(args.radius, &triangle.p0, &triangle.p1, &triangle.p2) {
            Some(sphere) => debug!("  r={} sphere through face centered at {:.3?}", args.radius, sphere),
            None => warn!("  face {} does not fit in a sphere of radius {}", hit.face, args.radius),
        }
    }

    Ok(())
}
