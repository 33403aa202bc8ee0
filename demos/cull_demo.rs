//! Frustum Culling Demo
//!
//! Scatters random bounding boxes around an orbiting camera and classifies
//! them the way a renderer's culling pass does each frame: outside boxes
//! are skipped, inside boxes drawn as-is, straddling boxes recursed into.
//!
//! Run with `RUST_LOG=debug` to see every classification.

use anyhow::{ensure, Result};
use clap::Parser;
use log::{debug, info};
use nalgebra::{Matrix4, Perspective3, Point3, Vector3};
use rand::prelude::*;
use rand::rngs::StdRng;
use viewgeom_algorithms::{classify_aabb, clamp_wrap, cull, ease_lerp, EaseType, FrustumClass};
use viewgeom_core::{Aabb, Frustum};

#[derive(Parser, Debug)]
#[command(name = "cull_demo", version, about = "Classify random bounds against an orbiting camera")]
struct Args {
    /// Number of bounding boxes to scatter
    #[arg(long, default_value_t = 2000)]
    bounds: usize,

    /// Seed for the scene generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Half-size of the cube the boxes are scattered in
    #[arg(long, default_value_t = 50.0)]
    spread: f32,

    /// Number of frames for one camera sweep
    #[arg(long, default_value_t = 8)]
    frames: u32,

    /// Easing curve for the camera heading
    #[arg(long, default_value_t = EaseType::CubicInOut)]
    ease: EaseType,
}

fn scatter_bounds(rng: &mut StdRng, count: usize, spread: f32) -> Vec<Aabb<f32>> {
    (0..count)
        .map(|_| {
            let center = Point3::new(
                rng.gen_range(-spread..spread),
                rng.gen_range(-spread..spread),
                rng.gen_range(-spread..spread),
            );
            let extents = Vector3::new(rng.gen_range(0.1..2.0), rng.gen_range(0.1..2.0), rng.gen_range(0.1..2.0));
            Aabb::from_center_extents(center, extents)
        })
        .collect()
}

fn camera_frustum(heading_degrees: f32) -> Frustum<f32> {
    let heading = heading_degrees.to_radians();
    let eye = Point3::new(0.0, 5.0, 0.0);
    let target = eye + Vector3::new(heading.sin(), 0.0, -heading.cos());

    let projection = Perspective3::new(16.0 / 9.0, std::f32::consts::FRAC_PI_3, 0.1, 80.0);
    let view = Matrix4::look_at_rh(&eye, &target, &Vector3::y());
    Frustum::from_view_projection(&(projection.into_inner() * view))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.frames > 0, "--frames must be at least 1");
    ensure!(args.spread > 0.0, "--spread must be positive");

    let mut rng = StdRng::seed_from_u64(args.seed);
    let bounds = scatter_bounds(&mut rng, args.bounds, args.spread);
    info!("Scattered {} bounds within ±{}", bounds.len(), args.spread);

    // Sweep from due north through a full turn and a half; headings wrap
    for frame in 0..=args.frames {
        let progress = frame as f32 / args.frames as f32;
        let raw_heading = ease_lerp(0.0, 540.0, progress, args.ease);
        let heading = clamp_wrap(raw_heading, -180.0, 180.0);
        let frustum = camera_frustum(heading);

        let report = cull(&frustum, &bounds);
        info!(
            "frame {:>3} heading {:>7.2}°: {} inside, {} partial, {} culled",
            frame, heading, report.inside, report.partial, report.culled
        );

        for (index, class) in &report.visible {
            if let FrustumClass::Partial(mask) = class {
                debug!(
                    "  bound {} straddles planes {:?}",
                    index,
                    mask.iter().collect::<Vec<_>>()
                );
            }
        }

        debug_assert_eq!(report.inside + report.partial + report.culled, bounds.len());
        debug_assert!(report
            .visible
            .iter()
            .all(|(index, class)| classify_aabb(&frustum, &bounds[*index]) == *class));
    }

    Ok(())
}
