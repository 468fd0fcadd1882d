//! Vectis playground — exercises the vector operations with tracing output.
//!
//! Usage:
//! ```text
//! cargo run --example playground
//! RUST_LOG=debug cargo run --example playground
//! ```

use std::f32::consts::FRAC_PI_4;

use tracing::info;
use vectis::math::{vector2, vector3};
use vectis::{Vector2, Vector3};

fn main() -> vectis::Result<()> {
    // Default: INFO for everything. Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let a = Vector2::new(3.0, 4.0);
    let b = Vector2::from_angle(FRAC_PI_4);
    info!(%a, %b, magnitude = a.magnitude(), "2d inputs");
    info!(
        heading = a.heading(),
        angle = vector2::angle_between(a, b),
        "2d angles"
    );
    info!(
        reflected = %a.reflect(Vector2::UNIT_Y),
        limited = %a.limit(2.5),
        "2d shaping"
    );

    let half = a.divide(2.0)?;
    info!(%half, "scalar division");

    let v = Vector3::from(a);
    let spun = v.rotate(0.3, 0.5, 0.7);
    let rolled = v.roll_pitch_yaw(0.7, 0.5, 0.3);
    info!(%v, %spun, %rolled, "3d rotation variants");
    info!(
        cross = %v.cross(Vector3::UNIT_Z),
        toward = %vector3::lerp(v, Vector3::ZERO, 0.25),
        "3d combinators"
    );

    Ok(())
}
