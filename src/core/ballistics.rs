use tracing::debug;

use crate::core::constants::{GRAVITY_MPS2, LAUNCH_ANGLE_DEG, LAUNCH_SPEED_MPS, TARGET_HEIGHT_M};
use crate::core::error::{KinematicsError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchConfig {
    pub gravity_mps2: f64,
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub height_m: f64,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            gravity_mps2: GRAVITY_MPS2,
            speed_mps: LAUNCH_SPEED_MPS,
            angle_deg: LAUNCH_ANGLE_DEG,
            height_m: TARGET_HEIGHT_M,
        }
    }
}

/// Velocity of the projectile as it passes through `height_m` on the way up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightVelocity {
    pub height_m: f64,
    pub vx: f64,
    pub vy: f64,
    pub speed_mps: f64,
    /// Above horizontal.
    pub angle_rad: f64,
}

impl HeightVelocity {
    pub fn angle_deg(&self) -> f64 {
        self.angle_rad.to_degrees()
    }
}

pub fn velocity_components(config: LaunchConfig) -> (f64, f64) {
    let theta = config.angle_deg.to_radians();
    let vx = config.speed_mps * theta.cos();
    let vy = config.speed_mps * theta.sin();
    (vx, vy)
}

/// Apex height `v0y^2 / 2g` measured from the launch point.
pub fn max_height(config: LaunchConfig) -> f64 {
    let (_, vy) = velocity_components(config);
    (vy * vy) / (2.0 * config.gravity_mps2)
}

fn ensure_finite(config: LaunchConfig) -> Result<()> {
    let fields = [
        ("gravity", config.gravity_mps2),
        ("speed", config.speed_mps),
        ("angle", config.angle_deg),
        ("height", config.height_m),
    ];
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some(&(name, _)) => Err(KinematicsError::NonFinite { name }),
        None => Ok(()),
    }
}

pub fn velocity_at_height(config: LaunchConfig) -> Result<HeightVelocity> {
    ensure_finite(config)?;

    let (v0x, v0y) = velocity_components(config);
    debug!(v0x, v0y, "launch velocity components");

    // Energy conservation on the vertical axis: vy^2 = v0y^2 - 2*g*h
    let launch_vy_sq = v0y * v0y;
    let required = 2.0 * config.gravity_mps2 * config.height_m;
    let vy_sq = launch_vy_sq - required;
    if vy_sq < 0.0 {
        return Err(KinematicsError::UnreachableHeight {
            height_m: config.height_m,
            launch_vy_sq,
            required,
        });
    }

    let vx = v0x;
    let vy = vy_sq.sqrt();
    let speed_mps = vx.hypot(vy);
    let angle_rad = vy.atan2(vx);
    debug!(vx, vy, speed_mps, angle_rad, "velocity at height");

    Ok(HeightVelocity {
        height_m: config.height_m,
        vx,
        vy,
        speed_mps,
        angle_rad,
    })
}
