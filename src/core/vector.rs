use tracing::debug;

use crate::core::error::{KinematicsError, Result};

/// Cartesian components of a unit-less 2D vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components {
    pub x: f64,
    pub y: f64,
}

impl Components {
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction in degrees CCW from +x, normalized to `[0, 360)`.
    pub fn direction_deg(&self) -> f64 {
        let deg = self.y.atan2(self.x).to_degrees().rem_euclid(360.0);
        // rem_euclid can round a tiny negative angle up to exactly 360
        if deg >= 360.0 { 0.0 } else { deg }
    }
}

/// NaN fails too, since it is not `>= 0`.
pub fn check_magnitude(magnitude: f64) -> Result<f64> {
    if magnitude >= 0.0 {
        Ok(magnitude)
    } else {
        Err(KinematicsError::NegativeMagnitude { magnitude })
    }
}

/// NaN angles pass through and yield NaN components; infinite ones are a
/// domain error.
pub fn decompose(magnitude: f64, angle_deg: f64) -> Result<Components> {
    let magnitude = check_magnitude(magnitude)?;
    if angle_deg.is_infinite() {
        return Err(KinematicsError::InfiniteAngle { angle_deg });
    }
    let theta = angle_deg.to_radians();
    let components = Components {
        x: magnitude * theta.cos(),
        y: magnitude * theta.sin(),
    };
    debug!(magnitude, angle_deg, x = components.x, y = components.y, "decomposed vector");
    Ok(components)
}
