use std::io::{BufRead, Write};

use tracing::debug;

use crate::core::ballistics::{LaunchConfig, velocity_at_height};
use crate::core::console::read_f64;
use crate::core::constants::{
    ANGLE_DECIMALS, COMPONENT_SIG_DIGITS, DIRECTION_PROMPT, MAGNITUDE_PROMPT, SPEED_DECIMALS,
};
use crate::core::error::Result;
use crate::core::format::general;
use crate::core::vector::{check_magnitude, decompose};

/// Writes the speed and direction at the configured height.
///
/// Nothing is written when the height can't be reached.
pub fn height_velocity<W: Write>(config: LaunchConfig, output: &mut W) -> Result<()> {
    let result = velocity_at_height(config)?;

    writeln!(
        output,
        "At a height of {} m, the final velocity is {:.*} m/s",
        result.height_m, SPEED_DECIMALS, result.speed_mps
    )?;
    writeln!(
        output,
        "at an angle of {:.*} degrees above horizontal.",
        ANGLE_DECIMALS,
        result.angle_deg()
    )?;
    Ok(())
}

/// Prompts for a magnitude and a direction, then writes the components.
///
/// The magnitude is validated before the direction is asked for.
pub fn vector_components<R, W>(input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let magnitude = check_magnitude(read_f64(input, output, MAGNITUDE_PROMPT)?)?;
    let angle_deg = read_f64(input, output, DIRECTION_PROMPT)?;
    debug!(magnitude, angle_deg, "vector inputs");

    let c = decompose(magnitude, angle_deg)?;
    writeln!(
        output,
        "=> The vector's components are ({}, {}).",
        general(c.x, COMPONENT_SIG_DIGITS),
        general(c.y, COMPONENT_SIG_DIGITS)
    )?;
    Ok(())
}
