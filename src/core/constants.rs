pub const GRAVITY_MPS2: f64 = 9.806; // N/kg, local value

pub const TARGET_HEIGHT_M: f64 = 10.0;
pub const LAUNCH_SPEED_MPS: f64 = 20.0;
pub const LAUNCH_ANGLE_DEG: f64 = 50.0;

pub const MAGNITUDE_PROMPT: &str = "Vector's magnitude (without units): ";
pub const DIRECTION_PROMPT: &str = "Vector's direction (in degrees CCW from +x axis): ";

pub const SPEED_DECIMALS: usize = 2;
pub const ANGLE_DECIMALS: usize = 2;
pub const COMPONENT_SIG_DIGITS: usize = 3;
