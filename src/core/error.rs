use std::io;
use std::num::ParseFloatError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KinematicsError>;

#[derive(Error, Debug)]
pub enum KinematicsError {
    #[error("The magnitude must be non-negative!")]
    NegativeMagnitude { magnitude: f64 },

    #[error("could not convert string to float: '{input}'")]
    Parse {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error(
        "Height of {height_m} m is unreachable: vy0^2 ({launch_vy_sq}) is less than 2*g*h ({required})"
    )]
    UnreachableHeight {
        height_m: f64,
        launch_vy_sq: f64,
        required: f64,
    },

    #[error("math domain error: a direction of {angle_deg} degrees has no components")]
    InfiniteAngle { angle_deg: f64 },

    #[error("Inputs must be finite numbers ({name} is not).")]
    NonFinite { name: &'static str },

    #[error("Input ended unexpectedly (EOF).")]
    UnexpectedEof,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
