pub mod ballistics;
pub mod console;
pub mod constants;
pub mod error;
pub mod format;
pub mod logging;
pub mod report;
pub mod vector;

pub use error::{KinematicsError, Result};
