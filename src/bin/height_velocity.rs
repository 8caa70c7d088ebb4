use std::io;

use kinematics_recipes::core::ballistics::LaunchConfig;
use kinematics_recipes::core::{logging, report};

fn run() -> kinematics_recipes::core::Result<()> {
    let stdout = io::stdout();
    report::height_velocity(LaunchConfig::default(), &mut stdout.lock())
}

fn main() {
    logging::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
