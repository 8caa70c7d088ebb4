use std::io;

use kinematics_recipes::core::{logging, report};

fn run() -> kinematics_recipes::core::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    report::vector_components(&mut stdin.lock(), &mut stdout.lock())
}

fn main() {
    logging::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
