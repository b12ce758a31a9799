//! Headless A* demo: loads an ASCII map, searches it, prints the result.
//!
//! Run: cargo run --bin astar -- [MAP_FILE] [--diagonal] [--chebyshev] [--max-steps N]
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow the search.

use gridstar_demos::{DEFAULT_MAP, DemoError, Options, run};
use gridstar_paths::SearchOutcome;

fn main() {
    env_logger::init();

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), DemoError> {
    let opts = Options::parse(std::env::args().skip(1))?;
    let text = match &opts.map {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_MAP.to_string(),
    };

    let report = run(&text, &opts)?;
    println!("{}", report.map);
    match report.outcome {
        SearchOutcome::Found(path) => {
            println!("Path found: {} steps, {} updates", path.len(), report.steps)
        }
        SearchOutcome::NotFound => println!("Could not find a path"),
        SearchOutcome::Cancelled => println!("Search stopped after {} updates", report.steps),
    }
    Ok(())
}
