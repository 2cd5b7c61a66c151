//! graphparse CLI - transpose `output.csv` into `graph.csv`
//!
//! ```bash
//! graphparse            # Reformat ./output.csv into ./graph.csv
//! graphparse --quiet    # Same, errors only
//! ```

use clap::Parser;
use graphparse::logs::{self, log_error, LogLevel};
use graphparse::parse_graph;

#[derive(Parser)]
#[command(name = "graphparse", version)]
#[command(
    about = "Lay the locale blocks of output.csv side by side in graph.csv",
    long_about = None
)]
struct Cli {
    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    logs::init(if cli.quiet { LogLevel::Error } else { LogLevel::Info });

    if let Err(e) = parse_graph() {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
