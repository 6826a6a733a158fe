//! CLI entry point for the edge-socket tile grid generator

use clap::Parser;
use tilecollapse::io::cli::{Cli, Runner};

fn main() -> tilecollapse::Result<()> {
    let cli = Cli::parse();
    Runner::new(cli).run().map(|_| ())
}
