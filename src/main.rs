//! CLI entry point for the depth-first maze generator

use clap::Parser;
use mazecarver::io::cli::{Cli, MazeRunner};

fn main() -> mazecarver::Result<()> {
    let cli = Cli::parse();
    let mut runner = MazeRunner::new(cli);
    runner.run()
}
