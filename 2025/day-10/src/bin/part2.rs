use clap::Parser;
use miette::*;

use aoc2025_day_10::{cli::Args, part2};

fn main() -> Result<()> {
    let args = Args::parse();
    args.init_tracing();
    let input = args.read_input()?;
    let result = part2::process_with(&input, args.options())?;
    println!("Result: {}", result);
    Ok(())
}
