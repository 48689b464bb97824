use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use miette::*;

use aoc2025_day_10::timing::{format_duration, timed};
use aoc2025_day_10::{cli::Args, parser, part1, part2};

fn main() -> Result<()> {
    let args = Args::parse();
    args.init_tracing();
    let options = args.options();
    let input = args.read_input()?;

    tracing::info!("===== PARSING =====");
    let (machines, parsing) = timed(|| parser::parse(&input));
    let machines = machines?;
    println!("Parsed input in {}", format_duration(parsing));

    tracing::info!("===== PART 1 =====");
    let (part1_solution, duration1) = timed(|| part1::total_presses(&machines, options));

    tracing::info!("===== PART 2 =====");
    let progress = ProgressBar::new(machines.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} machines ({elapsed})")
            .into_diagnostic()?,
    );
    let (part2_solution, duration2) =
        timed(|| part2::total_presses(&machines, options, &progress));
    progress.finish_and_clear();

    println!("Part 1: {}", part1_solution?);
    println!("  in {}", format_duration(duration1));
    println!("Part 2: {}", part2_solution?);
    println!("  in {}", format_duration(duration2));
    Ok(())
}
