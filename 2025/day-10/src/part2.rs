use indicatif::{ParallelProgressIterator, ProgressBar};
use miette::*;
use rayon::prelude::*;

use crate::error::SolveError;
use crate::machine::Machine;
use crate::options::SolveOptions;
use crate::parser;
use crate::solver::Solver;

/// Fewest presses matching every machine's joltage requirements, summed.
///
/// Machines are solved in parallel, ticking `progress` once per machine.
/// Fails on the lowest-indexed machine that cannot be matched.
pub fn total_presses(
    machines: &[Machine],
    options: SolveOptions,
    progress: &ProgressBar,
) -> Result<usize, SolveError> {
    let presses: Vec<(usize, Option<usize>)> = machines
        .par_iter()
        .enumerate()
        .progress_with(progress.clone())
        .map(|(index, machine)| (index, Solver::with_options(machine, options).set_joltage()))
        .collect();

    presses
        .into_iter()
        .try_fold(0, |total, (index, presses)| match presses {
            Some(presses) => Ok(total + presses),
            None => Err(SolveError::UnmatchedJoltage {
                machine: index,
                target: machines[index].target_joltage().to_string(),
            }),
        })
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with(input, SolveOptions::default())
}

pub fn process_with(input: &str, options: SolveOptions) -> Result<String> {
    let machines = parser::parse(input)?;
    let total = total_presses(&machines, options, &ProgressBar::hidden())?;
    Ok(total.to_string())
}
