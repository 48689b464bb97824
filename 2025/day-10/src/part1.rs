use miette::*;

use crate::error::SolveError;
use crate::machine::Machine;
use crate::options::SolveOptions;
use crate::parser;
use crate::solver::Solver;

/// Fewest presses lighting every machine's indicator pattern, summed.
/// Fails on the first machine whose pattern no button subset reaches.
pub fn total_presses(machines: &[Machine], options: SolveOptions) -> Result<usize, SolveError> {
    machines
        .iter()
        .enumerate()
        .try_fold(0, |total, (index, machine)| {
            let presses = Solver::with_options(machine, options)
                .configure()
                .ok_or_else(|| SolveError::UnreachableIndicators {
                    machine: index,
                    target: machine.target_indicators().to_string(),
                })?;
            Ok(total + presses)
        })
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with(input, SolveOptions::default())
}

pub fn process_with(input: &str, options: SolveOptions) -> Result<String> {
    let machines = parser::parse(input)?;
    let total = total_presses(&machines, options)?;
    Ok(total.to_string())
}
