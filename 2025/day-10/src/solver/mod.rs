//! Press-count solvers for a single [`Machine`].
//!
//! Indicator configuration enumerates button subsets ([`Solver::configure`]).
//! Joltage matching ([`Solver::set_joltage`]) reduces the counter vector by
//! parity: press a subset of buttons once to make every counter even, halve
//! the rest, solve that recursively and press its answer twice.

mod joltage;
mod reachability;

use std::collections::HashMap;
use std::rc::Rc;

use crate::machine::{Indicators, Joltage, Machine, PressSequence};
use crate::options::SolveOptions;

/// Solver state for one machine. Memo tables live as long as the solver, so
/// reuse it when asking several questions about the same machine.
pub struct Solver<'m> {
    machine: &'m Machine,
    options: SolveOptions,
    /// Every button subset toggling exactly a parity pattern.
    evening: HashMap<Indicators, Rc<Vec<PressSequence<'m>>>>,
    /// Shortest press sequence per joltage goal, `None` when unreachable.
    joltage: HashMap<Joltage, Option<PressSequence<'m>>>,
}

impl<'m> Solver<'m> {
    pub fn new(machine: &'m Machine) -> Self {
        Self::with_options(machine, SolveOptions::default())
    }

    pub fn with_options(machine: &'m Machine, options: SolveOptions) -> Self {
        Self {
            machine,
            options,
            evening: HashMap::new(),
            joltage: HashMap::new(),
        }
    }
}
