use miette::Diagnostic;
use thiserror::Error;

use crate::machine::MAX_WIDTH;

#[derive(Debug, Error, Diagnostic)]
#[error("failed to parse machine list: {message}")]
#[diagnostic(code(day10::parse_error))]
pub struct ParseError {
    pub message: String,
}

/// Inconsistent machine descriptions. Raised while assembling a [`crate::machine::Machine`].
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum MachineError {
    #[error("machine has no indicator lights")]
    #[diagnostic(code(day10::empty_machine))]
    Empty,

    #[error("can only handle {MAX_WIDTH} indicator lights, but found {0}")]
    #[diagnostic(code(day10::too_wide))]
    TooWide(usize),

    #[error("machine has {indicators} indicator lights but {counters} joltage counters")]
    #[diagnostic(code(day10::width_mismatch))]
    WidthMismatch { indicators: usize, counters: usize },

    #[error("button #{button} toggles light {position}, but only {width} lights exist")]
    #[diagnostic(code(day10::button_out_of_range))]
    ButtonOutOfRange {
        button: usize,
        position: usize,
        width: usize,
    },
}

/// A machine for which no press sequence exists.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum SolveError {
    #[error("machine {machine} cannot reach indicator pattern {target}")]
    #[diagnostic(
        code(day10::unreachable_indicators),
        help("no subset of the machine's buttons toggles exactly these lights")
    )]
    UnreachableIndicators { machine: usize, target: String },

    #[error("machine {machine} cannot match joltage requirements {target}")]
    #[diagnostic(code(day10::unmatched_joltage))]
    UnmatchedJoltage { machine: usize, target: String },
}
