/// Knobs for a [`crate::solver::Solver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Emit a `debug` event for every node of the button search and every
    /// joltage candidate. Very verbose: the search is exponential in the
    /// number of buttons.
    pub debug: bool,
}

impl SolveOptions {
    pub fn debug() -> Self {
        Self { debug: true }
    }

    /// Logs `message` indented by `depth` when tracing is enabled.
    /// The message is only built when it will be emitted.
    pub(crate) fn trace(&self, depth: usize, message: impl FnOnce() -> String) {
        if self.debug {
            let prefix = "  ".repeat(depth);
            tracing::debug!("{prefix}{}", message());
        }
    }
}
