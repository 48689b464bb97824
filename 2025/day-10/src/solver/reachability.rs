use super::Solver;
use crate::machine::{Button, Indicators, Machine, PressSequence};

impl<'m> Solver<'m> {
    /// Finds every subset of the buttons from `button_index` on whose combined
    /// toggles turn `start` into `goal`. Each button is pressed at most once;
    /// buttons appear in descending index order.
    ///
    /// This is a plain exhaustive search over `2^(n - button_index)` subsets
    /// with no pruning, so it is only practical for machines with a couple of
    /// dozen buttons at most. The empty subset is never reported, even when
    /// `start == goal`.
    pub fn find_all_configure_paths(
        &self,
        start: Indicators,
        button_index: usize,
        goal: Indicators,
    ) -> Vec<PressSequence<'m>> {
        let machine: &'m Machine = self.machine;
        let buttons: &'m [Button] = machine.buttons();
        let Some(button) = buttons.get(button_index) else {
            return Vec::new();
        };

        let depth = button_index;
        self.options
            .trace(depth, || format!("button {button}: state={start}, goal={goal}"));

        let pressed = start.press(button);
        let mut paths = Vec::new();
        if pressed == goal {
            self.options.trace(depth, || format!("-> {pressed} is the goal"));
            paths.push(std::iter::once(button).collect::<PressSequence>());
        }

        let next = button_index + 1;
        if next < buttons.len() {
            for mut path in self.find_all_configure_paths(pressed, next, goal) {
                path.push(button);
                paths.push(path);
            }

            self.options
                .trace(depth, || format!("not pressing {button}: state={start}"));
            paths.extend(self.find_all_configure_paths(start, next, goal));
        }

        if paths.is_empty() {
            self.options.trace(depth, || "-> no solution".to_string());
        }
        paths
    }

    /// Shortest way to light the machine's target pattern from all-off.
    ///
    /// `Some(empty)` when the target is already all-off, `None` when no subset
    /// of buttons reaches it.
    pub fn configure_presses(&self) -> Option<PressSequence<'m>> {
        let target = self.machine.target_indicators();
        if target.is_off() {
            return Some(PressSequence::new());
        }

        let off = Indicators::off(self.machine.width());
        let shortest = self
            .find_all_configure_paths(off, 0, target)
            .into_iter()
            .min_by_key(PressSequence::len);

        match &shortest {
            Some(presses) => self.options.trace(0, || {
                format!("{}: {} presses {presses}", self.machine, presses.len())
            }),
            None => self
                .options
                .trace(0, || format!("{}: {target} is unreachable", self.machine)),
        }
        shortest
    }

    /// Minimum number of presses for [`Solver::configure_presses`].
    pub fn configure(&self) -> Option<usize> {
        self.configure_presses().map(|presses| presses.len())
    }
}
