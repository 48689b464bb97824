use std::rc::Rc;

use super::Solver;
use crate::machine::{Indicators, Joltage, Machine, PressSequence};

impl<'m> Solver<'m> {
    /// Minimum number of presses, repeats allowed, that brings every joltage
    /// counter from zero to the machine's requirement. `None` if impossible.
    pub fn set_joltage(&mut self) -> Option<usize> {
        self.joltage_presses().map(|presses| presses.len())
    }

    /// Shortest press sequence for the machine's joltage requirements.
    pub fn joltage_presses(&mut self) -> Option<PressSequence<'m>> {
        let machine: &'m Machine = self.machine;
        let presses = self.solve_joltage(machine.target_joltage());
        match &presses {
            Some(presses) => self.options.trace(0, || {
                format!("{machine}: {} presses {presses}", presses.len())
            }),
            None => self
                .options
                .trace(0, || format!("{machine}: joltage is unreachable")),
        }
        presses
    }

    /// Shortest press sequence producing exactly `goal`. An all-zero goal is
    /// solved by the empty sequence.
    pub fn solve_joltage(&mut self, goal: &Joltage) -> Option<PressSequence<'m>> {
        debug_assert_eq!(self.machine.width(), goal.width());
        self.solve_level(goal, 0)
    }

    fn solve_level(&mut self, goal: &Joltage, depth: usize) -> Option<PressSequence<'m>> {
        if goal.is_zero() {
            return Some(PressSequence::new());
        }
        if let Some(known) = self.joltage.get(goal) {
            return known.clone();
        }

        self.options.trace(depth, || format!("setting joltage {goal}"));
        let parity = goal.parity();
        let options = self.evening_options(parity);
        if options.is_empty() {
            self.options
                .trace(depth, || format!("cannot even out {goal} ({parity})"));
        }

        let mut best: Option<PressSequence<'m>> = None;
        for option in options.iter() {
            let mut residual = goal.clone();
            for button in option.iter() {
                residual.decrement(button);
            }
            if !residual.is_valid() {
                self.options
                    .trace(depth, || format!("discarding {option}: {residual} overshoots"));
                continue;
            }

            let half = residual.halve();
            let total = if half.is_zero() {
                option.clone()
            } else {
                self.options
                    .trace(depth, || format!("{option} leaves {residual}, recursing on {half}"));
                match self.solve_level(&half, depth + 1) {
                    Some(rest) => option.then_twice(&rest),
                    None => continue,
                }
            };

            if best.as_ref().is_none_or(|best| total.len() < best.len()) {
                self.options
                    .trace(depth, || format!("reached {goal} in {}", total.len()));
                best = Some(total);
            }
        }

        self.joltage.insert(goal.clone(), best.clone());
        best
    }

    /// Every way to press each button at most once so that exactly the lights
    /// in `parity` toggle. For an all-off pattern this includes pressing
    /// nothing, listed first.
    fn evening_options(&mut self, parity: Indicators) -> Rc<Vec<PressSequence<'m>>> {
        if let Some(options) = self.evening.get(&parity) {
            return Rc::clone(options);
        }

        let mut options = Vec::new();
        if parity.is_off() {
            options.push(PressSequence::new());
        }
        options.extend(self.find_all_configure_paths(Indicators::off(parity.width()), 0, parity));

        let options = Rc::new(options);
        self.evening.insert(parity, Rc::clone(&options));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SolveOptions;

    use itertools::Itertools;
    use rstest::rstest;

    fn machine(buttons: &[&[usize]], joltage: &[i64]) -> Machine {
        let lights = vec![false; joltage.len()];
        let buttons: Vec<Vec<usize>> = buttons.iter().map(|b| b.to_vec()).collect();
        Machine::new(&lights, &buttons, joltage.to_vec()).unwrap()
    }

    #[rstest]
    #[case(
        vec![vec![3], vec![1, 3], vec![2], vec![2, 3], vec![0, 2], vec![0, 1]],
        vec![3, 5, 4, 7],
        10
    )]
    #[case(
        vec![vec![0, 2, 3, 4], vec![2, 3], vec![0, 4], vec![0, 1, 2], vec![1, 2, 3, 4]],
        vec![7, 5, 12, 7, 2],
        12
    )]
    #[case(
        vec![vec![0, 1, 2, 3, 4], vec![0, 3, 4], vec![0, 1, 2, 4, 5], vec![1, 2]],
        vec![10, 11, 11, 5, 10, 5],
        11
    )]
    #[case(vec![vec![0, 1]], vec![2, 2], 2)]
    #[case(vec![vec![0], vec![1]], vec![5, 3], 8)]
    #[case(vec![vec![0, 1], vec![1, 2], vec![0, 2]], vec![2, 2, 2], 3)]
    fn sets_joltage_with_fewest_presses(
        #[case] buttons: Vec<Vec<usize>>,
        #[case] joltage: Vec<i64>,
        #[case] expected: usize,
    ) {
        let buttons: Vec<&[usize]> = buttons.iter().map(Vec::as_slice).collect();
        let m = machine(&buttons, &joltage);
        let mut solver = Solver::new(&m);
        let presses = solver.joltage_presses().unwrap();
        assert_eq!(expected, presses.len());
        assert!(m.replay_joltage(&presses));
    }

    #[test]
    fn zero_joltage_needs_no_presses() {
        let m = machine(&[&[0, 1], &[1]], &[0, 0]);
        assert_eq!(Some(0), Solver::new(&m).set_joltage());
    }

    #[test]
    fn unmatched_joltage_is_none_not_zero() {
        // Every press bumps both counters equally.
        let m = machine(&[&[0, 1]], &[2, 1]);
        assert_eq!(None, Solver::with_options(&m, SolveOptions::debug()).set_joltage());

        let m = machine(&[&[0]], &[1, 1]);
        assert_eq!(None, Solver::new(&m).set_joltage());
    }

    #[test]
    fn doubling_back_presses_the_half_twice() {
        // {2,2}: already even, halve to {1,1}, press (0,1) once, then twice on the way back.
        let m = machine(&[&[0, 1]], &[2, 2]);
        let presses = Solver::new(&m).joltage_presses().unwrap();
        assert_eq!("[(0,1) (0,1)]", presses.to_string());
    }

    #[test]
    fn overshooting_candidates_are_discarded() {
        // (0,1) and (1) together also even out {1,0}, but drive counter 1 to -2.
        let m = machine(&[&[0, 1], &[1], &[0]], &[1, 0]);
        let presses = Solver::new(&m).joltage_presses().unwrap();
        assert_eq!("[(0)]", presses.to_string());
        assert!(m.replay_joltage(&presses));
    }

    #[test]
    fn no_cheaper_sequence_exists() {
        // Exhaustively try every press count vector up to 6 presses per button.
        let m = machine(&[&[0, 2], &[1], &[0, 1], &[2]], &[5, 4, 3]);
        let best = Solver::new(&m).set_joltage().unwrap();

        let buttons = m.buttons();
        let mut cheapest = usize::MAX;
        for counts in (0..buttons.len())
            .map(|_| 0..=6usize)
            .multi_cartesian_product()
        {
            let mut joltage = Joltage::zeros(m.width());
            for (button, &count) in buttons.iter().zip(&counts) {
                for _ in 0..count {
                    joltage.increment(button);
                }
            }
            if &joltage == m.target_joltage() {
                cheapest = cheapest.min(counts.iter().sum());
            }
        }
        assert_eq!(cheapest, best);
    }

    #[test]
    fn solver_is_reusable() {
        let m = machine(&[&[0], &[1], &[0, 1]], &[4, 6]);
        let mut solver = Solver::new(&m);
        assert_eq!(Some(6), solver.set_joltage());
        assert_eq!(Some(6), solver.set_joltage());
        assert_eq!(Some(3), solver.solve_joltage(&Joltage::from(vec![1, 3])).map(|p| p.len()));
    }
}
