use std::fmt;

use bitvec::prelude::*;
use itertools::Itertools;

use crate::error::MachineError;

/// Indicator patterns and button masks are stored in a single `u64` word.
pub const MAX_WIDTH: usize = u64::BITS as usize;

/// A button toggles a fixed set of indicator lights, or bumps the matching
/// joltage counters by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Button {
    mask: u64,
    width: usize,
}

impl Button {
    /// Callers guarantee every position is below `width`.
    fn from_positions(positions: &[usize], width: usize) -> Self {
        let mut mask = 0u64;
        let bits = mask.view_bits_mut::<Lsb0>();
        for &position in positions {
            bits.set(position, true);
        }
        Self { mask, width }
    }

    /// Positions toggled by this button, ascending.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask.view_bits::<Lsb0>()[..self.width].iter_ones()
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.positions().join(","))
    }
}

/// On/off state of a machine's indicator lights. Bit `i` is light `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indicators {
    value: u64,
    width: usize,
}

impl Indicators {
    /// All lights off.
    pub fn off(width: usize) -> Self {
        Self { value: 0, width }
    }

    pub fn from_lights(lights: &[bool]) -> Self {
        let mut value = 0u64;
        let bits = value.view_bits_mut::<Lsb0>();
        for (i, &lit) in lights.iter().enumerate() {
            bits.set(i, lit);
        }
        Self {
            value,
            width: lights.len(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_off(&self) -> bool {
        self.value == 0
    }

    pub fn is_lit(&self, position: usize) -> bool {
        position < self.width && self.value.view_bits::<Lsb0>()[position]
    }

    /// State after pressing `button` once.
    pub fn press(self, button: &Button) -> Self {
        Self {
            value: self.value ^ button.mask,
            width: self.width,
        }
    }

    /// State after pressing every button of `presses` once, in order.
    pub fn apply(self, presses: &PressSequence<'_>) -> Self {
        presses.iter().fold(self, |state, button| state.press(button))
    }
}

impl fmt::Display for Indicators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lights: String = self.value.view_bits::<Lsb0>()[..self.width]
            .iter()
            .map(|lit| if *lit { '#' } else { '.' })
            .collect();
        write!(f, "[{lights}]")
    }
}

/// Per-light joltage counters.
///
/// Counters are signed so a candidate that overshoots can be detected with
/// [`Joltage::is_valid`] after the fact rather than underflowing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Joltage(Vec<i64>);

impl Joltage {
    pub fn zeros(width: usize) -> Self {
        Self(vec![0; width])
    }

    pub fn counters(&self) -> &[i64] {
        &self.0
    }

    pub fn width(&self) -> usize {
        self.0.len()
    }

    pub fn increment(&mut self, button: &Button) {
        for position in button.positions() {
            self.0[position] += 1;
        }
    }

    pub fn decrement(&mut self, button: &Button) {
        for position in button.positions() {
            self.0[position] -= 1;
        }
    }

    /// No counter has gone negative.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|&counter| counter >= 0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&counter| counter == 0)
    }

    /// Lights that would have to be on for every counter to become even.
    pub fn parity(&self) -> Indicators {
        let lights: Vec<bool> = self.0.iter().map(|counter| counter % 2 != 0).collect();
        Indicators::from_lights(&lights)
    }

    /// Halves every counter.
    ///
    /// # Panics
    ///
    /// Panics if any counter is odd; the evening phase must have cleared every
    /// odd counter before halving.
    pub fn halve(&self) -> Self {
        Self(
            self.0
                .iter()
                .enumerate()
                .map(|(position, &counter)| {
                    assert!(
                        counter % 2 == 0,
                        "joltage counter {position} is odd ({counter}) after evening {self}"
                    );
                    counter / 2
                })
                .collect(),
        )
    }
}

impl From<Vec<i64>> for Joltage {
    fn from(counters: Vec<i64>) -> Self {
        Self(counters)
    }
}

impl fmt::Display for Joltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(","))
    }
}

/// Buttons pressed to solve a machine. Its length is the press count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressSequence<'m>(Vec<&'m Button>);

impl<'m> PressSequence<'m> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'m Button> + '_ {
        self.0.iter().copied()
    }

    pub fn push(&mut self, button: &'m Button) {
        self.0.push(button);
    }

    /// `self` followed by two copies of `half`: pressing `half` twice doubles
    /// the counters it produces.
    pub fn then_twice(&self, half: &Self) -> Self {
        let mut presses = Vec::with_capacity(self.len() + 2 * half.len());
        presses.extend_from_slice(&self.0);
        presses.extend_from_slice(&half.0);
        presses.extend_from_slice(&half.0);
        Self(presses)
    }
}

impl<'m> FromIterator<&'m Button> for PressSequence<'m> {
    fn from_iter<T: IntoIterator<Item = &'m Button>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for PressSequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    target_indicators: Indicators,
    buttons: Vec<Button>,
    target_joltage: Joltage,
}

impl Machine {
    /// Assembles a machine from its parsed parts, checking that lights, buttons
    /// and joltage counters agree on the width.
    pub fn new(
        lights: &[bool],
        buttons: &[Vec<usize>],
        joltage: Vec<i64>,
    ) -> Result<Self, MachineError> {
        let width = lights.len();
        if width == 0 {
            return Err(MachineError::Empty);
        }
        if width > MAX_WIDTH {
            return Err(MachineError::TooWide(width));
        }
        if joltage.len() != width {
            return Err(MachineError::WidthMismatch {
                indicators: width,
                counters: joltage.len(),
            });
        }

        let buttons = buttons
            .iter()
            .enumerate()
            .map(|(button, positions)| {
                match positions.iter().find(|&&position| position >= width) {
                    Some(&position) => Err(MachineError::ButtonOutOfRange {
                        button,
                        position,
                        width,
                    }),
                    None => Ok(Button::from_positions(positions, width)),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            target_indicators: Indicators::from_lights(lights),
            buttons,
            target_joltage: Joltage::from(joltage),
        })
    }

    pub fn width(&self) -> usize {
        self.target_indicators.width
    }

    pub fn target_indicators(&self) -> Indicators {
        self.target_indicators
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn target_joltage(&self) -> &Joltage {
        &self.target_joltage
    }

    /// Replays `presses` from zeroed counters and checks the result against
    /// the machine's joltage requirements.
    pub fn replay_joltage(&self, presses: &PressSequence<'_>) -> bool {
        let mut joltage = Joltage::zeros(self.width());
        for button in presses.iter() {
            joltage.increment(button);
        }

        if joltage == self.target_joltage {
            tracing::debug!("{self}: verified {} presses", presses.len());
            true
        } else {
            tracing::warn!(
                "{self}: failed to verify {} presses {presses}, got {joltage}",
                presses.len()
            );
            false
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_indicators)?;
        for button in &self.buttons {
            write!(f, " {button}")?;
        }
        write!(f, " {}", self.target_joltage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn machine() -> Machine {
        Machine::new(
            &[false, true, true, false],
            &[vec![3], vec![1, 3], vec![2], vec![2, 3], vec![0, 2], vec![0, 1]],
            vec![3, 5, 4, 7],
        )
        .unwrap()
    }

    #[test]
    fn displays_as_input_line() {
        assert_eq!(
            "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}",
            machine().to_string()
        );
    }

    #[test]
    fn pressing_toggles_lights() {
        let m = machine();
        let state = Indicators::off(4)
            .press(&m.buttons()[4])
            .press(&m.buttons()[5]);
        assert_eq!("[.##.]", state.to_string());
        assert_eq!(m.target_indicators(), state);
        assert!(state.is_lit(1));
        assert!(!state.is_lit(0));
        assert!(!state.is_lit(9));

        let back = state.press(&m.buttons()[5]).press(&m.buttons()[4]);
        assert!(back.is_off());
    }

    #[test]
    fn apply_folds_presses() {
        let m = machine();
        let presses: PressSequence = [&m.buttons()[0], &m.buttons()[1], &m.buttons()[2]]
            .into_iter()
            .collect();
        assert_eq!(m.target_indicators(), Indicators::off(4).apply(&presses));
    }

    #[test]
    fn joltage_counts_presses() {
        let m = machine();
        let mut joltage = Joltage::zeros(4);
        joltage.increment(&m.buttons()[1]);
        joltage.increment(&m.buttons()[1]);
        joltage.increment(&m.buttons()[4]);
        assert_eq!(&[1, 2, 1, 2], joltage.counters());

        joltage.decrement(&m.buttons()[2]);
        joltage.decrement(&m.buttons()[2]);
        assert_eq!(&[1, 2, -1, 2], joltage.counters());
        assert!(!joltage.is_valid());
    }

    #[rstest]
    #[case(vec![3, 5, 4, 7], "[##.#]")]
    #[case(vec![2, 0, 4, 8], "[....]")]
    #[case(vec![1, 1, 1, 1], "[####]")]
    fn parity_marks_odd_counters(#[case] counters: Vec<i64>, #[case] expected: &str) {
        assert_eq!(expected, Joltage::from(counters).parity().to_string());
    }

    #[test]
    fn halve_divides_even_counters() {
        let halved = Joltage::from(vec![2, 0, 10]).halve();
        assert_eq!(&[1, 0, 5], halved.counters());
        assert!(!halved.is_zero());
        assert!(Joltage::from(vec![0, 0]).halve().is_zero());
    }

    #[test]
    #[should_panic(expected = "is odd")]
    fn halve_rejects_odd_counters() {
        Joltage::from(vec![2, 3]).halve();
    }

    #[test]
    fn then_twice_doubles_the_tail() {
        let m = machine();
        let head: PressSequence = std::iter::once(&m.buttons()[0]).collect();
        let half: PressSequence = [&m.buttons()[1], &m.buttons()[2]].into_iter().collect();
        let presses = head.then_twice(&half);
        assert_eq!(5, presses.len());
        assert_eq!("[(3) (1,3) (2) (1,3) (2)]", presses.to_string());
    }

    #[test]
    fn replay_checks_exact_match() {
        let m = Machine::new(&[true, true], &[vec![0, 1]], vec![2, 2]).unwrap();
        let button = &m.buttons()[0];
        let twice: PressSequence = [button, button].into_iter().collect();
        let once: PressSequence = std::iter::once(button).collect();
        assert!(m.replay_joltage(&twice));
        assert!(!m.replay_joltage(&once));
    }

    #[rstest]
    #[case(&[], &[], vec![], MachineError::Empty)]
    #[case(&[true], &[], vec![1, 2], MachineError::WidthMismatch { indicators: 1, counters: 2 })]
    #[case(
        &[true, false],
        &[vec![0], vec![0, 2]],
        vec![1, 0],
        MachineError::ButtonOutOfRange { button: 1, position: 2, width: 2 }
    )]
    fn rejects_inconsistent_machines(
        #[case] lights: &[bool],
        #[case] buttons: &[Vec<usize>],
        #[case] joltage: Vec<i64>,
        #[case] expected: MachineError,
    ) {
        assert_eq!(Err(expected), Machine::new(lights, buttons, joltage));
    }

    #[test]
    fn rejects_more_lights_than_a_word() {
        let lights = vec![false; MAX_WIDTH + 1];
        let joltage = vec![0; MAX_WIDTH + 1];
        assert_eq!(
            Err(MachineError::TooWide(MAX_WIDTH + 1)),
            Machine::new(&lights, &[], joltage)
        );
    }
}
