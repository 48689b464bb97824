use chumsky::prelude::*;
use itertools::Itertools;

use crate::error::ParseError;
use crate::machine::Machine;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Machine>, extra::Err<Rich<'a, char>>> {
    let hspace = one_of(" \t").repeated();

    let light = choice((just('.').to(false), just('#').to(true)));

    // [.##.]
    let diagram = light
        .repeated()
        .collect::<Vec<bool>>()
        .delimited_by(just('['), just(']'));

    // (0,2,3)
    let indices = text::int(10)
        .try_map(|digits: &str, span| {
            digits
                .parse::<usize>()
                .map_err(|e| Rich::custom(span, e))
        })
        .separated_by(just(','))
        .collect::<Vec<usize>>()
        .delimited_by(just('('), just(')'));

    let buttons = indices.padded_by(hspace).repeated().collect::<Vec<_>>();

    // {3,5,4,7}
    let joltage = text::int(10)
        .try_map(|digits: &str, span| digits.parse::<i64>().map_err(|e| Rich::custom(span, e)))
        .separated_by(just(','))
        .collect::<Vec<i64>>()
        .delimited_by(just('{'), just('}'));

    let machine = diagram
        .padded_by(hspace)
        .then(buttons)
        .then(joltage)
        .then_ignore(hspace)
        .try_map(|((lights, buttons), joltage), span| {
            Machine::new(&lights, &buttons, joltage).map_err(|e| Rich::custom(span, e))
        });

    machine
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .then_ignore(text::whitespace())
}

/// Parses one machine per line: `[lights] (button) (button) ... {joltage}`.
pub fn parse(input: &str) -> Result<Vec<Machine>, ParseError> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|errors| ParseError {
            message: errors.iter().map(ToString::to_string).join("; "),
        })
}
