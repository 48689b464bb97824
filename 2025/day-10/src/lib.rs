pub mod cli;
pub mod error;
pub mod machine;
pub mod options;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod solver;
pub mod timing;
