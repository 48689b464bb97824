use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use tracing::Level;

use crate::options::SolveOptions;

/// Factory machine solver: one machine per input line.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Puzzle input file (reads stdin if omitted)
    pub input: Option<PathBuf>,

    /// Trace every step of the button search to stderr
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    pub fn options(&self) -> SolveOptions {
        SolveOptions { debug: self.debug }
    }

    pub fn init_tracing(&self) {
        let level = if self.debug { Level::DEBUG } else { Level::INFO };
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("reading {}", path.display())),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .into_diagnostic()
                    .wrap_err("reading stdin")?;
                Ok(input)
            }
        }
    }
}
