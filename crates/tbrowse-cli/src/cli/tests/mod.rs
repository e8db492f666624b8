//! CLI tests: argument parsing and the command loop.

use super::Cli;
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}
