//! The interactive command loop.

use std::io::{self, BufRead, Write};
use tbrowse_core::fetch::Fetcher;
use tbrowse_core::{BrowseError, Browser};

const PROMPT: &str = ">";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    Exit,
    Back,
    Browse(&'a str),
    Empty,
}

pub fn parse_command(line: &str) -> ReplCommand<'_> {
    match line.trim() {
        "" => ReplCommand::Empty,
        "exit" => ReplCommand::Exit,
        "back" => ReplCommand::Back,
        other => ReplCommand::Browse(other),
    }
}

/// Reads commands from `input` until `exit` or end of input, writing pages and errors to `out`.
///
/// Browse errors are reported and the loop continues; only I/O errors on
/// `input`/`out` end it early.
pub fn run<F, R, W>(browser: &mut Browser<F>, mut input: R, out: &mut W) -> io::Result<()>
where
    F: Fetcher,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match parse_command(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Exit => return Ok(()),
            ReplCommand::Back => match browser.back() {
                Ok(Some(text)) => writeln!(out, "{text}")?,
                Ok(None) => {}
                Err(e) => report(out, &e)?,
            },
            ReplCommand::Browse(target) => match browser.browse(target) {
                Ok(text) => writeln!(out, "{text}")?,
                Err(e) => report(out, &e)?,
            },
        }
    }
}

fn report<W: Write>(out: &mut W, err: &BrowseError) -> io::Result<()> {
    if err.is_incorrect_url() {
        tracing::warn!(error = %err, "browse failed");
        writeln!(out, "Error: Incorrect URL")
    } else {
        tracing::error!(error = %err, "browse failed");
        writeln!(out, "Error: {err}")
    }
}
