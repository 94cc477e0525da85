//! Interactive collection of run parameters.
//!
//! Every prompt loops until it gets a valid answer, printing
//! `Invalid input` after each rejected line and `Success` once accepted.
//! Reader and writer are generic so the loops can be driven from tests.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};

/// Digits only, in `1..=65535`.
pub fn parse_count(line: &str) -> Option<u16> {
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match line.parse::<u32>() {
        Ok(n) if n > 0 => u16::try_from(n).ok(),
        _ => None,
    }
}

/// `0` is off, `1` is on.
pub fn parse_debug(line: &str) -> Option<bool> {
    match line {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

/// `y`/`Y` continues, `n`/`N` stops.
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line {
        "y" | "Y" => Some(true),
        "n" | "N" => Some(false),
        _ => None,
    }
}

/// Ask `prompt` until `parse` accepts a line.
fn ask<R, W, T>(
    input:  &mut R,
    output: &mut W,
    prompt: &str,
    parse:  impl Fn(&str) -> Option<T>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for: {}", prompt.trim_end());
        }
        if let Some(value) = parse(line.trim_end_matches(['\r', '\n'])) {
            writeln!(output, "Success")?;
            return Ok(value);
        }
        writeln!(output, "Invalid input")?;
    }
}

pub fn ask_count<R: BufRead, W: Write>(input: &mut R, output: &mut W, what: &str) -> Result<u16> {
    ask(input, output, &format!("Number of {what}: (1 - 65535) "), parse_count)
}

pub fn ask_debug<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    ask(input, output, "Debug mode: (0: Debug Off, 1 : Debug On) ", parse_debug)
}

pub fn ask_continue<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    ask(input, output, "Would you like to run another simulation? (y/n): ", parse_yes_no)
}

/// Prompts on stdin/stdout.
pub struct Console;

impl Console {
    pub fn count(&mut self, what: &str) -> Result<u16> {
        ask_count(&mut io::stdin().lock(), &mut io::stdout(), what)
    }

    pub fn debug(&mut self) -> Result<bool> {
        ask_debug(&mut io::stdin().lock(), &mut io::stdout())
    }

    pub fn again(&mut self) -> Result<bool> {
        ask_continue(&mut io::stdin().lock(), &mut io::stdout())
    }
}
