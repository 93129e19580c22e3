//! Terminal output with cargo-style status lines.

use std::fmt;
use std::io::{stderr, stdout, IsTerminal, Write};

use anyhow::Result;
use clap::ValueEnum;
use owo_colors::{AnsiColors, OwoColorize};

/// When to colorize output, for both status lines and logs.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Color {
    /// Colorize when stderr is a terminal.
    #[default]
    Auto,
    Never,
    Always,
}

impl Color {
    /// Resolves the choice against stderr, where all colored output goes.
    pub fn enabled(self) -> bool {
        match self {
            Color::Auto => stderr().is_terminal(),
            Color::Never => false,
            Color::Always => true,
        }
    }
}

/// The requested verbosity of status output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verbosity {
    Verbose,
    Normal,
    /// Only errors and the rendered account are printed.
    Quiet,
}

#[derive(Debug)]
pub struct Terminal {
    verbosity: Verbosity,
    color: bool,
}

impl Terminal {
    pub fn new(verbosity: Verbosity, color: Color) -> Self {
        Terminal {
            verbosity,
            color: color.enabled(),
        }
    }

    /// Prints a green 'status' message.
    pub fn status(&self, status: impl fmt::Display, message: impl fmt::Display) -> Result<()> {
        self.print(status, AnsiColors::Green, message, true)
    }

    /// Prints a cyan 'note' message, only when verbose.
    pub fn note(&self, message: impl fmt::Display) -> Result<()> {
        if self.verbosity != Verbosity::Verbose {
            return Ok(());
        }
        self.print("note", AnsiColors::Cyan, message, false)
    }

    /// Prints a yellow 'warning' message.
    pub fn warn(&self, message: impl fmt::Display) -> Result<()> {
        self.print("warning", AnsiColors::Yellow, message, false)
    }

    /// Prints a red 'error' message, even when quiet.
    pub fn error(&self, message: impl fmt::Display) -> Result<()> {
        write_status(
            &mut stderr(),
            "error",
            self.color.then_some(AnsiColors::Red),
            message,
            false,
        )
    }

    /// Writes a line to stdout, regardless of verbosity.
    pub fn write_stdout(&self, line: impl fmt::Display) -> Result<()> {
        let mut stdout = stdout();
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
        Ok(())
    }

    fn print(
        &self,
        status: impl fmt::Display,
        color: AnsiColors,
        message: impl fmt::Display,
        justified: bool,
    ) -> Result<()> {
        match self.verbosity {
            Verbosity::Quiet => Ok(()),
            _ => write_status(
                &mut stderr(),
                status,
                self.color.then_some(color),
                message,
                justified,
            ),
        }
    }
}

/// Writes a bold, optionally colored and right-justified status followed by
/// the message.
fn write_status(
    w: &mut impl Write,
    status: impl fmt::Display,
    color: Option<AnsiColors>,
    message: impl fmt::Display,
    justified: bool,
) -> Result<()> {
    let status = match color {
        Some(color) => status.color(color).bold().to_string(),
        None => status.to_string(),
    };

    if justified {
        writeln!(w, "{status:>12} {message}")?;
    } else {
        writeln!(w, "{status}: {message}")?;
    }

    Ok(())
}
