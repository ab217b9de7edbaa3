//! Colored console output helpers.

use std::io::{self, Write};

use colored::Colorize;

/// Writes `message` as one red line. Color is dropped automatically when the
/// stream is not a terminal.
pub fn print_error(out: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.red())
}

/// Writes the `help` listing: a colored header followed by one line per
/// registered command, in registration order.
pub fn print_help(out: &mut dyn Write, entries: &[(String, String)]) -> io::Result<()> {
    writeln!(out, "{}", "The following commands are supported:".blue())?;
    for (name, description) in entries {
        writeln!(out, "  > {} {}", name, description)?;
    }
    Ok(())
}
