//! Output helpers for consistent CLI presentation.
//!
//! Report blocks go to stdout; errors always go to stderr so a failed run never mixes error
//! text into the report stream.

use colored::*;
use std::io::Write;

/// Formats an error message
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn format_error(message: &str) -> String {
    format!("\n{} {}\n", "✕ Error:".red(), message.white())
}

/// Prints an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Prints a success message with a green checkmark
pub fn print_success(message: &str) {
    println!("\n{} {}\n", "✓".green(), message.white());
}

/// Writes a report block preceded by a blank line and flushes it
pub fn write_block(out: &mut impl Write, block: &impl std::fmt::Display) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{block}")?;
    out.flush()
}
