//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    msg.to_string().cyan().bold().to_string()
}

/// Retry hint after rejected input (yellow)
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) -> String {
    msg.to_string().yellow().to_string()
}

/// "Label: value" with a bold label
pub fn field(label: &str, value: &(impl std::fmt::Display + ?Sized)) -> String {
    format!("{} {}", format!("{}:", label).bold(), value)
}

/// Indented "value: count" line
pub fn count(value: &str, count: usize) -> String {
    format!("  {}: {}", value, count.to_string().green())
}

/// Horizontal rule closing a section
pub fn separator() -> String {
    "-".repeat(40)
}
