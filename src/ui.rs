//! Styled terminal output.
//!
//! Pure formatting helpers; no prompting or input handling lives here.

use console::style;

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print an emphasized line.
pub fn display_bullet(message: &str) {
    println!("{}", style(message).bold());
}

/// Print the version change computed by a release.
pub fn display_version_change(current: &str, next: &str) {
    display_status(&format!("Current version: {}", current));
    display_success(&format!("New version: {}", next));
}
