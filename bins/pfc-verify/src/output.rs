//! Terminal output helpers and record rendering.

use owo_colors::OwoColorize;
use pfc_directory::DirectoryRecord;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.len()));
    }
}

/// Print one ranked match as a bullet line: primary label, secondary field,
/// and the category tag when the record carries one.
pub fn print_match(record: &DirectoryRecord) {
    println!(
        "  {} {} {}{}",
        "•".dimmed(),
        record.primary.bold(),
        record.secondary_label().dimmed(),
        category_tag(record, "[", "]").dimmed(),
    );
}

/// Render a registry entry as a one-line verified card.
pub fn verified_card(record: &DirectoryRecord) -> String {
    format!(
        "{} — {}{}",
        record.primary.bold(),
        record.secondary_label(),
        category_tag(record, "(", ")"),
    )
}

fn category_tag(record: &DirectoryRecord, open: &str, close: &str) -> String {
    record
        .category
        .as_deref()
        .map(|c| format!(" {open}{c}{close}"))
        .unwrap_or_default()
}
