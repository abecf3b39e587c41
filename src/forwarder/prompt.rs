//! Prompt decoration
//!
//! Pure string assembly, kept apart from the network call.

use chrono::NaiveDate;

/// Render a date the way `Date.prototype.toDateString` does: `Mon Jun 16 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Prepend the date line, and the context block when there is one
pub fn decorate_prompt(date: &str, context: &str, prompt: &str) -> String {
    if context.is_empty() {
        format!("Today is {date}.\n\n{prompt}")
    } else {
        format!("Today is {date}.\n\nContext:\n{context}\n\nQuestion:\n{prompt}")
    }
}
