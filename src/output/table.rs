//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Message shown instead of an empty table
pub const EMPTY_RESULT: &str = "No results found.";

/// Format rows as a rounded table with a centred header
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return EMPTY_RESULT.to_string();
    }

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}
