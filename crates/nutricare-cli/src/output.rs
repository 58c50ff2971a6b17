//! Output formatting utilities

use colored::Colorize;
use nutricare::intervention::NutritionStatus;
use serde::Serialize;

use crate::error::Result;

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print a success message
pub(crate) fn success(msg: &str) {
    println!("{} {}", "[PASS]".green().bold(), msg);
}

/// Print a warning message
pub(crate) fn warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// Print a failure message
pub(crate) fn fail(msg: &str) {
    println!("{} {}", "[FAIL]".red().bold(), msg);
}

/// Status title colored by severity
pub(crate) fn status_label(status: NutritionStatus) -> String {
    match status {
        NutritionStatus::Adequate => status.title().green().bold().to_string(),
        NutritionStatus::MildMalnutrition => status.title().yellow().bold().to_string(),
        NutritionStatus::SevereMalnutrition => status.title().red().bold().to_string(),
    }
}

/// Pretty-print a value as JSON on stdout
pub(crate) fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a distance for display
pub(crate) fn format_distance(d: f64) -> String {
    format!("{d:.4}")
}
