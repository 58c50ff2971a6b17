//! Options command implementation

use crate::error::Result;
use crate::output;
use colored::Colorize;
use nutricare::questionnaire::field_options;

/// Run the options command
pub(crate) fn run(json: bool) -> Result<()> {
    let fields = field_options();
    if json {
        return output::json(&fields);
    }
    for field in &fields {
        output::section(field.field);
        for (label, code) in &field.options {
            println!("  {} {label}", format!("[{code}]").dimmed());
        }
    }
    Ok(())
}
