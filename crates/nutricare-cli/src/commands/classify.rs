//! Classify command implementation
//!
//! Reads one questionnaire (a JSON object) or a batch (a JSON array) and
//! prints the nearest nutrition-risk cluster for each subject.

use crate::error::Result;
use crate::output;
use crate::ArtifactArgs;
use colored::Colorize;
use nutricare::assessment::{Assessment, Assessor};
use nutricare::questionnaire::RawQuestionnaire;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Run the classify command
pub(crate) fn run(input: &Path, artifacts: &ArtifactArgs, summary: bool, json: bool) -> Result<()> {
    let text = read_input(input)?;
    let (records, batch) = parse_questionnaires(&text)?;
    debug!(count = records.len(), "read questionnaires");

    let assessor = Assessor::from(artifacts.load()?);
    let assessments = records
        .iter()
        .map(|raw| assessor.assess_raw(raw))
        .collect::<nutricare::Result<Vec<_>>>()?;

    if json {
        if batch {
            output::json(&assessments)
        } else {
            output::json(&assessments[0])
        }
    } else {
        for assessment in &assessments {
            print_assessment(assessment, summary);
        }
        Ok(())
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

/// Parses a single questionnaire or an array of them. The flag reports
/// whether the input was an array.
fn parse_questionnaires(text: &str) -> Result<(Vec<RawQuestionnaire>, bool)> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => {
            let records = items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok((records, true))
        }
        other => Ok((vec![serde_json::from_value(other)?], false)),
    }
}

fn print_assessment(assessment: &Assessment, summary: bool) {
    output::section(&assessment.name);
    output::kv("Cluster", assessment.cluster());
    output::kv(
        "Distance",
        output::format_distance(assessment.classification.distance),
    );
    output::kv("Status", output::status_label(assessment.status));
    println!();
    if summary {
        for line in assessment.status.summary() {
            println!("  - {line}");
        }
    } else {
        println!("{}", assessment.narrative().dimmed());
    }
}
