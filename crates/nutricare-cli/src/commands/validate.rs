//! Validate command implementation
//!
//! Loads the artifacts (which checks schema version, feature names, widths,
//! and the label map) and then looks for representative points that appear
//! in more than one group.

use crate::error::{CliError, Result};
use crate::output;
use crate::ArtifactArgs;
use nutricare::artifact::ArtifactSet;
use nutricare::cluster::nearest_group;
use nutricare::questionnaire::{FEATURE_COUNT, SCHEMA_VERSION};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report {
    source: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    warnings: Vec<String>,
}

/// Run the validate command
pub(crate) fn run(artifacts: &ArtifactArgs, json: bool) -> Result<()> {
    let source = artifacts.describe();
    if !json {
        println!("Validating {source}...\n");
    }

    let set = match artifacts.load() {
        Ok(set) => set,
        Err(e) => {
            if json {
                output::json(&Report {
                    source,
                    valid: false,
                    error: Some(e.to_string()),
                    warnings: Vec::new(),
                })?;
            } else {
                output::fail(&e.to_string());
            }
            return Err(e);
        }
    };

    let warnings = shared_points(&set)?;
    if json {
        output::json(&Report {
            source,
            valid: true,
            error: None,
            warnings,
        })?;
        return Ok(());
    }

    output::success(&format!("schema version {SCHEMA_VERSION}"));
    output::success(&format!("{FEATURE_COUNT} features in encoder order"));
    output::success(&format!(
        "{} clusters, {} representative points, none empty",
        set.n_clusters(),
        set.representatives().n_points()
    ));
    output::success("cluster label map covers every cluster");
    for warning in &warnings {
        output::warning(warning);
    }
    Ok(())
}

/// Points whose nearest group is a lower-index group holding the same point.
fn shared_points(set: &ArtifactSet) -> Result<Vec<String>> {
    let reps = set.representatives();
    let mut warnings = Vec::new();
    for (cluster, group) in reps.groups().enumerate() {
        for (row, point) in group.rows().enumerate() {
            let result = nearest_group(point, reps).map_err(CliError::from)?;
            if result.cluster != cluster {
                warnings.push(format!(
                    "point {row} of cluster {cluster} duplicates a point of cluster {}",
                    result.cluster
                ));
            }
        }
    }
    Ok(warnings)
}
