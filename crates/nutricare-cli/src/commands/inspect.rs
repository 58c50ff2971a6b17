//! Inspect command implementation

use crate::error::Result;
use crate::output;
use crate::ArtifactArgs;
use nutricare::artifact::ArtifactSet;
use nutricare::questionnaire::FEATURE_NAMES;
use nutricare::traits::Transformer;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ClusterSummary {
    cluster: usize,
    status: nutricare::intervention::NutritionStatus,
    n_points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    centroid: Option<Vec<(&'static str, f64)>>,
}

#[derive(Debug, Serialize)]
struct ArtifactSummary {
    source: String,
    schema_version: u32,
    n_features: usize,
    feature_names: &'static [&'static str],
    n_clusters: usize,
    n_points: usize,
    clusters: Vec<ClusterSummary>,
}

/// Run the inspect command
pub(crate) fn run(artifacts: &ArtifactArgs, centroids: bool, json: bool) -> Result<()> {
    let set = artifacts.load()?;
    let summary = summarize(&set, artifacts.describe(), centroids)?;
    if json {
        return output::json(&summary);
    }

    output::section("Artifacts");
    output::kv("Source", &summary.source);
    output::kv("Schema version", summary.schema_version);
    output::kv("Features", summary.n_features);
    output::kv("Clusters", summary.n_clusters);
    output::kv("Representative points", summary.n_points);

    output::section("Feature order");
    for (i, name) in summary.feature_names.iter().enumerate() {
        println!("  {i:>2}  {name}");
    }

    for cluster in &summary.clusters {
        output::section(&format!("Cluster {}", cluster.cluster));
        output::kv("Status", output::status_label(cluster.status));
        output::kv("Points", cluster.n_points);
        if let Some(centroid) = &cluster.centroid {
            for (name, value) in centroid {
                println!("    {name:<24} {value:>8.2}");
            }
        }
    }
    Ok(())
}

fn summarize(set: &ArtifactSet, source: String, centroids: bool) -> Result<ArtifactSummary> {
    let reps = set.representatives();
    let clusters = (0..set.n_clusters())
        .map(|cluster| -> Result<ClusterSummary> {
            let centroid = if centroids {
                centroid_in_input_units(set, cluster)?
            } else {
                None
            };
            Ok(ClusterSummary {
                cluster,
                // Label count equals cluster count for a loaded set.
                status: set.cluster_labels()[cluster],
                n_points: reps.group(cluster).map_or(0, |g| g.n_rows()),
                centroid,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ArtifactSummary {
        source,
        schema_version: set.schema_version(),
        n_features: set.scaler().n_features(),
        feature_names: &FEATURE_NAMES,
        n_clusters: set.n_clusters(),
        n_points: reps.n_points(),
        clusters,
    })
}

/// Group mean mapped back through the scaler.
fn centroid_in_input_units(
    set: &ArtifactSet,
    cluster: usize,
) -> Result<Option<Vec<(&'static str, f64)>>> {
    let Some(mean) = set.representatives().group_mean(cluster) else {
        return Ok(None);
    };
    let unscaled = set.scaler().inverse_transform(&mean)?;
    Ok(Some(FEATURE_NAMES.iter().copied().zip(unscaled).collect()))
}
