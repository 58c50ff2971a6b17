//! Info command implementation

use crate::error::Result;
use crate::output;
use nutricare::intervention::{NutritionStatus, WhoCategory, CANONICAL_CLUSTER_LABELS};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StatusInfo {
    status: NutritionStatus,
    title: &'static str,
    /// Cluster index under the canonical schema v1 map
    canonical_cluster: Option<usize>,
    who_category: Option<WhoCategory>,
    summary: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    narrative: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct CategoryInfo {
    category: WhoCategory,
    title: &'static str,
    summary: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct Info {
    statuses: Vec<StatusInfo>,
    who_categories: Vec<CategoryInfo>,
}

/// Run the info command
pub(crate) fn run(narrative: bool, json: bool) -> Result<()> {
    let statuses = NutritionStatus::all()
        .into_iter()
        .map(|status| StatusInfo {
            status,
            title: status.title(),
            canonical_cluster: CANONICAL_CLUSTER_LABELS.iter().position(|s| *s == status),
            who_category: status.who_category(),
            summary: status.summary(),
            narrative: narrative.then(|| status.narrative()),
        })
        .collect();
    let who_categories = WhoCategory::all()
        .into_iter()
        .map(|category| CategoryInfo {
            category,
            title: category.title(),
            summary: category.summary(),
        })
        .collect();
    let info = Info {
        statuses,
        who_categories,
    };

    if json {
        return output::json(&info);
    }

    for status in &info.statuses {
        output::section(&output::status_label(status.status));
        if let Some(cluster) = status.canonical_cluster {
            output::kv("Canonical cluster", cluster);
        }
        match status.narrative {
            Some(text) => println!("{text}"),
            None => print_lines(status.summary),
        }
    }

    output::section("WHO malnutrition categories");
    for category in &info.who_categories {
        println!("\n  {}", category.title);
        print_lines(category.summary);
    }
    Ok(())
}

fn print_lines(lines: &[&str]) {
    for line in lines {
        println!("  - {line}");
    }
}
