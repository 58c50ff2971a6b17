//! Nutrition status labels and their intervention narratives.
//!
//! The classifier only returns a cluster index. Which index means which
//! status depends on how the offline clustering numbered its groups, so the
//! mapping travels with the artifact ([`crate::artifact::ArtifactSet`]); the
//! canonical schema v1 mapping is [`CANONICAL_CLUSTER_LABELS`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrition-risk group of an elderly subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionStatus {
    /// Cukup gizi
    Adequate,
    /// Malnutrisi berat
    SevereMalnutrition,
    /// Malnutrisi ringan
    MildMalnutrition,
}

/// Cluster index → status for feature schema v1.
pub const CANONICAL_CLUSTER_LABELS: [NutritionStatus; 3] = [
    NutritionStatus::Adequate,
    NutritionStatus::SevereMalnutrition,
    NutritionStatus::MildMalnutrition,
];

const SEVERE_NARRATIVE: &str = "### Klaster Malnutrisi Berat:\n\
**Intervensi:**\n\
- Pendekatan medis yang intensif, termasuk evaluasi komprehensif oleh dokter, ahli gizi, dan tim medis terkait.\n\
- Pemberian nutrisi melalui metode enteral atau parenteral sesuai kebutuhan, untuk memastikan asupan nutrisi yang tepat bagi pasien.\n\
- Terapi fisik dan intervensi mobilitas yang bertahap guna membantu meningkatkan kekuatan fisik.\n\
- Konseling psikologis untuk mengelola stres, depresi, atau kecemasan yang dapat memperburuk kondisi malnutrisi.\n";

const MILD_NARRATIVE: &str = "### Klaster Malnutrisi Ringan:\n\
**Intervensi:**\n\
- Pengaturan pola makan yang lebih seimbang dan bervariasi untuk mencegah malnutrisi lebih lanjut.\n\
- Kegiatan fisik ringan yang teratur untuk menjaga kesehatan fisik dan mobilitas.\n\
- Konseling psikologis ringan, jika diperlukan, untuk membantu manajemen stres.\n\
- Pengawasan berkala terhadap status gizi untuk memastikan stabilitas kondisi.\n";

const ADEQUATE_NARRATIVE: &str = "### Klaster Cukup Gizi:\n\
**Intervensi:**\n\
- Pemeliharaan gizi dengan pola makan yang seimbang dan aktivitas fisik teratur.\n\
- Konsultasi berkala dengan ahli gizi untuk memastikan asupan nutrisi tetap optimal.\n\
- Pemantauan kondisi kesehatan secara teratur untuk mendeteksi perubahan status gizi atau kondisi fisik.\n";

const SEVERE_SUMMARY: &[&str] = &[
    "Pendekatan medis segera, dengan evaluasi menyeluruh oleh dokter dan ahli gizi.",
    "Pemberian makanan atau nutrisi enteral/parenteral, jika diperlukan.",
    "Terapi fisik untuk meningkatkan kekuatan fisik.",
    "Konseling psikologis untuk mengurangi stres dan kecemasan.",
];

const MODERATE_SUMMARY: &[&str] = &[
    "Konsultasi ahli gizi untuk merancang rencana makan yang lebih kaya nutrisi.",
    "Program rehabilitasi fisik yang ringan.",
    "Pemberian suplemen gizi, terutama protein dan mikronutrien.",
    "Pengawasan berkala oleh tenaga medis.",
];

const MILD_SUMMARY: &[&str] = &[
    "Pengaturan pola makan yang lebih seimbang dan bervariasi.",
    "Kegiatan fisik ringan yang teratur.",
    "Konseling psikologis ringan, jika diperlukan.",
    "Pengawasan berkala terhadap status gizi.",
];

// Same bullets as ADEQUATE_NARRATIVE.
const ADEQUATE_SUMMARY: &[&str] = &[
    "Pemeliharaan gizi dengan pola makan yang seimbang dan aktivitas fisik teratur.",
    "Konsultasi berkala dengan ahli gizi untuk memastikan asupan nutrisi tetap optimal.",
    "Pemantauan kondisi kesehatan secara teratur untuk mendeteksi perubahan status gizi atau kondisi fisik.",
];

/// WHO malnutrition categories shown on the information page.
///
/// The clustering only separates mild from severe malnutrition, so
/// [`WhoCategory::Moderate`] has no cluster of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhoCategory {
    /// Malnutrisi ringan
    Mild,
    /// Malnutrisi sedang
    Moderate,
    /// Malnutrisi berat
    Severe,
}

impl WhoCategory {
    /// Every category, from mildest to most severe.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Mild, Self::Moderate, Self::Severe]
    }

    /// Indonesian display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Mild => "Malnutrisi Ringan",
            Self::Moderate => "Malnutrisi Sedang",
            Self::Severe => "Malnutrisi Berat",
        }
    }

    /// Intervention guidance, one line per item.
    #[must_use]
    pub fn summary(self) -> &'static [&'static str] {
        match self {
            Self::Mild => MILD_SUMMARY,
            Self::Moderate => MODERATE_SUMMARY,
            Self::Severe => SEVERE_SUMMARY,
        }
    }
}

impl fmt::Display for WhoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl NutritionStatus {
    /// Every status, ordered from best to worst.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [
            Self::Adequate,
            Self::MildMalnutrition,
            Self::SevereMalnutrition,
        ]
    }

    /// Status of a cluster index under the canonical v1 mapping.
    #[must_use]
    pub fn from_cluster(cluster: usize) -> Option<Self> {
        CANONICAL_CLUSTER_LABELS.get(cluster).copied()
    }

    /// Indonesian display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Adequate => "Cukup Gizi",
            Self::SevereMalnutrition => "Malnutrisi Berat",
            Self::MildMalnutrition => "Malnutrisi Ringan",
        }
    }

    /// Full intervention narrative (Markdown).
    #[must_use]
    pub fn narrative(self) -> &'static str {
        match self {
            Self::Adequate => ADEQUATE_NARRATIVE,
            Self::SevereMalnutrition => SEVERE_NARRATIVE,
            Self::MildMalnutrition => MILD_NARRATIVE,
        }
    }

    /// Short intervention guidance, one line per item.
    ///
    /// Malnourished statuses use their WHO category guidance; adequate uses
    /// the bullets of its narrative.
    #[must_use]
    pub fn summary(self) -> &'static [&'static str] {
        match self.who_category() {
            Some(category) => category.summary(),
            None => ADEQUATE_SUMMARY,
        }
    }

    /// Matching WHO category, if malnourished.
    #[must_use]
    pub fn who_category(self) -> Option<WhoCategory> {
        match self {
            Self::Adequate => None,
            Self::MildMalnutrition => Some(WhoCategory::Mild),
            Self::SevereMalnutrition => Some(WhoCategory::Severe),
        }
    }

    /// Whether the status calls for a nutrition intervention beyond
    /// maintenance.
    #[must_use]
    pub fn is_malnourished(self) -> bool {
        !matches!(self, Self::Adequate)
    }
}

impl fmt::Display for NutritionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_mapping() {
        assert_eq!(NutritionStatus::from_cluster(0), Some(NutritionStatus::Adequate));
        assert_eq!(
            NutritionStatus::from_cluster(1),
            Some(NutritionStatus::SevereMalnutrition)
        );
        assert_eq!(
            NutritionStatus::from_cluster(2),
            Some(NutritionStatus::MildMalnutrition)
        );
        assert_eq!(NutritionStatus::from_cluster(3), None);
    }

    #[test]
    fn test_narratives_are_distinct_and_titled() {
        for status in NutritionStatus::all() {
            let text = status.narrative();
            assert!(text.starts_with("### Klaster "));
            assert!(text.contains(status.title()));
            assert!(text.contains("**Intervensi:**"));
        }
        assert_ne!(
            NutritionStatus::Adequate.narrative(),
            NutritionStatus::MildMalnutrition.narrative()
        );
    }

    #[test]
    fn test_narrative_bullets() {
        let bullets = NutritionStatus::SevereMalnutrition
            .narrative()
            .lines()
            .filter(|l| l.starts_with("- "))
            .count();
        assert_eq!(bullets, 4);
    }

    #[test]
    fn test_summary_lengths() {
        assert_eq!(NutritionStatus::Adequate.summary().len(), 3);
        assert_eq!(NutritionStatus::MildMalnutrition.summary().len(), 4);
        assert_eq!(NutritionStatus::SevereMalnutrition.summary().len(), 4);
        for category in WhoCategory::all() {
            assert_eq!(category.summary().len(), 4);
        }
    }

    #[test]
    fn test_adequate_summary_matches_narrative_bullets() {
        let bullets: Vec<&str> = NutritionStatus::Adequate
            .narrative()
            .lines()
            .filter_map(|l| l.strip_prefix("- "))
            .collect();
        assert_eq!(bullets, NutritionStatus::Adequate.summary());
    }

    #[test]
    fn test_who_categories() {
        let titles: Vec<&str> = WhoCategory::all().iter().map(|c| c.title()).collect();
        assert_eq!(
            titles,
            ["Malnutrisi Ringan", "Malnutrisi Sedang", "Malnutrisi Berat"]
        );
        assert!(WhoCategory::Moderate.summary()[2].contains("protein dan mikronutrien"));
        assert_eq!(
            NutritionStatus::SevereMalnutrition.who_category(),
            Some(WhoCategory::Severe)
        );
        assert_eq!(NutritionStatus::Adequate.who_category(), None);
        assert_eq!(
            NutritionStatus::MildMalnutrition.summary(),
            WhoCategory::Mild.summary()
        );
    }

    #[test]
    fn test_is_malnourished() {
        assert!(!NutritionStatus::Adequate.is_malnourished());
        assert!(NutritionStatus::MildMalnutrition.is_malnourished());
        assert!(NutritionStatus::SevereMalnutrition.is_malnourished());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&NutritionStatus::SevereMalnutrition).expect("serialize");
        assert_eq!(json, "\"severe_malnutrition\"");
        let back: NutritionStatus = serde_json::from_str("\"mild_malnutrition\"").expect("parse");
        assert_eq!(back, NutritionStatus::MildMalnutrition);
    }

    #[test]
    fn test_display_is_title() {
        assert_eq!(NutritionStatus::Adequate.to_string(), "Cukup Gizi");
    }
}
