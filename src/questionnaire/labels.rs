//! Closed label sets for the categorical questionnaire answers.
//!
//! Each enum below is the single source of truth for one answer's accepted
//! labels and the numeric code it encodes to. The codes must stay consistent
//! with the scaler and representative points the artifact was fitted on
//! (feature schema v1).

use crate::error::{NutricareError, Result};
use serde::{Serialize, Serializer};

/// A questionnaire answer drawn from a fixed, enumerated label set.
pub trait Categorical: Copy + PartialEq + 'static {
    /// Column name the answer encodes into.
    const FIELD: &'static str;

    /// Every variant, in label-table order.
    const ALL: &'static [Self];

    /// Human-facing label exactly as offered on the questionnaire.
    fn label(self) -> &'static str;

    /// Numeric code fed to the scaler.
    fn code(self) -> u8;

    /// Parses a raw answer, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` if the trimmed value is not one of the labels.
    fn parse(raw: &str) -> Result<Self> {
        let value = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label() == value)
            .ok_or_else(|| NutricareError::unknown_category(Self::FIELD, value))
    }

    /// Accepted labels in table order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.label()).collect()
    }
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $field:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = ($label:literal, $code:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl Categorical for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            fn code(self) -> u8 {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = NutricareError;

            fn from_str(s: &str) -> Result<Self> {
                <Self as Categorical>::parse(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

categorical! {
    /// Sex of the subject.
    pub enum Sex in "Jenis_Kelamin" {
        /// Perempuan
        Female = ("Perempuan", 1),
        /// Laki-laki
        Male = ("Laki-laki", 0),
    }
}

categorical! {
    /// Whether the subject has a chronic disease.
    pub enum ChronicDisease in "Penyakit_Kronis" {
        /// Ya
        Yes = ("Ya", 1),
        /// Tidak
        No = ("Tidak", 0),
    }
}

categorical! {
    /// Whether the subject reports stress.
    pub enum Stress in "Stres" {
        /// Ya
        Yes = ("Ya", 1),
        /// Tidak
        No = ("Tidak", 0),
    }
}

categorical! {
    /// Full meals eaten per day.
    pub enum MealFrequency in "Frekuensi_Makan" {
        /// Three or more meals
        ThreeOrMore = ("Tiga kali atau lebih", 3),
        /// Two meals
        Twice = ("Dua kali", 2),
        /// One meal or fewer
        OnceOrLess = ("Satu kali atau kurang", 1),
    }
}

categorical! {
    /// Variety of foods eaten.
    pub enum FoodVariety in "Variasi_Makanan" {
        /// Meat, vegetables, fruit
        Varied = ("Makanan bervariasi (misalnya daging, sayuran, buah)", 3),
        /// A few kinds only
        Limited = ("Makanan terbatas pada beberapa jenis saja", 2),
        /// Very limited or monotonous
        Monotonous = ("Makanan sangat terbatas atau monoton", 1),
    }
}

categorical! {
    /// Protein-source servings.
    pub enum ProteinIntake in "Asupan_Protein" {
        /// Twice a day or more
        TwiceDailyOrMore = ("Dua kali sehari atau lebih", 3),
        /// Once a day
        OnceDaily = ("Sekali sehari", 2),
        /// Less than daily or never
        LessThanDaily = ("Kurang dari sekali sehari atau tidak pernah", 1),
    }
}

categorical! {
    /// Ability to move around.
    pub enum Mobility in "Mobilitas" {
        /// Moves freely without help
        Independent = ("Bergerak dengan bebas tanpa bantuan", 3),
        /// Moves with help
        Assisted = ("Bergerak dengan bantuan", 2),
        /// Cannot move without another person
        Dependent = ("Tidak dapat bergerak tanpa bantuan orang lain", 1),
    }
}

categorical! {
    /// Difficulty with activities of daily living.
    pub enum DailyActivity in "Aktivitas_Sehari_hari" {
        /// No difficulty
        NoDifficulty = ("Tidak ada kesulitan", 3),
        /// Mild difficulty
        MildDifficulty = ("Kesulitan ringan", 2),
        /// Severe difficulty
        SevereDifficulty = ("Kesulitan berat", 1),
    }
}

categorical! {
    /// Oral health (chewing, swallowing). Three-level scale in schema v1.
    pub enum OralHealth in "Kesehatan_Mulut" {
        /// No problem
        NoProblem = ("Tidak ada masalah", 3),
        /// Mild difficulty
        MildDifficulty = ("Ada kesulitan ringan", 2),
        /// Severe difficulty
        SevereDifficulty = ("Kesulitan berat", 1),
    }
}

categorical! {
    /// Memory and cognition problems.
    pub enum CognitiveIssues in "Masalah_Kognitif" {
        /// No memory problem
        NoMemoryProblem = ("Tidak ada masalah daya ingat", 3),
        /// Some memory problem
        MildMemoryProblem = ("Ada sedikit masalah daya ingat", 2),
        /// Significant memory problem
        SignificantMemoryProblem = ("Masalah daya ingat yang signifikan", 1),
    }
}

/// Label set of one categorical field, for rendering option lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOptions {
    /// Column name
    pub field: &'static str,
    /// Accepted labels with their codes
    pub options: Vec<(&'static str, u8)>,
}

fn options_of<C: Categorical>() -> FieldOptions {
    FieldOptions {
        field: C::FIELD,
        options: C::ALL.iter().map(|v| (v.label(), v.code())).collect(),
    }
}

/// Every categorical field with its accepted labels, in encoding order.
#[must_use]
pub fn field_options() -> Vec<FieldOptions> {
    vec![
        options_of::<Sex>(),
        options_of::<MealFrequency>(),
        options_of::<FoodVariety>(),
        options_of::<ProteinIntake>(),
        options_of::<Mobility>(),
        options_of::<DailyActivity>(),
        options_of::<OralHealth>(),
        options_of::<ChronicDisease>(),
        options_of::<Stress>(),
        options_of::<CognitiveIssues>(),
    ]
}
