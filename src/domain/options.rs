use serde::{Deserialize, Serialize};

/// Symptom intensity shared by the anemia and PCOS trackers.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    None,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::None,
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
    ];

    pub const MAX_SCORE: u32 = 3;

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Severity::None => 0,
            Severity::Mild => 1,
            Severity::Moderate => 2,
            Severity::Severe => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::None => "#10b981",
            Severity::Mild => "#f59e0b",
            Severity::Moderate => "#f97316",
            Severity::Severe => "#ef4444",
        }
    }

    /// Moderate or severe.
    pub fn is_significant(&self) -> bool {
        *self >= Severity::Moderate
    }

    pub fn is_present(&self) -> bool {
        *self > Severity::None
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IronFoodFrequency {
    Daily,
    Sometimes,
    Rarely,
    Never,
}

impl IronFoodFrequency {
    pub const ALL: [IronFoodFrequency; 4] = [
        IronFoodFrequency::Daily,
        IronFoodFrequency::Sometimes,
        IronFoodFrequency::Rarely,
        IronFoodFrequency::Never,
    ];

    pub const MAX_SCORE: u32 = 3;

    pub fn as_str(&self) -> &'static str {
        match self {
            IronFoodFrequency::Daily => "daily",
            IronFoodFrequency::Sometimes => "sometimes",
            IronFoodFrequency::Rarely => "rarely",
            IronFoodFrequency::Never => "never",
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            IronFoodFrequency::Daily => 0,
            IronFoodFrequency::Sometimes => 1,
            IronFoodFrequency::Rarely => 2,
            IronFoodFrequency::Never => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IronFoodFrequency::Daily => "Daily",
            IronFoodFrequency::Sometimes => "3-4x/week",
            IronFoodFrequency::Rarely => "Rarely",
            IronFoodFrequency::Never => "Never",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SupplementUsage {
    Yes,
    Sometimes,
    No,
}

impl SupplementUsage {
    pub const ALL: [SupplementUsage; 3] = [
        SupplementUsage::Yes,
        SupplementUsage::Sometimes,
        SupplementUsage::No,
    ];

    pub const MAX_SCORE: u32 = 2;

    pub fn as_str(&self) -> &'static str {
        match self {
            SupplementUsage::Yes => "yes",
            SupplementUsage::Sometimes => "sometimes",
            SupplementUsage::No => "no",
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            SupplementUsage::Yes => 0,
            SupplementUsage::Sometimes => 1,
            SupplementUsage::No => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupplementUsage::Yes => "Yes",
            SupplementUsage::Sometimes => "Sometimes",
            SupplementUsage::No => "No",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Neutral,
    Stressed,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 4] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Stressed,
        Mood::Sad,
    ];

    pub const MAX_SCORE: u32 = 3;

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Stressed => "stressed",
            Mood::Sad => "sad",
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Mood::Happy => 3,
            Mood::Neutral => 2,
            Mood::Stressed => 1,
            Mood::Sad => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Stressed => "Stressed",
            Mood::Sad => "Sad",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Stressed => "😰",
            Mood::Sad => "😢",
        }
    }

    /// Stressed or sad; feeds the burnout heuristic.
    pub fn is_low(&self) -> bool {
        matches!(self, Mood::Stressed | Mood::Sad)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    pub const ALL: [EnergyLevel; 3] = [
        EnergyLevel::Low,
        EnergyLevel::Medium,
        EnergyLevel::High,
    ];

    pub const MAX_SCORE: u32 = 2;

    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            EnergyLevel::Low => 0,
            EnergyLevel::Medium => 1,
            EnergyLevel::High => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "Low",
            EnergyLevel::Medium => "Medium",
            EnergyLevel::High => "High",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "#ef4444",
            EnergyLevel::Medium => "#f59e0b",
            EnergyLevel::High => "#10b981",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Great,
}

impl SleepQuality {
    pub const ALL: [SleepQuality; 4] = [
        SleepQuality::Poor,
        SleepQuality::Fair,
        SleepQuality::Good,
        SleepQuality::Great,
    ];

    pub const MAX_SCORE: u32 = 3;

    pub fn as_str(&self) -> &'static str {
        match self {
            SleepQuality::Poor => "poor",
            SleepQuality::Fair => "fair",
            SleepQuality::Good => "good",
            SleepQuality::Great => "great",
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            SleepQuality::Poor => 0,
            SleepQuality::Fair => 1,
            SleepQuality::Good => 2,
            SleepQuality::Great => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SleepQuality::Poor => "Poor",
            SleepQuality::Fair => "Fair",
            SleepQuality::Good => "Good",
            SleepQuality::Great => "Great",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_weights_are_ordered() {
        let scores: Vec<u32> = Severity::ALL.iter().map(|s| s.score()).collect();
        assert_eq!(scores, vec![0, 1, 2, 3]);
        assert!(Severity::Mild < Severity::Moderate);
        assert_eq!(Severity::Severe.score(), Severity::MAX_SCORE);
    }

    #[test]
    fn test_severity_serde_names() {
        let json = serde_json::to_string(&Severity::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let parsed: Severity = serde_json::from_str("\"severe\"").unwrap();
        assert_eq!(parsed, Severity::Severe);
    }

    #[test]
    fn test_option_values_match_serde_names() {
        fn assert_names<T: Serialize>(items: &[T], name: impl Fn(&T) -> &'static str) {
            for item in items {
                let json = serde_json::to_string(item).unwrap();
                assert_eq!(json, format!("\"{}\"", name(item)));
            }
        }
        assert_names(&Severity::ALL, Severity::as_str);
        assert_names(&IronFoodFrequency::ALL, IronFoodFrequency::as_str);
        assert_names(&SupplementUsage::ALL, SupplementUsage::as_str);
        assert_names(&Mood::ALL, Mood::as_str);
        assert_names(&EnergyLevel::ALL, EnergyLevel::as_str);
        assert_names(&SleepQuality::ALL, SleepQuality::as_str);
    }

    #[test]
    fn test_lifestyle_worst_choices_hit_max() {
        assert_eq!(IronFoodFrequency::Never.score(), IronFoodFrequency::MAX_SCORE);
        assert_eq!(SupplementUsage::No.score(), SupplementUsage::MAX_SCORE);
        assert_eq!(IronFoodFrequency::Sometimes.label(), "3-4x/week");
    }

    #[test]
    fn test_wellness_best_choices_hit_max() {
        assert_eq!(Mood::Happy.score(), Mood::MAX_SCORE);
        assert_eq!(EnergyLevel::High.score(), EnergyLevel::MAX_SCORE);
        assert_eq!(SleepQuality::Great.score(), SleepQuality::MAX_SCORE);
        assert!(Mood::Sad.is_low());
        assert!(!Mood::Neutral.is_low());
    }
}
