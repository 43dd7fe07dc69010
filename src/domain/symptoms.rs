use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct SymptomDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PcosCategory>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnemiaSymptom {
    Fatigue,
    Dizziness,
    Breath,
    PaleSkin,
    Headache,
    HairFall,
}

impl AnemiaSymptom {
    pub const ALL: [AnemiaSymptom; 6] = [
        AnemiaSymptom::Fatigue,
        AnemiaSymptom::Dizziness,
        AnemiaSymptom::Breath,
        AnemiaSymptom::PaleSkin,
        AnemiaSymptom::Headache,
        AnemiaSymptom::HairFall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnemiaSymptom::Fatigue => "fatigue",
            AnemiaSymptom::Dizziness => "dizziness",
            AnemiaSymptom::Breath => "breath",
            AnemiaSymptom::PaleSkin => "pale_skin",
            AnemiaSymptom::Headache => "headache",
            AnemiaSymptom::HairFall => "hair_fall",
        }
    }

    pub fn definition(&self) -> SymptomDefinition {
        let (label, icon) = match self {
            AnemiaSymptom::Fatigue => ("Fatigue", "bolt"),
            AnemiaSymptom::Dizziness => ("Dizziness", "rotate-right"),
            AnemiaSymptom::Breath => ("Shortness of Breath", "air"),
            AnemiaSymptom::PaleSkin => ("Pale Skin", "face"),
            AnemiaSymptom::Headache => ("Headache", "psychology"),
            AnemiaSymptom::HairFall => ("Hair Fall", "content-cut"),
        };
        SymptomDefinition {
            id: self.as_str(),
            label,
            icon,
            category: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PcosCategory {
    Menstrual,
    Physical,
    Metabolic,
    Mood,
}

impl PcosCategory {
    pub const ALL: [PcosCategory; 4] = [
        PcosCategory::Menstrual,
        PcosCategory::Physical,
        PcosCategory::Metabolic,
        PcosCategory::Mood,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PcosCategory::Menstrual => "Menstrual",
            PcosCategory::Physical => "Physical",
            PcosCategory::Metabolic => "Metabolic",
            PcosCategory::Mood => "Mood",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            PcosCategory::Menstrual => "🩸",
            PcosCategory::Physical => "👤",
            PcosCategory::Metabolic => "⚡",
            PcosCategory::Mood => "🧠",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PcosSymptom {
    CycleIrregular,
    MissedPeriod,
    HeavyBleeding,
    WeightChange,
    Acne,
    FacialHair,
    HairThinning,
    SugarCravings,
    Fatigue,
    Irritability,
    Anxiety,
}

impl PcosSymptom {
    pub const ALL: [PcosSymptom; 11] = [
        PcosSymptom::CycleIrregular,
        PcosSymptom::MissedPeriod,
        PcosSymptom::HeavyBleeding,
        PcosSymptom::WeightChange,
        PcosSymptom::Acne,
        PcosSymptom::FacialHair,
        PcosSymptom::HairThinning,
        PcosSymptom::SugarCravings,
        PcosSymptom::Fatigue,
        PcosSymptom::Irritability,
        PcosSymptom::Anxiety,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PcosSymptom::CycleIrregular => "cycle_irregular",
            PcosSymptom::MissedPeriod => "missed_period",
            PcosSymptom::HeavyBleeding => "heavy_bleeding",
            PcosSymptom::WeightChange => "weight_change",
            PcosSymptom::Acne => "acne",
            PcosSymptom::FacialHair => "facial_hair",
            PcosSymptom::HairThinning => "hair_thinning",
            PcosSymptom::SugarCravings => "sugar_cravings",
            PcosSymptom::Fatigue => "fatigue",
            PcosSymptom::Irritability => "irritability",
            PcosSymptom::Anxiety => "anxiety",
        }
    }

    pub fn category(&self) -> PcosCategory {
        match self {
            PcosSymptom::CycleIrregular | PcosSymptom::MissedPeriod | PcosSymptom::HeavyBleeding => {
                PcosCategory::Menstrual
            }
            PcosSymptom::WeightChange
            | PcosSymptom::Acne
            | PcosSymptom::FacialHair
            | PcosSymptom::HairThinning => PcosCategory::Physical,
            PcosSymptom::SugarCravings | PcosSymptom::Fatigue => PcosCategory::Metabolic,
            PcosSymptom::Irritability | PcosSymptom::Anxiety => PcosCategory::Mood,
        }
    }

    pub fn definition(&self) -> SymptomDefinition {
        let (label, icon) = match self {
            PcosSymptom::CycleIrregular => ("Irregular Cycles", "event-busy"),
            PcosSymptom::MissedPeriod => ("Missed Periods", "event-available"),
            PcosSymptom::HeavyBleeding => ("Heavy Bleeding", "water-drop"),
            PcosSymptom::WeightChange => ("Weight Changes", "monitor-weight"),
            PcosSymptom::Acne => ("Acne", "healing"),
            PcosSymptom::FacialHair => ("Facial Hair Growth", "face-retouching-natural"),
            PcosSymptom::HairThinning => ("Hair Thinning", "content-cut"),
            PcosSymptom::SugarCravings => ("Sugar Cravings", "cake"),
            PcosSymptom::Fatigue => ("Fatigue", "bolt"),
            PcosSymptom::Irritability => ("Irritability", "mood-bad"),
            PcosSymptom::Anxiety => ("Anxiety", "psychology"),
        };
        SymptomDefinition {
            id: self.as_str(),
            label,
            icon,
            category: Some(self.category()),
        }
    }

    pub fn by_category(category: PcosCategory) -> Vec<PcosSymptom> {
        Self::ALL
            .iter()
            .copied()
            .filter(|symptom| symptom.category() == category)
            .collect()
    }
}
