use crate::domain::options::{
    EnergyLevel, IronFoodFrequency, Mood, Severity, SleepQuality, SupplementUsage,
};
use crate::domain::symptoms::{AnemiaSymptom, PcosSymptom};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrackerDomain {
    Anemia,
    Pcos,
    General,
}

impl TrackerDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerDomain::Anemia => "anemia",
            TrackerDomain::Pcos => "pcos",
            TrackerDomain::General => "general",
        }
    }
}

impl TryFrom<&str> for TrackerDomain {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "anemia" => Ok(TrackerDomain::Anemia),
            "pcos" => Ok(TrackerDomain::Pcos),
            "general" | "wellness" => Ok(TrackerDomain::General),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnemiaLogEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub symptoms: BTreeMap<AnemiaSymptom, Severity>,
    pub iron_food_frequency: IronFoodFrequency,
    pub supplement_usage: SupplementUsage,
    /// g/dL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hemoglobin: Option<f64>,
    #[serde(alias = "timestamp", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl AnemiaLogEntry {
    pub fn severity(&self, symptom: AnemiaSymptom) -> Severity {
        self.symptoms.get(&symptom).copied().unwrap_or_default()
    }

    pub fn severe_count(&self) -> usize {
        self.symptoms
            .values()
            .filter(|severity| **severity == Severity::Severe)
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PcosLogEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub symptoms: BTreeMap<PcosSymptom, Severity>,
    /// Days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_length: Option<u32>,
    #[serde(alias = "timestamp", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl PcosLogEntry {
    pub fn severity(&self, symptom: PcosSymptom) -> Severity {
        self.symptoms.get(&symptom).copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralLogEntry {
    pub date: NaiveDate,
    pub sleep_hours: f64,
    pub sleep_quality: SleepQuality,
    pub mood: Mood,
    pub energy: EnergyLevel,
    pub water_glasses: u32,
    pub exercise_minutes: u32,
    pub screen_time_hours: f64,
    #[serde(alias = "timestamp", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl GeneralLogEntry {
    /// Under six hours or rated poor.
    pub fn is_poor_sleep(&self) -> bool {
        self.sleep_hours < 6.0 || self.sleep_quality == SleepQuality::Poor
    }
}

/// A daily entry from any tracker, tagged with its domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "domain", rename_all = "snake_case")]
pub enum TrackerLog {
    Anemia(AnemiaLogEntry),
    Pcos(PcosLogEntry),
    General(GeneralLogEntry),
}

impl TrackerLog {
    pub fn domain(&self) -> TrackerDomain {
        match self {
            TrackerLog::Anemia(_) => TrackerDomain::Anemia,
            TrackerLog::Pcos(_) => TrackerDomain::Pcos,
            TrackerLog::General(_) => TrackerDomain::General,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            TrackerLog::Anemia(entry) => entry.date,
            TrackerLog::Pcos(entry) => entry.date,
            TrackerLog::General(entry) => entry.date,
        }
    }

    /// Untagged entry body, as stored in a `data` column.
    pub fn to_data(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            TrackerLog::Anemia(entry) => serde_json::to_value(entry),
            TrackerLog::Pcos(entry) => serde_json::to_value(entry),
            TrackerLog::General(entry) => serde_json::to_value(entry),
        }
    }

    pub fn from_data(domain: TrackerDomain, data: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match domain {
            TrackerDomain::Anemia => TrackerLog::Anemia(serde_json::from_value(data)?),
            TrackerDomain::Pcos => TrackerLog::Pcos(serde_json::from_value(data)?),
            TrackerDomain::General => TrackerLog::General(serde_json::from_value(data)?),
        })
    }
}

/// Typed access to one tracker's entries inside the shared log store.
pub trait TrackerEntry: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const DOMAIN: TrackerDomain;

    fn date(&self) -> NaiveDate;
    fn into_log(self) -> TrackerLog;
    fn from_log(log: TrackerLog) -> Option<Self>;
}

impl TrackerEntry for AnemiaLogEntry {
    const DOMAIN: TrackerDomain = TrackerDomain::Anemia;

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn into_log(self) -> TrackerLog {
        TrackerLog::Anemia(self)
    }

    fn from_log(log: TrackerLog) -> Option<Self> {
        match log {
            TrackerLog::Anemia(entry) => Some(entry),
            _ => None,
        }
    }
}

impl TrackerEntry for PcosLogEntry {
    const DOMAIN: TrackerDomain = TrackerDomain::Pcos;

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn into_log(self) -> TrackerLog {
        TrackerLog::Pcos(self)
    }

    fn from_log(log: TrackerLog) -> Option<Self> {
        match log {
            TrackerLog::Pcos(entry) => Some(entry),
            _ => None,
        }
    }
}

impl TrackerEntry for GeneralLogEntry {
    const DOMAIN: TrackerDomain = TrackerDomain::General;

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn into_log(self) -> TrackerLog {
        TrackerLog::General(self)
    }

    fn from_log(log: TrackerLog) -> Option<Self> {
        match log {
            TrackerLog::General(entry) => Some(entry),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WellnessLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Stable,
    Worsening,
    #[serde(rename = "Not enough data")]
    NotEnoughData,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "Improving",
            Trend::Stable => "Stable",
            Trend::Worsening => "Worsening",
            Trend::NotEnoughData => "Not enough data",
        }
    }
}
