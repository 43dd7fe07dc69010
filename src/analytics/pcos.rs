use crate::analytics::{
    InsightSummary, ScorePolarity, ScoreTally, Tracker, WeekWindows, WeeklySummary,
};
use crate::domain::models::{PcosLogEntry, RiskLevel, Trend};
use crate::domain::options::Severity;
use crate::domain::symptoms::PcosSymptom;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const CYCLE_MAX_SCORE: u32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PcosInsights {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub trend: Trend,
    pub alerts: Vec<String>,
    pub week_avg: u8,
    pub prev_week_avg: u8,
    pub pattern_note: Option<String>,
}

/// 21-35 days is normal, 24-32 ideal.
fn cycle_length_score(days: u32) -> u32 {
    if !(21..=35).contains(&days) {
        3
    } else if !(24..=32).contains(&days) {
        1
    } else {
        0
    }
}

pub fn compute_daily_pcos_score(entry: &PcosLogEntry) -> u8 {
    let mut tally = ScoreTally::default();

    for symptom in PcosSymptom::ALL {
        tally.add(entry.severity(symptom).score(), Severity::MAX_SCORE);
    }

    if let Some(days) = entry.cycle_length {
        tally.add(cycle_length_score(days), CYCLE_MAX_SCORE);
    }

    tally.percent()
}

/// Symptom flags the pattern rules are written against.
struct PatternSignals {
    irregular_cycle: bool,
    weight_change: bool,
    acne: bool,
    facial_hair: bool,
    hair_thinning: bool,
}

impl PatternSignals {
    fn from_entry(entry: &PcosLogEntry) -> Self {
        Self {
            irregular_cycle: entry.severity(PcosSymptom::CycleIrregular).is_significant(),
            weight_change: entry.severity(PcosSymptom::WeightChange).is_significant(),
            acne: entry.severity(PcosSymptom::Acne).is_significant(),
            facial_hair: entry.severity(PcosSymptom::FacialHair).is_present(),
            hair_thinning: entry.severity(PcosSymptom::HairThinning).is_significant(),
        }
    }
}

fn cycles_weight_and_acne(s: &PatternSignals) -> bool {
    s.irregular_cycle && s.weight_change && s.acne
}

fn cycles_and_facial_hair(s: &PatternSignals) -> bool {
    s.irregular_cycle && s.facial_hair
}

fn acne_thinning_and_weight(s: &PatternSignals) -> bool {
    s.acne && s.hair_thinning && s.weight_change
}

fn cycles_and_weight(s: &PatternSignals) -> bool {
    s.irregular_cycle && s.weight_change
}

type PatternRule = (fn(&PatternSignals) -> bool, &'static str);

/// Evaluated in order; the first matching rule wins.
const PATTERN_RULES: &[PatternRule] = &[
    (
        cycles_weight_and_acne,
        "Irregular cycles + weight gain + acne → Possible PCOS pattern detected.",
    ),
    (
        cycles_and_facial_hair,
        "Irregular cycles + facial hair → Hormonal imbalance signs detected.",
    ),
    (
        acne_thinning_and_weight,
        "Acne + hair thinning + weight changes → Consider hormonal screening.",
    ),
    (
        cycles_and_weight,
        "Irregular cycles + weight changes → Monitor for PCOS indicators.",
    ),
];

pub fn detect_pattern(entry: &PcosLogEntry) -> Option<&'static str> {
    let signals = PatternSignals::from_entry(entry);
    PATTERN_RULES
        .iter()
        .find(|(matches, _)| matches(&signals))
        .map(|(_, note)| *note)
}

pub fn risk_level(week_avg: u8) -> RiskLevel {
    if week_avg > 55 {
        RiskLevel::High
    } else if week_avg > 28 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn risk_color(score: u8) -> &'static str {
    if score > 55 {
        "#ef4444"
    } else if score > 28 {
        "#f59e0b"
    } else {
        "#10b981"
    }
}

pub fn generate_pcos_insights(logs: &[PcosLogEntry], today: NaiveDate) -> PcosInsights {
    let windows = WeekWindows::split(logs, today);
    let summary = WeeklySummary::compute(&windows);
    let risk_level = risk_level(summary.week_avg);

    let mut alerts = Vec::new();
    if risk_level == RiskLevel::High {
        alerts.push(
            "PCOS risk indicators are elevated. Consider consulting a gynecologist.".to_string(),
        );
    }
    if summary.trend == Trend::Worsening {
        alerts.push("Symptoms trending worse compared to last week.".to_string());
    }

    let latest = windows
        .latest_this_week()
        .or_else(|| logs.iter().max_by_key(|entry| entry.date));
    let pattern_note = latest.and_then(detect_pattern).map(str::to_string);
    if let Some(note) = &pattern_note {
        alerts.push(note.clone());
    }

    if risk_level != RiskLevel::Low {
        alerts.push(
            "💡 Tip: Regular exercise and a low-glycemic diet may help manage PCOS symptoms."
                .to_string(),
        );
    }

    PcosInsights {
        risk_score: summary.week_avg,
        risk_level,
        trend: summary.trend,
        alerts,
        week_avg: summary.week_avg,
        prev_week_avg: summary.prev_week_avg,
        pattern_note,
    }
}

impl InsightSummary for PcosInsights {
    fn score(&self) -> u8 {
        self.risk_score
    }

    fn trend(&self) -> Trend {
        self.trend
    }
}

impl Tracker for PcosLogEntry {
    type Insights = PcosInsights;
    const POLARITY: ScorePolarity = ScorePolarity::HigherIsWorse;

    fn daily_score(&self) -> u8 {
        compute_daily_pcos_score(self)
    }

    fn generate_insights(entries: &[Self], today: NaiveDate) -> Self::Insights {
        generate_pcos_insights(entries, today)
    }

    fn score_color(score: u8) -> &'static str {
        risk_color(score)
    }
}
