use crate::analytics::{
    InsightSummary, ScorePolarity, ScoreTally, Tracker, WeekWindows, WeeklySummary,
};
use crate::domain::models::{AnemiaLogEntry, RiskLevel, Trend};
use crate::domain::options::{IronFoodFrequency, Severity, SupplementUsage};
use crate::domain::symptoms::AnemiaSymptom;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const HEMOGLOBIN_MAX_SCORE: u32 = 4;
const SEVERE_SYMPTOM_ALERT_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnemiaInsights {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub trend: Trend,
    pub alerts: Vec<String>,
    pub week_avg: u8,
    pub prev_week_avg: u8,
}

/// Lower hemoglobin scores higher.
fn hemoglobin_score(hemoglobin: f64) -> u32 {
    if hemoglobin < 7.0 {
        4
    } else if hemoglobin < 10.0 {
        3
    } else if hemoglobin < 12.0 {
        1
    } else {
        0
    }
}

pub fn compute_daily_risk_score(entry: &AnemiaLogEntry) -> u8 {
    let mut tally = ScoreTally::default();

    for symptom in AnemiaSymptom::ALL {
        tally.add(entry.severity(symptom).score(), Severity::MAX_SCORE);
    }

    tally.add(
        entry.iron_food_frequency.score(),
        IronFoodFrequency::MAX_SCORE,
    );
    tally.add(entry.supplement_usage.score(), SupplementUsage::MAX_SCORE);

    if let Some(hemoglobin) = entry.hemoglobin {
        tally.add(hemoglobin_score(hemoglobin), HEMOGLOBIN_MAX_SCORE);
    }

    tally.percent()
}

pub fn risk_level(week_avg: u8) -> RiskLevel {
    if week_avg > 60 {
        RiskLevel::High
    } else if week_avg > 30 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn risk_color(score: u8) -> &'static str {
    if score > 60 {
        "#ef4444"
    } else if score > 30 {
        "#f59e0b"
    } else {
        "#10b981"
    }
}

pub fn generate_anemia_insights(logs: &[AnemiaLogEntry], today: NaiveDate) -> AnemiaInsights {
    let windows = WeekWindows::split(logs, today);
    let summary = WeeklySummary::compute(&windows);
    let risk_level = risk_level(summary.week_avg);

    let mut alerts = Vec::new();
    if risk_level == RiskLevel::High {
        alerts.push("Your anemia risk is elevated. Consider consulting a doctor.".to_string());
    }
    if summary.trend == Trend::Worsening {
        alerts.push("Symptoms are worsening compared to last week.".to_string());
    }
    if let Some(latest) = windows.latest_this_week() {
        if latest.severe_count() >= SEVERE_SYMPTOM_ALERT_COUNT {
            alerts.push(
                "Multiple severe symptoms detected. Please seek medical attention.".to_string(),
            );
        }
    }

    AnemiaInsights {
        risk_score: summary.week_avg,
        risk_level,
        trend: summary.trend,
        alerts,
        week_avg: summary.week_avg,
        prev_week_avg: summary.prev_week_avg,
    }
}

impl InsightSummary for AnemiaInsights {
    fn score(&self) -> u8 {
        self.risk_score
    }

    fn trend(&self) -> Trend {
        self.trend
    }
}

impl Tracker for AnemiaLogEntry {
    type Insights = AnemiaInsights;
    const POLARITY: ScorePolarity = ScorePolarity::HigherIsWorse;

    fn daily_score(&self) -> u8 {
        compute_daily_risk_score(self)
    }

    fn generate_insights(entries: &[Self], today: NaiveDate) -> Self::Insights {
        generate_anemia_insights(entries, today)
    }

    fn score_color(score: u8) -> &'static str {
        risk_color(score)
    }
}
