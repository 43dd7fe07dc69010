use crate::analytics::{
    InsightSummary, ScorePolarity, ScoreTally, Tracker, WeekWindows, WeeklySummary,
};
use crate::domain::models::{GeneralLogEntry, Trend, WellnessLevel};
use crate::domain::options::{EnergyLevel, Mood, SleepQuality};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const BANDED_MAX_SCORE: u32 = 3;

/// Badge text shown when the burnout flag is raised.
pub const BURNOUT_BADGE: &str = "BURNOUT RISK DETECTED";

const BURNOUT_ALERT: &str =
    "⚠️ Burnout risk detected. Consider taking a break and practicing self-care.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralInsights {
    pub lifestyle_score: u8,
    pub score_level: WellnessLevel,
    pub trend: Trend,
    pub burnout_risk: bool,
    pub alerts: Vec<String>,
    pub week_avg: u8,
    pub prev_week_avg: u8,
}

fn sleep_hours_score(hours: f64) -> u32 {
    if (7.0..=9.0).contains(&hours) {
        3
    } else if hours >= 6.0 {
        2
    } else if hours >= 5.0 {
        1
    } else {
        0
    }
}

fn water_score(glasses: u32) -> u32 {
    match glasses {
        8.. => 3,
        5..=7 => 2,
        3..=4 => 1,
        _ => 0,
    }
}

fn exercise_score(minutes: u32) -> u32 {
    match minutes {
        30.. => 3,
        15..=29 => 2,
        1..=14 => 1,
        0 => 0,
    }
}

fn screen_time_score(hours: f64) -> u32 {
    if hours <= 3.0 {
        3
    } else if hours <= 5.0 {
        2
    } else if hours <= 7.0 {
        1
    } else {
        0
    }
}

pub fn compute_daily_score(entry: &GeneralLogEntry) -> u8 {
    let mut tally = ScoreTally::default();
    tally.add(sleep_hours_score(entry.sleep_hours), BANDED_MAX_SCORE);
    tally.add(entry.sleep_quality.score(), SleepQuality::MAX_SCORE);
    tally.add(entry.mood.score(), Mood::MAX_SCORE);
    tally.add(entry.energy.score(), EnergyLevel::MAX_SCORE);
    tally.add(water_score(entry.water_glasses), BANDED_MAX_SCORE);
    tally.add(exercise_score(entry.exercise_minutes), BANDED_MAX_SCORE);
    tally.add(screen_time_score(entry.screen_time_hours), BANDED_MAX_SCORE);
    tally.percent()
}

pub fn wellness_level(week_avg: u8) -> WellnessLevel {
    if week_avg >= 75 {
        WellnessLevel::Excellent
    } else if week_avg >= 55 {
        WellnessLevel::Good
    } else if week_avg >= 35 {
        WellnessLevel::Fair
    } else {
        WellnessLevel::Poor
    }
}

pub fn score_color(score: u8) -> &'static str {
    if score >= 75 {
        "#10b981"
    } else if score >= 55 {
        "#7ed3d4"
    } else if score >= 35 {
        "#f59e0b"
    } else {
        "#ef4444"
    }
}

/// Day counts over the trailing week that drive burnout and habit alerts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct WeekHabits {
    days: usize,
    low_mood: usize,
    poor_sleep: usize,
    low_water: usize,
    no_exercise: usize,
}

impl WeekHabits {
    fn tally(entries: &[&GeneralLogEntry]) -> Self {
        let count = |pred: fn(&GeneralLogEntry) -> bool| entries.iter().filter(|e| pred(e)).count();
        Self {
            days: entries.len(),
            low_mood: count(|e| e.mood.is_low()),
            poor_sleep: count(GeneralLogEntry::is_poor_sleep),
            low_water: count(|e| e.water_glasses < 4),
            no_exercise: count(|e| e.exercise_minutes == 0),
        }
    }

    fn burnout_risk(&self) -> bool {
        self.low_mood >= 4 || (self.low_mood >= 2 && self.poor_sleep >= 3)
    }
}

pub fn generate_general_insights(logs: &[GeneralLogEntry], today: NaiveDate) -> GeneralInsights {
    let windows = WeekWindows::split(logs, today);
    let summary = WeeklySummary::compute(&windows);
    let score_level = wellness_level(summary.week_avg);

    let habits = WeekHabits::tally(&windows.this_week);
    let burnout_risk = habits.burnout_risk();

    let mut alerts = Vec::new();
    if burnout_risk {
        alerts.push(BURNOUT_ALERT.to_string());
    }
    if habits.poor_sleep >= 3 {
        alerts.push(format!(
            "Poor sleep detected for {} of last {} days. Try a consistent sleep routine.",
            habits.poor_sleep, habits.days
        ));
    }
    if habits.low_mood >= 3 {
        alerts.push(format!(
            "High stress for {} days. Consider relaxation techniques like meditation or deep breathing.",
            habits.low_mood
        ));
    }
    if habits.low_water >= 3 {
        alerts.push("💧 Low water intake this week. Aim for 8 glasses daily.".to_string());
    }
    if habits.no_exercise >= 4 {
        alerts.push("🏃 Very little exercise this week. Even 15 min of walking helps!".to_string());
    }
    if summary.week_avg < 35 && summary.this_week_days >= 3 {
        alerts.push(
            "💡 Your lifestyle score is low. Small daily improvements can make a big difference."
                .to_string(),
        );
    }

    GeneralInsights {
        lifestyle_score: summary.week_avg,
        score_level,
        trend: summary.trend,
        burnout_risk,
        alerts,
        week_avg: summary.week_avg,
        prev_week_avg: summary.prev_week_avg,
    }
}

impl InsightSummary for GeneralInsights {
    fn score(&self) -> u8 {
        self.lifestyle_score
    }

    fn trend(&self) -> Trend {
        self.trend
    }
}

impl Tracker for GeneralLogEntry {
    type Insights = GeneralInsights;
    const POLARITY: ScorePolarity = ScorePolarity::HigherIsBetter;

    fn daily_score(&self) -> u8 {
        compute_daily_score(self)
    }

    fn generate_insights(entries: &[Self], today: NaiveDate) -> Self::Insights {
        generate_general_insights(entries, today)
    }

    fn score_color(score: u8) -> &'static str {
        score_color(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{days_ago, stamp, today};

    fn great_day(date: NaiveDate) -> GeneralLogEntry {
        GeneralLogEntry {
            date,
            sleep_hours: 8.0,
            sleep_quality: SleepQuality::Great,
            mood: Mood::Happy,
            energy: EnergyLevel::High,
            water_glasses: 8,
            exercise_minutes: 45,
            screen_time_hours: 2.0,
            created_at: stamp(),
        }
    }

    fn rough_day(date: NaiveDate) -> GeneralLogEntry {
        GeneralLogEntry {
            date,
            sleep_hours: 4.0,
            sleep_quality: SleepQuality::Poor,
            mood: Mood::Sad,
            energy: EnergyLevel::Low,
            water_glasses: 1,
            exercise_minutes: 0,
            screen_time_hours: 10.0,
            created_at: stamp(),
        }
    }

    #[test]
    fn test_score_extremes() {
        assert_eq!(compute_daily_score(&great_day(today())), 100);
        assert_eq!(compute_daily_score(&rough_day(today())), 0);
    }

    #[test]
    fn test_sleep_hours_bands() {
        assert_eq!(sleep_hours_score(7.0), 3);
        assert_eq!(sleep_hours_score(9.0), 3);
        assert_eq!(sleep_hours_score(10.5), 2);
        assert_eq!(sleep_hours_score(6.5), 2);
        assert_eq!(sleep_hours_score(5.0), 1);
        assert_eq!(sleep_hours_score(4.9), 0);
    }

    #[test]
    fn test_lifestyle_bands() {
        assert_eq!(water_score(8), 3);
        assert_eq!(water_score(5), 2);
        assert_eq!(water_score(3), 1);
        assert_eq!(water_score(2), 0);
        assert_eq!(exercise_score(30), 3);
        assert_eq!(exercise_score(15), 2);
        assert_eq!(exercise_score(1), 1);
        assert_eq!(exercise_score(0), 0);
        assert_eq!(screen_time_score(3.0), 3);
        assert_eq!(screen_time_score(5.0), 2);
        assert_eq!(screen_time_score(7.0), 1);
        assert_eq!(screen_time_score(7.5), 0);
    }

    #[test]
    fn test_mixed_day_score() {
        // 2 + 2 + 2 + 1 + 2 + 1 + 2 = 12 of 20
        let day = GeneralLogEntry {
            sleep_hours: 6.0,
            sleep_quality: SleepQuality::Good,
            mood: Mood::Neutral,
            energy: EnergyLevel::Medium,
            water_glasses: 5,
            exercise_minutes: 10,
            screen_time_hours: 4.0,
            ..great_day(today())
        };
        assert_eq!(compute_daily_score(&day), 60);
    }

    #[test]
    fn test_four_stressed_days_raise_burnout() {
        let logs: Vec<_> = (0..4)
            .map(|d| GeneralLogEntry {
                mood: Mood::Stressed,
                ..great_day(days_ago(d))
            })
            .collect();
        let insights = generate_general_insights(&logs, today());
        assert!(insights.burnout_risk);
        assert_eq!(insights.alerts[0], BURNOUT_ALERT);
        assert!(insights.alerts[0]
            .to_uppercase()
            .contains(BURNOUT_BADGE));
        assert!(insights
            .alerts
            .contains(&"High stress for 4 days. Consider relaxation techniques like meditation or deep breathing.".to_string()));
    }

    #[test]
    fn test_two_low_moods_with_poor_sleep_raise_burnout() {
        let logs = vec![
            GeneralLogEntry {
                mood: Mood::Sad,
                sleep_hours: 5.0,
                ..great_day(days_ago(0))
            },
            GeneralLogEntry {
                mood: Mood::Stressed,
                ..great_day(days_ago(1))
            },
            GeneralLogEntry {
                sleep_quality: SleepQuality::Poor,
                ..great_day(days_ago(2))
            },
            GeneralLogEntry {
                sleep_hours: 5.5,
                ..great_day(days_ago(3))
            },
        ];
        let insights = generate_general_insights(&logs, today());
        assert!(insights.burnout_risk);
        assert_eq!(
            insights.alerts[1],
            "Poor sleep detected for 3 of last 4 days. Try a consistent sleep routine."
        );
    }

    #[test]
    fn test_two_low_moods_alone_are_not_burnout() {
        let logs = vec![
            GeneralLogEntry {
                mood: Mood::Sad,
                ..great_day(days_ago(0))
            },
            GeneralLogEntry {
                mood: Mood::Stressed,
                ..great_day(days_ago(1))
            },
            great_day(days_ago(2)),
        ];
        let insights = generate_general_insights(&logs, today());
        assert!(!insights.burnout_risk);
        assert!(insights.alerts.is_empty());
        assert_eq!(insights.trend, Trend::Stable);
    }

    #[test]
    fn test_old_stress_does_not_count() {
        let logs: Vec<_> = (8..12)
            .map(|d| GeneralLogEntry {
                mood: Mood::Stressed,
                ..great_day(days_ago(d))
            })
            .collect();
        assert!(!generate_general_insights(&logs, today()).burnout_risk);
    }

    #[test]
    fn test_rough_week_alerts() {
        let logs: Vec<_> = (0..4).map(|d| rough_day(days_ago(d))).collect();
        let insights = generate_general_insights(&logs, today());
        assert_eq!(insights.score_level, WellnessLevel::Poor);
        assert_eq!(
            insights.alerts,
            vec![
                BURNOUT_ALERT.to_string(),
                "Poor sleep detected for 4 of last 4 days. Try a consistent sleep routine."
                    .to_string(),
                "High stress for 4 days. Consider relaxation techniques like meditation or deep breathing."
                    .to_string(),
                "💧 Low water intake this week. Aim for 8 glasses daily.".to_string(),
                "🏃 Very little exercise this week. Even 15 min of walking helps!".to_string(),
                "💡 Your lifestyle score is low. Small daily improvements can make a big difference."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_higher_score_is_improving() {
        let logs = vec![
            great_day(days_ago(0)),
            great_day(days_ago(1)),
            rough_day(days_ago(8)),
            rough_day(days_ago(9)),
        ];
        let insights = generate_general_insights(&logs, today());
        assert_eq!(insights.trend, Trend::Improving);
        assert_eq!(insights.score_level, WellnessLevel::Excellent);
        assert_eq!(insights.prev_week_avg, 0);

        let reversed = vec![
            rough_day(days_ago(0)),
            rough_day(days_ago(1)),
            great_day(days_ago(8)),
            great_day(days_ago(9)),
        ];
        assert_eq!(
            generate_general_insights(&reversed, today()).trend,
            Trend::Worsening
        );
    }

    #[test]
    fn test_empty_history() {
        let insights = generate_general_insights(&[], today());
        assert_eq!(insights.lifestyle_score, 0);
        assert_eq!(insights.score_level, WellnessLevel::Poor);
        assert_eq!(insights.trend, Trend::NotEnoughData);
        assert!(!insights.burnout_risk);
        assert!(insights.alerts.is_empty());
    }

    #[test]
    fn test_entry_and_insights_json_roundtrip() {
        let entry = great_day(today());
        let json = serde_json::to_string(&entry).unwrap();
        let restored: GeneralLogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, entry);

        let insights = generate_general_insights(&[entry], today());
        let json = serde_json::to_string(&insights).unwrap();
        let restored: GeneralInsights = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, insights);
    }
}
