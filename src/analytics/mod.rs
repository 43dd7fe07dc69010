pub mod anemia;
pub mod general;
pub mod pcos;
pub mod screening;
pub mod week_chart;

use crate::domain::models::{TrackerEntry, Trend};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Minimum scored days per window before two weeks are compared.
const TREND_MIN_DAYS: usize = 2;
/// Current-week days that make a lone week count as stable.
const STABLE_MIN_DAYS: usize = 3;
/// Average change, in points, that counts as movement.
const TREND_THRESHOLD: i32 = 5;

/// Weighted-sum accumulator behind every daily score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTally {
    pub total: u32,
    pub max: u32,
}

impl ScoreTally {
    pub fn add(&mut self, score: u32, max: u32) {
        self.total += score;
        self.max += max;
    }

    /// 0-100, rounded half up; 0 when nothing was scorable.
    pub fn percent(&self) -> u8 {
        if self.max == 0 {
            return 0;
        }
        let pct = (self.total as f64 / self.max as f64 * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }
}

/// Whether a rising score means the user is doing better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorePolarity {
    HigherIsWorse,
    HigherIsBetter,
}

/// Headline figures every insight result exposes.
pub trait InsightSummary {
    fn score(&self) -> u8;
    fn trend(&self) -> Trend;
}

/// A tracker domain the insight pipeline knows how to score.
pub trait Tracker: TrackerEntry {
    type Insights: InsightSummary + Serialize + Send;
    const POLARITY: ScorePolarity;

    fn daily_score(&self) -> u8;
    fn generate_insights(entries: &[Self], today: NaiveDate) -> Self::Insights;
    fn score_color(score: u8) -> &'static str;
}

/// Entries split into the trailing seven days and the seven before them,
/// each sorted ascending by date.
#[derive(Debug)]
pub struct WeekWindows<'a, E> {
    pub this_week: Vec<&'a E>,
    pub previous_week: Vec<&'a E>,
}

impl<'a, E: TrackerEntry> WeekWindows<'a, E> {
    pub fn split(entries: &'a [E], today: NaiveDate) -> Self {
        let week_ago = today - Duration::days(7);
        let two_weeks_ago = today - Duration::days(14);

        let mut sorted: Vec<&E> = entries.iter().collect();
        sorted.sort_by_key(|entry| entry.date());

        let this_week = sorted
            .iter()
            .copied()
            .filter(|entry| entry.date() >= week_ago)
            .collect();
        let previous_week = sorted
            .iter()
            .copied()
            .filter(|entry| entry.date() >= two_weeks_ago && entry.date() < week_ago)
            .collect();

        Self {
            this_week,
            previous_week,
        }
    }

    pub fn latest_this_week(&self) -> Option<&'a E> {
        self.this_week.last().copied()
    }
}

/// Aggregates shared by every tracker's insight result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySummary {
    pub week_avg: u8,
    pub prev_week_avg: u8,
    pub this_week_days: usize,
    pub prev_week_days: usize,
    pub trend: Trend,
}

impl WeeklySummary {
    pub fn compute<T: Tracker>(windows: &WeekWindows<'_, T>) -> Self {
        let this_scores: Vec<u8> = windows.this_week.iter().map(|e| e.daily_score()).collect();
        let prev_scores: Vec<u8> = windows
            .previous_week
            .iter()
            .map(|e| e.daily_score())
            .collect();

        let week_avg = average_score(&this_scores);
        let prev_week_avg = average_score(&prev_scores);
        let trend = classify_trend(
            this_scores.len(),
            prev_scores.len(),
            week_avg,
            prev_week_avg,
            T::POLARITY,
        );

        Self {
            week_avg,
            prev_week_avg,
            this_week_days: this_scores.len(),
            prev_week_days: prev_scores.len(),
            trend,
        }
    }
}

pub fn average_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|s| *s as u32).sum();
    (sum as f64 / scores.len() as f64).round() as u8
}

pub fn classify_trend(
    this_week_days: usize,
    prev_week_days: usize,
    week_avg: u8,
    prev_week_avg: u8,
    polarity: ScorePolarity,
) -> Trend {
    if this_week_days >= TREND_MIN_DAYS && prev_week_days >= TREND_MIN_DAYS {
        let diff = week_avg as i32 - prev_week_avg as i32;
        let (rising, falling) = match polarity {
            ScorePolarity::HigherIsWorse => (Trend::Worsening, Trend::Improving),
            ScorePolarity::HigherIsBetter => (Trend::Improving, Trend::Worsening),
        };
        if diff > TREND_THRESHOLD {
            rising
        } else if diff < -TREND_THRESHOLD {
            falling
        } else {
            Trend::Stable
        }
    } else if this_week_days >= STABLE_MIN_DAYS {
        Trend::Stable
    } else {
        Trend::NotEnoughData
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TrendDisplay {
    pub icon: &'static str,
    pub color: &'static str,
}

/// Arrow direction follows the score, color follows the meaning.
pub fn trend_display(trend: Trend, polarity: ScorePolarity) -> TrendDisplay {
    let (improving_icon, worsening_icon) = match polarity {
        ScorePolarity::HigherIsWorse => ("trending-down", "trending-up"),
        ScorePolarity::HigherIsBetter => ("trending-up", "trending-down"),
    };
    match trend {
        Trend::Improving => TrendDisplay {
            icon: improving_icon,
            color: "#10b981",
        },
        Trend::Worsening => TrendDisplay {
            icon: worsening_icon,
            color: "#ef4444",
        },
        Trend::Stable => TrendDisplay {
            icon: "trending-flat",
            color: "#f59e0b",
        },
        Trend::NotEnoughData => TrendDisplay {
            icon: "remove",
            color: "#94a3b8",
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escalate_saturates() {
        use crate::domain::options::Severity;
        use test_support::escalate;
        assert_eq!(escalate(Severity::None), Severity::Mild);
        assert_eq!(escalate(Severity::Moderate), Severity::Severe);
        assert_eq!(escalate(Severity::Severe), Severity::Severe);
    }

    #[test]
    fn test_empty_tally_scores_zero() {
        assert_eq!(ScoreTally::default().percent(), 0);
    }

    #[test]
    fn test_tally_rounds_half_up() {
        let mut tally = ScoreTally::default();
        tally.add(1, 8);
        // 12.5 -> 13
        assert_eq!(tally.percent(), 13);
        tally.add(21, 19);
        assert_eq!(tally.percent(), 81);
    }

    #[test]
    fn test_average_rounds() {
        assert_eq!(average_score(&[]), 0);
        assert_eq!(average_score(&[10, 11]), 11);
        assert_eq!(average_score(&[10, 10, 11]), 10);
    }

    #[test]
    fn test_trend_needs_two_days_each_week() {
        let p = ScorePolarity::HigherIsWorse;
        assert_eq!(classify_trend(2, 1, 80, 20, p), Trend::NotEnoughData);
        assert_eq!(classify_trend(1, 5, 80, 20, p), Trend::NotEnoughData);
        assert_eq!(classify_trend(3, 1, 80, 20, p), Trend::Stable);
        assert_eq!(classify_trend(0, 0, 0, 0, p), Trend::NotEnoughData);
    }

    #[test]
    fn test_trend_direction_depends_on_polarity() {
        assert_eq!(
            classify_trend(2, 2, 60, 50, ScorePolarity::HigherIsWorse),
            Trend::Worsening
        );
        assert_eq!(
            classify_trend(2, 2, 60, 50, ScorePolarity::HigherIsBetter),
            Trend::Improving
        );
        assert_eq!(
            classify_trend(2, 2, 40, 50, ScorePolarity::HigherIsWorse),
            Trend::Improving
        );
        assert_eq!(
            classify_trend(2, 2, 40, 50, ScorePolarity::HigherIsBetter),
            Trend::Worsening
        );
    }

    #[test]
    fn test_trend_threshold_is_exclusive() {
        let p = ScorePolarity::HigherIsWorse;
        assert_eq!(classify_trend(2, 2, 55, 50, p), Trend::Stable);
        assert_eq!(classify_trend(2, 2, 45, 50, p), Trend::Stable);
        assert_eq!(classify_trend(2, 2, 56, 50, p), Trend::Worsening);
    }

    #[test]
    fn test_trend_display_per_polarity() {
        let risk = trend_display(Trend::Improving, ScorePolarity::HigherIsWorse);
        assert_eq!(risk.icon, "trending-down");
        let wellness = trend_display(Trend::Improving, ScorePolarity::HigherIsBetter);
        assert_eq!(wellness.icon, "trending-up");
        assert_eq!(risk.color, wellness.color);
        assert_eq!(
            trend_display(Trend::NotEnoughData, ScorePolarity::HigherIsBetter).icon,
            "remove"
        );
    }
}
