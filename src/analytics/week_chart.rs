use crate::analytics::Tracker;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

pub const CHART_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DayScore {
    pub date: NaiveDate,
    pub score: u8,
}

/// Daily scores for the seven days ending `today`, oldest first. Days
/// without an entry score 0.
pub fn week_scores<T: Tracker>(entries: &[T], today: NaiveDate) -> Vec<DayScore> {
    (0..CHART_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let score = entries
                .iter()
                .find(|entry| entry.date() == date)
                .map(|entry| entry.daily_score())
                .unwrap_or(0);
            DayScore { date, score }
        })
        .collect()
}
