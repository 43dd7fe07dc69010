use crate::analytics::screening::ScreeningRecord;
use crate::db::{LogStore, ScreeningStore, StoreResult};
use crate::domain::models::{TrackerDomain, TrackerLog};
use crate::domain::questionnaire::{QuestionnaireAnswers, TestRecommendation};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// seq breaks created_at ties in insertion order
const SELECT_SCREENINGS: &str = "SELECT id, kind, condition, risk, confidence, tests, answers, created_at \
     FROM screenings WHERE user_id = $1 ORDER BY created_at DESC, seq DESC";

/// Reads a label column such as "Thyroid Disorder" back into its enum.
fn parse_label<T: DeserializeOwned>(label: String) -> serde_json::Result<T> {
    serde_json::from_value(serde_json::Value::String(label))
}

fn screening_from_row(row: &PgRow) -> StoreResult<ScreeningRecord> {
    let confidence: i16 = row.try_get("confidence")?;
    Ok(ScreeningRecord {
        id: row.try_get("id")?,
        kind: row.try_get("kind")?,
        condition: parse_label(row.try_get("condition")?)?,
        risk: parse_label(row.try_get("risk")?)?,
        confidence: confidence.clamp(0, 100) as u8,
        tests: row.try_get::<Json<Vec<TestRecommendation>>, _>("tests")?.0,
        answers: row.try_get::<Json<QuestionnaireAnswers>, _>("answers")?.0,
        timestamp: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

#[async_trait]
impl LogStore for PgStore {
    async fn upsert(&self, user_id: Uuid, log: TrackerLog) -> StoreResult<()> {
        let data = log.to_data()?;
        sqlx::query(
            r#"
            INSERT INTO tracker_logs (user_id, domain, log_date, data)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, domain, log_date) DO UPDATE
            SET data = $4,
                updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(log.domain().as_str())
        .bind(log.date())
        .bind(Json(data))
        .execute(&self.pool)
        .await?;
        tracing::debug!(%user_id, domain = log.domain().as_str(), date = %log.date(), "tracker log saved");
        Ok(())
    }

    async fn list(&self, user_id: Uuid, domain: TrackerDomain) -> StoreResult<Vec<TrackerLog>> {
        let rows = sqlx::query(
            r#"
            SELECT data
            FROM tracker_logs
            WHERE user_id = $1 AND domain = $2
            ORDER BY log_date ASC
            "#,
        )
        .bind(user_id)
        .bind(domain.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> StoreResult<TrackerLog> {
                let data: Json<serde_json::Value> = row.try_get("data")?;
                Ok(TrackerLog::from_data(domain, data.0)?)
            })
            .collect()
    }

    async fn get(
        &self,
        user_id: Uuid,
        domain: TrackerDomain,
        date: NaiveDate,
    ) -> StoreResult<Option<TrackerLog>> {
        let row = sqlx::query(
            r#"
            SELECT data
            FROM tracker_logs
            WHERE user_id = $1 AND domain = $2 AND log_date = $3
            "#,
        )
        .bind(user_id)
        .bind(domain.as_str())
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let data: Json<serde_json::Value> = row.try_get("data")?;
                Ok(Some(TrackerLog::from_data(domain, data.0)?))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ScreeningStore for PgStore {
    async fn insert(&self, user_id: Uuid, record: &ScreeningRecord) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO screenings
                (id, user_id, kind, condition, risk, confidence, tests, answers, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(record.id)
        .bind(user_id)
        .bind(&record.kind)
        .bind(record.condition.label())
        .bind(record.risk.as_str())
        .bind(record.confidence as i16)
        .bind(Json(&record.tests))
        .bind(Json(&record.answers))
        .bind(record.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list(&self, user_id: Uuid) -> StoreResult<Vec<ScreeningRecord>> {
        let rows = sqlx::query(SELECT_SCREENINGS)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(screening_from_row).collect()
    }

    async fn latest(&self, user_id: Uuid) -> StoreResult<Option<ScreeningRecord>> {
        let sql = format!("{SELECT_SCREENINGS} LIMIT 1");
        let row = sqlx::query(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(screening_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::RiskLevel;
    use crate::domain::questionnaire::Condition;

    #[test]
    fn test_labels_parse_back() {
        let condition: Condition = parse_label("Iron Deficiency".to_string()).unwrap();
        assert_eq!(condition, Condition::IronDeficiency);
        let risk: RiskLevel = parse_label("Medium".to_string()).unwrap();
        assert_eq!(risk, RiskLevel::Medium);
        assert!(parse_label::<Condition>("Scurvy".to_string()).is_err());
    }

    #[test]
    fn test_screenings_order_breaks_timestamp_ties() {
        assert!(SELECT_SCREENINGS.ends_with("ORDER BY created_at DESC, seq DESC"));
        let schema = include_str!("../../migrations/0001_init.sql");
        assert!(schema.contains("seq BIGSERIAL NOT NULL"));
        assert!(schema.contains("(user_id, created_at DESC, seq DESC)"));
    }
}
