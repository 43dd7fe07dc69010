use crate::analytics::screening::ScreeningRecord;
use crate::db::{LogStore, ScreeningStore, StoreResult};
use crate::domain::models::{TrackerDomain, TrackerLog};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use uuid::Uuid;

type LogKey = (Uuid, TrackerDomain);

/// Process-local store used when no database is configured, and in tests.
#[derive(Default)]
pub struct MemoryStore {
    logs: RwLock<HashMap<LogKey, BTreeMap<NaiveDate, TrackerLog>>>,
    screenings: RwLock<HashMap<Uuid, Vec<ScreeningRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LogStore for MemoryStore {
    async fn upsert(&self, user_id: Uuid, log: TrackerLog) -> StoreResult<()> {
        let mut logs = self.logs.write().await;
        logs.entry((user_id, log.domain()))
            .or_default()
            .insert(log.date(), log);
        Ok(())
    }

    async fn list(&self, user_id: Uuid, domain: TrackerDomain) -> StoreResult<Vec<TrackerLog>> {
        let logs = self.logs.read().await;
        Ok(logs
            .get(&(user_id, domain))
            .map(|by_date| by_date.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn get(
        &self,
        user_id: Uuid,
        domain: TrackerDomain,
        date: NaiveDate,
    ) -> StoreResult<Option<TrackerLog>> {
        let logs = self.logs.read().await;
        Ok(logs
            .get(&(user_id, domain))
            .and_then(|by_date| by_date.get(&date))
            .cloned())
    }
}

#[async_trait]
impl ScreeningStore for MemoryStore {
    async fn insert(&self, user_id: Uuid, record: &ScreeningRecord) -> StoreResult<()> {
        let mut screenings = self.screenings.write().await;
        screenings.entry(user_id).or_default().push(record.clone());
        Ok(())
    }

    async fn list(&self, user_id: Uuid) -> StoreResult<Vec<ScreeningRecord>> {
        let screenings = self.screenings.read().await;
        let mut records = screenings.get(&user_id).cloned().unwrap_or_default();
        // later inserts win timestamp ties
        records.reverse();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }
}
