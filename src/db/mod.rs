pub mod memory;
pub mod postgres;

use crate::analytics::screening::ScreeningRecord;
use crate::domain::models::{TrackerDomain, TrackerEntry, TrackerLog};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("stored {found} entry under {expected}")]
    DomainMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Daily tracker entries, one per (user, domain, date).
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Insert or replace the entry for the log's date.
    async fn upsert(&self, user_id: Uuid, log: TrackerLog) -> StoreResult<()>;
    /// All entries for a domain, oldest first.
    async fn list(&self, user_id: Uuid, domain: TrackerDomain) -> StoreResult<Vec<TrackerLog>>;
    async fn get(
        &self,
        user_id: Uuid,
        domain: TrackerDomain,
        date: NaiveDate,
    ) -> StoreResult<Option<TrackerLog>>;
}

#[async_trait]
pub trait ScreeningStore: Send + Sync {
    async fn insert(&self, user_id: Uuid, record: &ScreeningRecord) -> StoreResult<()>;
    /// Newest first.
    async fn list(&self, user_id: Uuid) -> StoreResult<Vec<ScreeningRecord>>;

    async fn latest(&self, user_id: Uuid) -> StoreResult<Option<ScreeningRecord>> {
        Ok(self.list(user_id).await?.into_iter().next())
    }
}

fn expect_entry<T: TrackerEntry>(log: TrackerLog) -> StoreResult<T> {
    let found = log.domain().as_str();
    T::from_log(log).ok_or(StoreError::DomainMismatch {
        expected: T::DOMAIN.as_str(),
        found,
    })
}

pub async fn save_entry<T: TrackerEntry>(
    store: &dyn LogStore,
    user_id: Uuid,
    entry: T,
) -> StoreResult<()> {
    store.upsert(user_id, entry.into_log()).await
}

pub async fn load_entries<T: TrackerEntry>(
    store: &dyn LogStore,
    user_id: Uuid,
) -> StoreResult<Vec<T>> {
    store
        .list(user_id, T::DOMAIN)
        .await?
        .into_iter()
        .map(expect_entry::<T>)
        .collect()
}

pub async fn load_entry<T: TrackerEntry>(
    store: &dyn LogStore,
    user_id: Uuid,
    date: NaiveDate,
) -> StoreResult<Option<T>> {
    store
        .get(user_id, T::DOMAIN, date)
        .await?
        .map(expect_entry::<T>)
        .transpose()
}
