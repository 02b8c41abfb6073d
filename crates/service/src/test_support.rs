#![cfg(test)]
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use configs::DatabaseConfig;
use models::bus_location;

use crate::errors::ServiceError;
use crate::location::{LocationRepository, LocationUpdate};

/// Migrated database on a fresh SQLite file, one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let dir = std::env::temp_dir().join("bus-tracker-test-data");
    tokio::fs::create_dir_all(&dir).await?;
    let file = dir.join(format!("svc-{}.db", uuid::Uuid::new_v4()));
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", file.display()),
        ..DatabaseConfig::default()
    };
    models::db::open(&cfg).await
}

/// Map-backed repository with a switch to make every call fail.
#[derive(Default)]
pub struct InMemoryLocationRepository {
    rows: RwLock<HashMap<String, bus_location::Model>>,
    failing: AtomicBool,
    writes: AtomicUsize,
}

impl InMemoryLocationRepository {
    pub const FAILURE_MESSAGE: &'static str = "disk I/O error";

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of upserts that reached this repository.
    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ServiceError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ServiceError::Storage(Self::FAILURE_MESSAGE.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn upsert(&self, update: &LocationUpdate) -> Result<(), ServiceError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let row = bus_location::Model {
            bus_id: update.bus_id.clone(),
            latitude: update.latitude,
            longitude: update.longitude,
            timestamp: Utc::now(),
        };
        self.rows.write().await.insert(update.bus_id.clone(), row);
        Ok(())
    }

    async fn get(&self, bus_id: &str) -> Result<Option<bus_location::Model>, ServiceError> {
        self.check()?;
        Ok(self.rows.read().await.get(bus_id).cloned())
    }

    async fn list(&self) -> Result<Vec<bus_location::Model>, ServiceError> {
        self.check()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }
}
