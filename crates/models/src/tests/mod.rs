
/// Upsert/find/list behaviour of `bus_location`
pub mod crud_tests;


use std::path::PathBuf;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// Fresh SQLite file under the system temp dir, unique per call.
pub fn temp_db_config() -> DatabaseConfig {
    let dir: PathBuf = std::env::temp_dir().join("bus-tracker-test-data");
    std::fs::create_dir_all(&dir).expect("create test data dir");
    let file = dir.join(format!("{}.db", Uuid::new_v4()));
    DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", file.display()),
        ..DatabaseConfig::default()
    }
}

/// Open a migrated database backed by a fresh file.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    crate::db::open(&temp_db_config()).await
}
