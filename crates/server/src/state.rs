use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::location::{LocationRepository, LocationService, SeaOrmLocationRepository};

/// Shared handler state. Holds the only path to the location store.
#[derive(Clone)]
pub struct ServerState {
    pub locations: LocationService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn LocationRepository>) -> Self {
        Self { locations: LocationService::new(repo) }
    }

    /// State backed by an opened database connection.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmLocationRepository::new(db)))
    }
}
