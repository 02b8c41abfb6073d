use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::bus_location;

use crate::errors::ServiceError;
use crate::location::domain::LocationUpdate;

/// Storage seam for bus locations. Implementations must apply each upsert as
/// one atomic replace of the row for that bus.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn upsert(&self, update: &LocationUpdate) -> Result<(), ServiceError>;
    async fn get(&self, bus_id: &str) -> Result<Option<bus_location::Model>, ServiceError>;
    async fn list(&self) -> Result<Vec<bus_location::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmLocationRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn upsert(&self, update: &LocationUpdate) -> Result<(), ServiceError> {
        Ok(bus_location::upsert(&self.db, &update.bus_id, update.latitude, update.longitude).await?)
    }

    async fn get(&self, bus_id: &str) -> Result<Option<bus_location::Model>, ServiceError> {
        Ok(bus_location::find(&self.db, bus_id).await?)
    }

    async fn list(&self) -> Result<Vec<bus_location::Model>, ServiceError> {
        Ok(bus_location::list(&self.db).await?)
    }
}
