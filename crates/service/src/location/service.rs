use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use models::bus_location;

use crate::errors::ServiceError;
use crate::location::domain::{LocationUpdate, UpdateLocationInput};
use crate::location::repository::LocationRepository;

/// Application service for reporting and querying bus positions.
/// Input is validated here, before the repository is touched.
#[derive(Clone)]
pub struct LocationService {
    repo: Arc<dyn LocationRepository>,
}

impl LocationService {
    pub fn new(repo: Arc<dyn LocationRepository>) -> Self { Self { repo } }

    /// Create or overwrite the latest position of a bus.
    #[instrument(skip_all)]
    pub async fn update_location(&self, input: UpdateLocationInput) -> Result<LocationUpdate, ServiceError> {
        let update = input.validate()?;
        if let Err(e) = self.repo.upsert(&update).await {
            warn!(bus_id = %update.bus_id, error = %e, "location_update_failed");
            return Err(e);
        }
        info!(bus_id = %update.bus_id, latitude = update.latitude, longitude = update.longitude, "location_updated");
        Ok(update)
    }

    /// Latest position of one bus; `None` when it never reported.
    #[instrument(skip(self))]
    pub async fn get_location(&self, bus_id: &str) -> Result<Option<bus_location::Model>, ServiceError> {
        let found = self.repo.get(bus_id).await?;
        debug!(found = found.is_some(), "location_lookup");
        Ok(found)
    }

    pub async fn list_locations(&self) -> Result<Vec<bus_location::Model>, ServiceError> {
        let all = self.repo.list().await?;
        debug!(count = all.len(), "location_list");
        Ok(all)
    }
}
