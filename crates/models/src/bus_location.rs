use sea_orm::{entity::prelude::*, sea_query::OnConflict, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Latest known position of one bus. Serializes as
/// `{bus_id, latitude, longitude, timestamp}`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bus_locations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub bus_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_bus_id(bus_id: &str) -> Result<(), errors::ModelError> {
    if bus_id.is_empty() {
        return Err(errors::ModelError::Validation("bus_id required".into()));
    }
    Ok(())
}

pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), errors::ModelError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(errors::ModelError::Validation("coordinates must be finite numbers".into()));
    }
    Ok(())
}

/// Insert the row or replace its position and timestamp in a single statement.
pub async fn upsert<C: ConnectionTrait>(
    db: &C,
    bus_id: &str,
    latitude: f64,
    longitude: f64,
) -> Result<(), errors::ModelError> {
    validate_bus_id(bus_id)?;
    validate_coordinates(latitude, longitude)?;

    let am = ActiveModel {
        bus_id: Set(bus_id.to_string()),
        latitude: Set(latitude),
        longitude: Set(longitude),
        timestamp: Set(Utc::now()),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::BusId)
                .update_columns([Column::Latitude, Column::Longitude, Column::Timestamp])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

pub async fn find<C: ConnectionTrait>(db: &C, bus_id: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(bus_id.to_string())
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All rows, ordered by `bus_id` so repeated listings are stable.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::BusId)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
