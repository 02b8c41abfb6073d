use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use common::types::Success;
use models::bus_location;
use service::{errors::ServiceError, location::UpdateLocationInput};

use crate::{
    errors::{ApiError, BUS_NOT_FOUND},
    observability::{record_lookup, LOCATION_UPDATES_TOTAL, LOCATION_UPDATE_FAILURES_TOTAL},
    state::ServerState,
};

/// Report the current position of a bus. Also served at the legacy `/update` path.
#[utoipa::path(
    post, path = "/update-location", tag = "locations",
    request_body = crate::openapi::UpdateLocationRequestDoc,
    responses(
        (status = 200, description = "Stored", body = crate::openapi::SuccessDoc),
        (status = 400, description = "Missing busId, latitude, or longitude", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_location(
    State(state): State<ServerState>,
    payload: Result<Json<UpdateLocationInput>, JsonRejection>,
) -> Result<Json<Success>, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        LOCATION_UPDATE_FAILURES_TOTAL.inc();
        ApiError::from(rejection)
    })?;
    match state.locations.update_location(input).await {
        Ok(_) => {
            LOCATION_UPDATES_TOTAL.inc();
            Ok(Json(Success::ok()))
        }
        Err(e) => {
            LOCATION_UPDATE_FAILURES_TOTAL.inc();
            Err(e.into())
        }
    }
}

#[utoipa::path(
    get, path = "/bus/{busId}", tag = "locations",
    params(("busId" = String, Path, description = "Bus identifier")),
    responses(
        (status = 200, description = "Latest known position", body = crate::openapi::BusLocationDoc),
        (status = 404, description = "Bus not found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_bus(
    State(state): State<ServerState>,
    Path(bus_id): Path<String>,
) -> Result<Json<bus_location::Model>, ApiError> {
    match state.locations.get_location(&bus_id).await {
        Ok(Some(rec)) => {
            record_lookup("hit");
            Ok(Json(rec))
        }
        Ok(None) => {
            record_lookup("miss");
            Err(ApiError::NotFound(BUS_NOT_FOUND))
        }
        Err(e) => {
            record_lookup("error");
            Err(e.into())
        }
    }
}

#[utoipa::path(
    get, path = "/buses", tag = "locations",
    responses(
        (status = 200, description = "Every known bus, in no particular order", body = [crate::openapi::BusLocationDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_buses(State(state): State<ServerState>) -> Result<Json<Vec<bus_location::Model>>, ApiError> {
    let all = state.locations.list_locations().await.map_err(|e: ServiceError| {
        record_lookup("error");
        ApiError::from(e)
    })?;
    record_lookup("list");
    Ok(Json(all))
}
