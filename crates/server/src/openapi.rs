use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(serde::Deserialize, ToSchema)]
pub struct UpdateLocationRequestDoc {
    #[serde(rename = "busId")]
    pub bus_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(ToSchema)]
pub struct SuccessDoc { pub success: bool }

#[derive(ToSchema)]
pub struct BusLocationDoc {
    pub bus_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::locations::update_location,
        crate::routes::locations::get_bus,
        crate::routes::locations::list_buses,
    ),
    components(
        schemas(
            HealthResponse,
            UpdateLocationRequestDoc,
            SuccessDoc,
            BusLocationDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "locations")
    )
)]
pub struct ApiDoc;
