pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{LocationUpdate, UpdateLocationInput, MISSING_FIELDS_MESSAGE};
pub use repository::{LocationRepository, SeaOrmLocationRepository};
pub use service::LocationService;
