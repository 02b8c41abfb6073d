//! Service layer for bus locations.
//! - `location::repository` abstracts storage behind `LocationRepository`.
//! - `location::service` validates input before any storage access.
//! - Errors are reported as `ServiceError` so the HTTP layer can map them.

pub mod errors;
pub mod location;
#[cfg(test)]
pub mod test_support;
