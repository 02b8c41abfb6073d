use serde::Deserialize;

use crate::errors::ServiceError;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing busId, latitude, or longitude";

/// Location report as received on the wire. Every field is optional here so
/// that absence and `null` are both caught by [`UpdateLocationInput::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLocationInput {
    #[serde(rename = "busId")]
    pub bus_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A validated location report.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationUpdate {
    pub bus_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl UpdateLocationInput {
    pub fn new(bus_id: &str, latitude: f64, longitude: f64) -> Self {
        Self { bus_id: Some(bus_id.to_string()), latitude: Some(latitude), longitude: Some(longitude) }
    }

    pub fn validate(self) -> Result<LocationUpdate, ServiceError> {
        match (self.bus_id, self.latitude, self.longitude) {
            (Some(bus_id), Some(latitude), Some(longitude))
                if !bus_id.is_empty() && latitude.is_finite() && longitude.is_finite() =>
            {
                Ok(LocationUpdate { bus_id, latitude, longitude })
            }
            _ => Err(ServiceError::InvalidInput(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: serde_json::Value) -> UpdateLocationInput {
        serde_json::from_value(body).expect("deserialize input")
    }

    #[test]
    fn complete_input_validates() {
        let input = parse(serde_json::json!({"busId": "bus1", "latitude": 12.97, "longitude": 77.59}));
        let update = input.validate().unwrap();
        assert_eq!(update, LocationUpdate { bus_id: "bus1".into(), latitude: 12.97, longitude: 77.59 });
    }

    #[test]
    fn zero_coordinates_are_present() {
        let input = parse(serde_json::json!({"busId": "bus1", "latitude": 0, "longitude": 0.0}));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn absent_or_null_fields_are_rejected() {
        for body in [
            serde_json::json!({"busId": "bus1", "longitude": 77.59}),
            serde_json::json!({"busId": "bus1", "latitude": null, "longitude": 77.59}),
            serde_json::json!({"latitude": 12.97, "longitude": 77.59}),
            serde_json::json!({"busId": "", "latitude": 12.97, "longitude": 77.59}),
            serde_json::json!({"busId": "bus1", "latitude": 12.97}),
        ] {
            match parse(body.clone()).validate() {
                Err(ServiceError::InvalidInput(msg)) => assert_eq!(msg, MISSING_FIELDS_MESSAGE),
                other => panic!("expected InvalidInput for {body}, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let input = UpdateLocationInput::new("bus1", f64::INFINITY, 1.0);
        assert!(matches!(input.validate(), Err(ServiceError::InvalidInput(_))));
    }
}
