use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input was missing or malformed; storage was not touched.
    #[error("{0}")]
    InvalidInput(String),
    /// The persistence layer failed; carries the underlying message.
    #[error("{0}")]
    Storage(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::InvalidInput(msg),
            ModelError::Db(msg) => Self::Storage(msg),
        }
    }
}
