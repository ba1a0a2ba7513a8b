use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("No data found")]
    DataUnavailable,

    #[error("Game not exists")]
    NotFound,

    #[error("Invalid data: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}
