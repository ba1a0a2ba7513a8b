use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    /// The request never produced a response.
    #[error("{0}")]
    Request(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode query option {param}: {reason}")]
    Encode { param: &'static str, reason: String },
}
