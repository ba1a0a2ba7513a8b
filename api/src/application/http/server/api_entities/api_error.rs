use aciiverse_core::domain::common::entities::app_errors::CoreError;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;
use validator::Validate;

pub const INVALID_DATA_MESSAGE: &str = "Invalid data";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    NotAcceptable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::DataUnavailable => ApiError::NotFound("No data found".to_string()),
            CoreError::NotFound => ApiError::NotFound("Game not exists".to_string()),
            CoreError::Invalid(reason) => {
                debug!("Rejected invalid data: {}", reason);
                ApiError::NotAcceptable(INVALID_DATA_MESSAGE.to_string())
            }
            CoreError::InternalServerError => {
                error!("Internal server error");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules. Any unreadable, incomplete
/// or invalid body is rejected with 406.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            debug!("Rejected request body: {}", e);
            ApiError::NotAcceptable(INVALID_DATA_MESSAGE.to_string())
        })?;

        value.validate().map_err(|e| {
            debug!("Request body failed validation: {}", e);
            ApiError::NotAcceptable(INVALID_DATA_MESSAGE.to_string())
        })?;

        Ok(ValidateJson(value))
    }
}
