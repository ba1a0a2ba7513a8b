use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

/// Message carried by every successful response body.
pub const SUCCESS_MESSAGE: &str = "Success";

/// Successful response body together with its status code.
#[derive(Debug, Clone, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
    Accepted(T),
}

impl<T: Serialize> Response<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            Response::OK(_) => StatusCode::OK,
            Response::Created(_) => StatusCode::CREATED,
            Response::Accepted(_) => StatusCode::ACCEPTED,
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        let status = self.status();
        let body = match self {
            Response::OK(body) | Response::Created(body) | Response::Accepted(body) => body,
        };

        (status, Json(body)).into_response()
    }
}
