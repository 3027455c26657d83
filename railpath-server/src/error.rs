use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use railpath_core::{Error, SearchError};
use serde_json::json;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    InternalError(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<SearchError> for HttpError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::UnknownNode(_) => HttpError::BadRequest(err.to_string()),
            SearchError::StepLimitExceeded(_) | SearchError::CostOverflow(_) => {
                HttpError::InternalError(err.to_string())
            }
        }
    }
}

impl From<Error> for HttpError {
    fn from(err: Error) -> Self {
        HttpError::BadRequest(err.to_string())
    }
}

impl From<tokio::task::JoinError> for HttpError {
    fn from(err: tokio::task::JoinError) -> Self {
        HttpError::InternalError(format!("Search task failed: {err}"))
    }
}
