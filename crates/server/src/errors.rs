use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let detail = Some(e.to_string());
        match e {
            ServiceError::InvalidName(_) => Self::new(StatusCode::BAD_REQUEST, "Invalid Name", detail),
            ServiceError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, "Not Found", detail),
            ServiceError::CorruptRecord { .. } => {
                error!(err = %e, "corrupt record");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Corrupt Record", detail)
            }
            ServiceError::Init { .. }
            | ServiceError::StorageWrite { .. }
            | ServiceError::StorageRead { .. }
            | ServiceError::Serialize(_) => {
                error!(err = %e, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail)
            }
        }
    }
}

/// Request bodies that fail to decode into the asset schema.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        let title = match status {
            StatusCode::UNPROCESSABLE_ENTITY => "Validation Error",
            _ => status.canonical_reason().unwrap_or("Bad Request"),
        };
        Self::new(status, title, Some(rejection.body_text()))
    }
}
