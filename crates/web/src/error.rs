use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use storage::{dto::common::ErrorResponse, error::StorageError};
use validator::ValidationErrors;
use weather::WeatherError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    Weather(WeatherError),
    /// Body or query string could not be decoded
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Weather(e) => write!(f, "Weather service error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::InvalidReference(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Weather(WeatherError::CityNotFound) => StatusCode::BAD_REQUEST,
            Self::Weather(WeatherError::NoConnectivity(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Weather(_) => StatusCode::BAD_GATEWAY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            Self::Storage(StorageError::NotFound) => ErrorResponse::new("Resource not found"),
            Self::Storage(StorageError::InvalidReference(msg))
            | Self::Storage(StorageError::ConstraintViolation(msg)) => ErrorResponse::new(msg),
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                ErrorResponse::new("An internal error occurred")
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                ErrorResponse::with_details("Validation failed", field_errors)
            }
            Self::Weather(e) => {
                if !matches!(e, WeatherError::CityNotFound) {
                    tracing::warn!("Weather service error: {:?}", e);
                }
                match e {
                    WeatherError::CityNotFound
                    | WeatherError::NoConnectivity(_)
                    | WeatherError::UnexpectedStatus(_) => ErrorResponse::new(e.to_string()),
                    _ => ErrorResponse::new("An unknown error occurred"),
                }
            }
            Self::BadRequest(msg) => ErrorResponse::new(msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<WeatherError> for WebError {
    fn from(error: WeatherError) -> Self {
        Self::Weather(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type WebResult<T> = Result<T, WebError>;
