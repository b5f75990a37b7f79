use crate::filter::FilterError;
use crate::nlq::QueryParseError;
use crate::store::DuplicateString;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `value` field absent from the request body.
    #[error("Missing or empty 'value' field")]
    MissingValue,

    /// `value` field present but blank after trimming.
    #[error("Missing or empty 'value' field")]
    EmptyValue,

    /// `value` field present but not a string.
    #[error("Invalid data type for 'value' (must be string)")]
    InvalidInput,

    #[error("String already exists")]
    Conflict,

    #[error("String does not exist in the system")]
    NotFound,

    #[error("Invalid query parameter '{0}'")]
    UnknownQueryParameter(String),

    #[error("Invalid query parameter values or types")]
    InvalidQueryParameter,

    #[error("Missing 'query' parameter")]
    MissingQuery,

    #[error("Unable to parse natural language query")]
    UnparsableQuery,

    #[error("Query parsed but resulted in conflicting filters")]
    ConflictingFilters,

    #[error("Route not found")]
    UnknownRoute,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::MissingValue
            | ServerError::UnknownQueryParameter(_)
            | ServerError::InvalidQueryParameter
            | ServerError::MissingQuery
            | ServerError::UnparsableQuery
            | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::EmptyValue
            | ServerError::InvalidInput
            | ServerError::ConflictingFilters => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::Conflict => StatusCode::CONFLICT,
            ServerError::NotFound | ServerError::UnknownRoute => StatusCode::NOT_FOUND,
            ServerError::Config(_) | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::MissingValue => "MISSING_VALUE",
            ServerError::EmptyValue | ServerError::InvalidInput => "INVALID_INPUT",
            ServerError::Conflict => "ALREADY_EXISTS",
            ServerError::NotFound | ServerError::UnknownRoute => "NOT_FOUND",
            ServerError::UnknownQueryParameter(_) | ServerError::InvalidQueryParameter => {
                "INVALID_QUERY_PARAMETER"
            }
            ServerError::MissingQuery => "MISSING_QUERY",
            ServerError::UnparsableQuery => "UNPARSABLE_QUERY",
            ServerError::ConflictingFilters => "CONFLICTING_FILTERS",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<FilterError> for ServerError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::UnknownParameter(key) => ServerError::UnknownQueryParameter(key),
            FilterError::InvalidValue => ServerError::InvalidQueryParameter,
        }
    }
}

impl From<QueryParseError> for ServerError {
    fn from(err: QueryParseError) -> Self {
        match err {
            QueryParseError::Unparsable => ServerError::UnparsableQuery,
            QueryParseError::Conflicting => ServerError::ConflictingFilters,
        }
    }
}

impl From<DuplicateString> for ServerError {
    fn from(_: DuplicateString) -> Self {
        ServerError::Conflict
    }
}

impl From<axum::extract::rejection::JsonRejection> for ServerError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        ServerError::BadRequest(err.body_text())
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
