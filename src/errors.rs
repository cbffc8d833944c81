// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors raised while answering a request.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Serialization Error: {0}")]
    Serialization(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::XlsxError(_)
            | ServerError::Serialization(_)
            | ServerError::InternalError => 500,
        }
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::Serialization(e.to_string())
    }
}

impl From<crate::domain::selection::UnknownMetric> for ServerError {
    fn from(e: crate::domain::selection::UnknownMetric) -> Self {
        ServerError::BadRequest(e.to_string())
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
