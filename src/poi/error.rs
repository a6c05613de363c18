use thiserror::Error;

/// Error type for POI lookup
#[derive(Error, Debug)]
pub enum PoiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, PoiError>;
