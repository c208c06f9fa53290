// src/error/types.rs
use crate::domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Client input rejected before any side effect
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    /// Request body exceeded the configured upload limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    pub fn topic_not_found(topic_id: i64) -> Self {
        AppError::NotFound(format!("Topic {}", topic_id))
    }

    pub fn material_not_found(material_id: i64) -> Self {
        AppError::NotFound(format!("Material {}", material_id))
    }

    /// True for errors caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::Domain(_)
                | AppError::NotFound(_)
                | AppError::PayloadTooLarge(_)
        )
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
