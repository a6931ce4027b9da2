use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Food not found in database")]
    FoodNotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Collaborator is not configured: {0}")]
    NotConfigured(&'static str),

    #[error("Internal server error")]
    InternalServerError,
}
