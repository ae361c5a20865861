use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum StoryServiceError {
    /// Request rejected before any generation call; carries the user-facing warning
    #[error("{0}")]
    Validation(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<StoryServiceError> for AppError {
    fn from(err: StoryServiceError) -> Self {
        match err {
            StoryServiceError::Validation(msg) => AppError::UnprocessableEntity(msg),
            StoryServiceError::Dependency(msg) => AppError::ExternalService(msg),
            StoryServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
