use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid clock time: {0}")]
    InvalidTime(String),

    #[error("Invalid catalog entry: {0}")]
    InvalidCatalog(String),

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl PlanError {
    /// True for errors caused by the request itself rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PlanError::InvalidProfile(_) | PlanError::InvalidTime(_))
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
