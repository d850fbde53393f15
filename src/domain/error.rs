use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found")]
    NotFound,

    #[error("Invalid todo ID")]
    InvalidId,

    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl TodoError {
    pub fn validation(message: impl Into<String>) -> Self {
        TodoError::Validation(message.into())
    }
}
