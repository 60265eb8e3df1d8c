use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Request(String),

    #[error("{0}")]
    Validation(String),

    #[error("session storage error: {0}")]
    Storage(String),
}
