use thiserror::Error;

#[derive(Error, Debug)]
pub enum LumenError {
    #[error("Invalid light data: {0}")]
    InvalidLight(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Duplicate resource id: {0}")]
    DuplicateResource(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, LumenError>;
