use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoviesError {
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Movie already exists: {0}")]
    DuplicateTitle(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Chart error: {0}")]
    Chart(String),

    /// Standard input reached end of file while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, MoviesError>;
