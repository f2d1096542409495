use thiserror::Error;

/// Errors that can occur while building or emitting a link graph.
#[derive(Error, Debug)]
pub enum MapdownError {
    #[error("file error: {message} (path: {path})")]
    File { message: String, path: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("watch error: {message}")]
    Watch { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `MapdownError`.
pub type Result<T> = std::result::Result<T, MapdownError>;
