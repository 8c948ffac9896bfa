use thiserror::Error;

/// Tilg error types
#[derive(Error, Debug)]
pub enum TilgError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {segments} segments cannot interleave {values} values")]
    Template { segments: usize, values: usize },

    #[error("Unknown component mark: {0}")]
    UnknownMark(u64),

    #[error("Replay script error: {0}")]
    Script(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tilg operations
pub type Result<T> = std::result::Result<T, TilgError>;
