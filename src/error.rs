use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Content file not found: {0}")]
    ContentNotFound(String),

    #[error("Content is missing required field '{0}'")]
    MissingField(String),

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Failed to open link: {0}")]
    Open(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
