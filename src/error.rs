use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid IRI: {0}")]
    Iri(#[from] oxrdf::IriParseError),

    #[error("{path}:{line}: malformed row: {reason}")]
    MalformedRow {
        path: String,
        line: usize,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
