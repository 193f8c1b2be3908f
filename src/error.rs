use thiserror::Error;

#[derive(Error, Debug)]
pub enum PitchError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Malformed short code '{0}': expected <player><action>[<receiver>][.<tag>]*")]
    MalformedCode(String),

    #[error("Unknown action code '{0}'")]
    UnknownAction(String),

    #[error("Insufficient coordinates: action needs {required} clicked point(s), {captured} captured")]
    InsufficientCoordinates { required: usize, captured: usize },

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Malformed log line ({reason}): {line}")]
    MalformedLine { reason: String, line: String },

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type PsResult<T> = Result<T, PitchError>;
