use std::io;
use std::path::PathBuf;

/// Internal invariant violations while converting one token. The converter
/// recovers from these by passing the token through unflagged.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("script token {token:?} produced no syllables")]
    NoSyllables { token: String },
    #[error("syllables for {token:?} reconstruct {rebuilt:?}")]
    LossyParse { token: String, rebuilt: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("cannot read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
