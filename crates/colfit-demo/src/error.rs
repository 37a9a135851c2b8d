#![forbid(unsafe_code)]

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] colfit_runtime::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no widths given; pass --width at least once")]
    NoWidths,
}

impl DemoError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::NoWidths => 2,
            Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
