use std::io;
use thiserror::Error;

/// Custom error type for shakewatch
#[derive(Error, Debug)]
pub enum ShakeError {
    #[error("Error fetching data: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Error fetching data: HTTP {0}")]
    HttpStatus(u16),

    #[error("Error reading response: {0}")]
    BodyRead(String),

    #[error("Error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Error playing sound: {0}")]
    SoundPlayback(String),

    #[error("Error writing log file: {0}")]
    LogWrite(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for shakewatch
pub type Result<T> = std::result::Result<T, ShakeError>;

impl ShakeError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ShakeError::Config(msg.into())
    }

    /// Create a body read error
    pub fn body_read<S: Into<String>>(msg: S) -> Self {
        ShakeError::BodyRead(msg.into())
    }

    /// Create a sound playback error
    pub fn sound_playback<S: Into<String>>(msg: S) -> Self {
        ShakeError::SoundPlayback(msg.into())
    }

    pub fn log_write<S: Into<String>>(msg: S) -> Self {
        ShakeError::LogWrite(msg.into())
    }
}
