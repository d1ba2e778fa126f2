use std::io;
use thiserror::Error;

/// Custom error type for the netlens application
#[derive(Error, Debug)]
pub enum NetlensError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Observation feed error: {0}")]
    Feed(String),

    #[error("Telemetry error: {0}")]
    Telemetry(String),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the netlens application
pub type Result<T> = std::result::Result<T, NetlensError>;

impl NetlensError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        NetlensError::Config(msg.into())
    }

    /// Create an observation feed error
    pub fn feed<S: Into<String>>(msg: S) -> Self {
        NetlensError::Feed(msg.into())
    }

    /// Create a telemetry error
    pub fn telemetry<S: Into<String>>(msg: S) -> Self {
        NetlensError::Telemetry(msg.into())
    }

    /// Create a TUI error
    pub fn tui<S: Into<String>>(msg: S) -> Self {
        NetlensError::Tui(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        NetlensError::Other(msg.into())
    }
}
