//! # Console Error Type
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Errors in the console                                │
//! │                                                                         │
//! │  Core (bad quantity, bad slot, duplicate name)                         │
//! │     └──► printed to the operator, menu loop continues                  │
//! │                                                                         │
//! │  InputClosed (stdin hit EOF mid-prompt)                                │
//! │     └──► treated like choosing "0. Exit"                               │
//! │                                                                         │
//! │  Io / Config / StatePoisoned                                           │
//! │     └──► returned from run(), process exits non-zero                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use coffee_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// The config file exists but could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for `MachineConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The config parsed but describes a machine that can't exist.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Runtime Errors
    // =========================================================================
    /// A core operation rejected operator input.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Input ended while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A thread panicked while holding the machine lock.
    #[error("Machine state lock poisoned")]
    StatePoisoned,
}

impl ConsoleError {
    /// True for errors the menu reports and then carries on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConsoleError::Core(_))
    }
}
