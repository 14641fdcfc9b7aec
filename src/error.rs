//! Error types for the shortword library.
//!
//! The tokenization core is total and never fails; errors only arise at the
//! edges: loading configuration, reading stop-word lists, and the CLI.
//! All of them are represented by the [`ShortwordError`] enum.
//!
//! # Examples
//!
//! ```
//! use shortword::error::{ShortwordError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ShortwordError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for shortword operations.
#[derive(Error, Debug)]
pub enum ShortwordError {
    /// I/O errors (config files, stop-word lists, CLI input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument passed by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ShortwordError.
pub type Result<T> = std::result::Result<T, ShortwordError>;

impl ShortwordError {
    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ShortwordError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ShortwordError::InvalidArgument(msg.into())
    }
}
