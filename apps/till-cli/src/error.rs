//! # App Error Type
//!
//! Startup and terminal failures for the CLI.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Till POS                               │
//! │                                                                         │
//! │  Startup (fatal, non-zero exit)        Menu loop (recovered)            │
//! │  ──────────────────────────────        ─────────────────────            │
//! │  bad TILL_* variable ──► Config        ProductNotFound ──► warn!        │
//! │  unreadable catalog  ──► CatalogRead   InvalidQuantity ──► error!       │
//! │  malformed catalog   ──► Core          EmptyCart       ──► warn!        │
//! │  closed stdout       ──► Io            PaymentDeclined ──► error!       │
//! │                                                                         │
//! │  Only the left column ever reaches main().                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;
use till_core::CoreError;

#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration value could not be parsed.
    #[error("Invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },

    /// The catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Domain error during startup (e.g., malformed catalog).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading the prompt or writing output failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn config(key: &str, reason: impl Into<String>) -> Self {
        AppError::Config {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::config("TILL_CARD_LIMIT", "not a number");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for TILL_CARD_LIMIT: not a number"
        );

        let err = AppError::CatalogRead {
            path: PathBuf::from("menu.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "Failed to read catalog menu.json: missing");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: AppError = CoreError::EmptyCart.into();
        assert_eq!(err.to_string(), "Cart is empty");
    }
}
