//! Error types for handler construction and dispatch.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by a [`Handler`](crate::Handler) or its
/// [`Dispatcher`](crate::Dispatcher).
///
/// Update-function defects are not represented here: a panicking update
/// function is a caller bug and is never caught.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Configuration rejected during construction
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Constructed outside a tokio runtime
    #[error("Handler must be created from within a tokio runtime")]
    NoRuntime,

    /// The handler was dropped; the command was discarded
    #[error("Handler is closed, command discarded")]
    Closed,
}
