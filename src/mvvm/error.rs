//! # MVVM Errors
//!
//! Error taxonomy shared by every runtime primitive.
//! All failures are immediate signals to the direct caller; nothing is retried.

use thiserror::Error;

/// Result alias used throughout the runtime
pub type Result<T> = std::result::Result<T, MvvmError>;

/// Errors raised by notifiers, data sources, initializers, resolvers and factories
#[derive(Debug, Error)]
pub enum MvvmError {
    /// A required input was missing, empty or blank
    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },

    /// `start` was called on a data source that is already observing
    #[error("{0} is already started")]
    AlreadyStarted(&'static str),

    /// `create` was called on a factory that already produced its bundle
    #[error("{0} has already been created")]
    AlreadyCreated(&'static str),

    /// The data source was disposed and cannot be started again
    #[error("{0} has been disposed")]
    Disposed(&'static str),

    /// Resolver lookup miss
    #[error("no registration found for key `{0}`")]
    KeyNotFound(String),

    /// Failure surfaced unchanged from an injected collaborator
    #[error(transparent)]
    Fetch(#[from] anyhow::Error),
}

impl MvvmError {
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}
