// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the ripple reactive primitives
//!
//! [`RippleError`] is the default failure type of [`StreamItem`](crate::StreamItem).
//! Streams that need a domain specific failure type simply name their own `E`;
//! streams that never fail use [`core::convert::Infallible`].
//!
//! # Examples
//!
//! ```
//! use ripple_core::{Result, RippleError};
//!
//! fn load() -> Result<u32> {
//!     Err(RippleError::stream_error("cache not warmed"))
//! }
//!
//! assert!(load().is_err());
//! ```

use std::sync::Arc;

/// Root error type for ripple streams
#[derive(Debug, Clone, thiserror::Error)]
pub enum RippleError {
    /// Stream processing encountered an error
    ///
    /// General failure for stream operations that don't fit a more specific category.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user callbacks (for example a deferred builder) so they
    /// can travel through a `StreamItem<T>` without naming their concrete type.
    #[error("User error: {0}")]
    UserError(Arc<dyn std::error::Error + Send + Sync>),
}

impl RippleError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Arc::new(error))
    }
}

// User errors are opaque, so two of them compare by their rendered message.
impl PartialEq for RippleError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::StreamProcessingError { context: left },
                Self::StreamProcessingError { context: right },
            ) => left == right,
            (Self::UserError(left), Self::UserError(right)) => {
                left.to_string() == right.to_string()
            }
            _ => false,
        }
    }
}

/// Specialized Result type for ripple operations
pub type Result<T> = std::result::Result<T, RippleError>;
