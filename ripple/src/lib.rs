// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Ripple
//!
//! Reactive building blocks for async Rust: single-value streams and observable storage.
//!
//! ## Overview
//!
//! - **Single-value streams** ([`SingleStream`], [`FirstValueOnlyExt`], [`DeferredSingle`]):
//!   streams that emit at most one value and then complete, or fail without a value.
//! - **Observable storage** ([`ObservableDictionary`]): a synchronized map published as a
//!   stream of full snapshots.
//!
//! The dictionary's streams never fail, so they are plain streams. Lift them with
//! [`NeverFailsExt::never_fails`] to compose them with the single-value operators.
//!
//! ## Quick Start
//!
//! ```rust
//! use ripple_rx::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let accounts = ObservableDictionary::new();
//! accounts.set_value("alice", Some(10));
//!
//! // Resolve the current number of accounts once.
//! let count = accounts.count().never_fails().erase_to_single();
//! assert_eq!(count.outcome().await, Some(Ok(1)));
//! # }
//! ```

// Re-export core types
pub use ripple_core::{LatestValueSubject, Result, RippleError, StreamItem, SubjectError};

// Re-export single-value types
pub use ripple_single::{
    Completion, DeferredSingle, DeferredSubscription, FirstValueOnly, FirstValueOnlyExt,
    MapToExt, NeverFailsExt, NextSingleValueExt, SingleStream, SingleValueStream,
};

// Re-export storage types
pub use ripple_dictionary::{ObservableDictionary, Snapshot};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DeferredSingle, FirstValueOnlyExt, MapToExt, NeverFailsExt, NextSingleValueExt,
        ObservableDictionary, SingleStream, SingleValueStream, StreamItem,
    };
}
