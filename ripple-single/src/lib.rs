// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-value streams.
//!
//! A stream satisfies the *single-value contract* when every subscription emits at most one
//! value and then completes, or fails without a value. Nothing can verify that from the
//! outside, so this crate makes it a construction-time property:
//!
//! - [`SingleValueStream`] is the marker trait a producer implements to promise the contract.
//! - [`SingleStream`] is the type-erased carrier. It can only be built from a tagged stream
//!   (or, inside this crate, from a combinator that enforces the contract itself).
//! - [`FirstValueOnlyExt::first_value_only`] obtains the contract from any fallible stream.
//! - [`NextSingleValueExt::next_single_value`] resolves a hot subject's next push.
//! - [`DeferredSingle`] turns a callback-style one-shot computation into a single-value
//!   stream that runs once per subscription.
//!
//! # Example
//!
//! ```
//! use ripple_core::StreamItem;
//! use ripple_single::{FirstValueOnlyExt, SingleStream};
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let upstream = stream::iter(vec![
//!     StreamItem::<_, std::io::Error>::Value(1),
//!     StreamItem::Value(2),
//! ]);
//!
//! let single: SingleStream<i32, std::io::Error> = upstream.erase_to_single();
//! let values: Vec<_> = single.collect().await;
//!
//! assert_eq!(values.len(), 1);
//! assert!(matches!(values[0], StreamItem::Value(1)));
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod deferred_single;
pub mod first_value_only;
pub mod map_to;
pub mod never_fails;
pub mod next_single_value;
pub mod single_stream;
pub mod single_value_stream;

pub use self::deferred_single::{Completion, DeferredSingle, DeferredSubscription};
pub use self::first_value_only::{FirstValueOnly, FirstValueOnlyExt};
pub use self::map_to::{MapTo, MapToExt};
pub use self::never_fails::{NeverFails, NeverFailsExt};
pub use self::next_single_value::NextSingleValueExt;
pub use self::single_stream::SingleStream;
pub use self::single_value_stream::SingleValueStream;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DeferredSingle, FirstValueOnlyExt, MapToExt, NeverFailsExt, NextSingleValueExt,
        SingleStream, SingleValueStream,
    };
}
