// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Next-value conversion for hot subjects.
//!
//! `next_single_value` turns a subject into a single-value stream that resolves to the
//! *next* value pushed into it. The current value held by a [`LatestValueSubject`] is not
//! replayed. The subscription is registered when `next_single_value` is called, so a
//! push that happens before the stream is polled is not missed.
//!
//! ```rust
//! use ripple_core::LatestValueSubject;
//! use ripple_single::NextSingleValueExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = LatestValueSubject::new("idle");
//! let next = subject.next_single_value();
//!
//! subject.send("running").unwrap();
//! subject.send("done").unwrap();
//!
//! assert_eq!(next.outcome().await, Some(Ok("running")));
//! # }
//! ```
//!
//! Closing the subject before a push completes the stream without a value.

use crate::{FirstValueOnlyExt, NeverFailsExt, SingleStream};
use ripple_core::LatestValueSubject;
use std::convert::Infallible;

/// Extension trait providing `next_single_value` for hot subjects.
pub trait NextSingleValueExt<T> {
    /// Single-value stream of the next value pushed after this call.
    fn next_single_value(&self) -> SingleStream<T, Infallible>;
}

impl<T> NextSingleValueExt<T> for LatestValueSubject<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn next_single_value(&self) -> SingleStream<T, Infallible> {
        self.subscribe_updates().never_fails().erase_to_single()
    }
}
