// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the ripple workspace.
//!
//! Production code builds streams out of subjects and operators; tests need an imperative
//! way to push events. The channels below hand out a sender together with a stream of
//! [`StreamItem`]s so a test can script an upstream event by event.
//!
//! # Examples
//!
//! ```rust
//! use ripple_test_utils::{test_channel, helpers::unwrap_value};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, mut stream) = test_channel::<i32>();
//! tx.send(42).unwrap();
//!
//! assert_eq!(unwrap_value(&mut stream, 100).await, 42);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod test_error;

use futures::{Stream, StreamExt};
use ripple_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream, unwrap_value};
pub use test_error::TestError;

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// The stream completes once every sender has been dropped.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T, TestError>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T, TestError>` for testing failure propagation.
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T, TestError>>,
    impl Stream<Item = StreamItem<T, TestError>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
