// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use futures::stream::{Stream, StreamExt};
use ripple_core::StreamItem;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Asserts that `stream` stays silent for `timeout_ms`.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Asserts that `stream` completes (yields `None`) within `timeout_ms`.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected the stream to end, but it emitted an element"),
        Err(_) => panic!("Expected the stream to end within {timeout_ms}ms"),
    }
}

/// Waits up to `timeout_ms` for the next element of `stream`.
///
/// # Panics
///
/// Panics if the stream ends or stays silent.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Expected an element, but the stream ended"),
        Err(_) => panic!("Expected an element within {timeout_ms}ms"),
    }
}

/// Waits for the next element and unwraps it as a `StreamItem::Value`.
///
/// # Panics
///
/// Panics if the stream ends, stays silent, or emits an error.
pub async fn unwrap_value<S, T, E>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = StreamItem<T, E>> + Unpin,
    E: Debug,
{
    unwrap_stream(stream, timeout_ms).await.unwrap()
}
