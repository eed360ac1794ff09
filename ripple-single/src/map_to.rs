// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map-to operator - replaces every value with a constant.
//!
//! Useful to turn "something happened" streams into signals:
//!
//! ```rust
//! use ripple_core::StreamItem;
//! use ripple_single::MapToExt;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let clicks = stream::iter(vec![StreamItem::<_, String>::Value((3, 4)), StreamItem::Value((5, 6))]);
//! let refreshes: Vec<_> = clicks.map_to("refresh").collect().await;
//!
//! assert_eq!(refreshes, vec![StreamItem::Value("refresh"), StreamItem::Value("refresh")]);
//! # }
//! ```
//!
//! Failures are forwarded unchanged.

use futures::{ready, Stream};
use pin_project::pin_project;
use ripple_core::StreamItem;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream returned by [`MapToExt::map_to`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct MapTo<S, U> {
    #[pin]
    upstream: S,
    value: U,
}

impl<S, U> MapTo<S, U> {
    pub fn new(upstream: S, value: U) -> Self {
        Self { upstream, value }
    }
}

impl<S, T, E, U> Stream for MapTo<S, U>
where
    S: Stream<Item = StreamItem<T, E>>,
    U: Clone,
{
    type Item = StreamItem<U, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let value = this.value;
        let item = ready!(this.upstream.poll_next(cx));
        Poll::Ready(item.map(|item| item.map(|_| value.clone())))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

/// Extension trait providing the `map_to` operator for fallible streams.
pub trait MapToExt<T, E>: Stream<Item = StreamItem<T, E>> + Sized {
    /// Emits `value` in place of every value of this stream.
    fn map_to<U: Clone>(self, value: U) -> MapTo<Self, U>;
}

impl<S, T, E> MapToExt<T, E> for S
where
    S: Stream<Item = StreamItem<T, E>>,
{
    fn map_to<U: Clone>(self, value: U) -> MapTo<Self, U> {
        MapTo::new(self, value)
    }
}
