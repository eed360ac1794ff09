// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! First-value-only operator - the canonical way to obtain the single-value contract.
//!
//! `first_value_only` forwards the first event it observes and then completes:
//!
//! | Upstream | Result |
//! |----------|--------|
//! | `Value(v)`, ... | `Value(v)`, completion |
//! | `Error(e)`, ... | `Error(e)` |
//! | completion | completion (empty, not an error) |
//!
//! As soon as the first event is forwarded the upstream is dropped, which unsubscribes
//! from whatever it would have emitted next.
//!
//! # Examples
//!
//! ```rust
//! use ripple_core::StreamItem;
//! use ripple_single::FirstValueOnlyExt;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let upstream = stream::iter(vec![StreamItem::<_, String>::Value("a"), StreamItem::Value("b")]);
//! let mut first = upstream.first_value_only();
//!
//! assert_eq!(first.next().await, Some(StreamItem::Value("a")));
//! assert_eq!(first.next().await, None);
//! # }
//! ```

use crate::{SingleStream, SingleValueStream};
use futures::stream::FusedStream;
use futures::{ready, Stream};
use pin_project::pin_project;
use ripple_core::StreamItem;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream returned by [`FirstValueOnlyExt::first_value_only`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct FirstValueOnly<S> {
    // `None` once the first event went through: the upstream has been released.
    #[pin]
    upstream: Option<S>,
}

impl<S> FirstValueOnly<S> {
    pub fn new(upstream: S) -> Self {
        Self {
            upstream: Some(upstream),
        }
    }
}

impl<S, T, E> Stream for FirstValueOnly<S>
where
    S: Stream<Item = StreamItem<T, E>>,
{
    type Item = StreamItem<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        let Some(upstream) = this.upstream.as_mut().as_pin_mut() else {
            return Poll::Ready(None);
        };

        let item = ready!(upstream.poll_next(cx));
        this.upstream.set(None);
        Poll::Ready(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.upstream {
            Some(_) => (0, Some(1)),
            None => (0, Some(0)),
        }
    }
}

impl<S, T, E> FusedStream for FirstValueOnly<S>
where
    S: Stream<Item = StreamItem<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.upstream.is_none()
    }
}

impl<S, T, E> SingleValueStream for FirstValueOnly<S> where S: Stream<Item = StreamItem<T, E>> {}

/// Extension trait providing single-value conversions for any fallible stream.
pub trait FirstValueOnlyExt<T, E>: Stream<Item = StreamItem<T, E>> + Sized {
    /// Forwards only the first event of this stream, then completes.
    ///
    /// See the [module-level documentation](crate::first_value_only) for the exact semantics.
    fn first_value_only(self) -> FirstValueOnly<Self>;

    /// `first_value_only` followed by type erasure into a [`SingleStream`].
    fn erase_to_single(self) -> SingleStream<T, E>
    where
        Self: Send + 'static,
        T: Send + 'static,
        E: Send + 'static;
}

impl<S, T, E> FirstValueOnlyExt<T, E> for S
where
    S: Stream<Item = StreamItem<T, E>>,
{
    fn first_value_only(self) -> FirstValueOnly<Self> {
        FirstValueOnly::new(self)
    }

    fn erase_to_single(self) -> SingleStream<T, E>
    where
        Self: Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        SingleStream::new(self.first_value_only())
    }
}
