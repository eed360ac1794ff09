// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Type-erased carrier for single-value streams.
//!
//! [`SingleStream`] lets heterogeneous single-value producers travel through one type
//! without losing the contract. It has exactly two construction paths:
//!
//! - [`SingleStream::new`] for streams tagged with [`SingleValueStream`];
//! - `SingleStream::unchecked`, crate-private, for combinators in this crate that
//!   enforce the contract by construction.
//!
//! Polling the carrier polls the wrapped upstream directly: it adds no buffering, delay or
//! value counting of its own.

use crate::map_to::MapTo;
use crate::SingleValueStream;
use core::fmt;
use futures::future;
use futures::stream::{self, Stream, StreamExt};
use ripple_core::{RippleError, StreamItem};
use std::pin::Pin;
use std::task::{Context, Poll};

type SingleBoxStream<T, E> = Pin<Box<dyn Stream<Item = StreamItem<T, E>> + Send + 'static>>;

/// A stream guaranteed to emit at most one value, then complete.
///
/// See the [module documentation](self) for the construction rules.
pub struct SingleStream<T, E = RippleError> {
    upstream: SingleBoxStream<T, E>,
}

impl<T, E> SingleStream<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Wraps a stream whose producer promises the single-value contract.
    pub fn new<S>(single: S) -> Self
    where
        S: SingleValueStream<Item = StreamItem<T, E>> + Send + 'static,
    {
        Self::unchecked(single)
    }

    /// Wraps `upstream` without any proof that it honours the contract.
    ///
    /// Only for combinators of this crate that cannot emit more than one value.
    pub(crate) fn unchecked<S>(upstream: S) -> Self
    where
        S: Stream<Item = StreamItem<T, E>> + Send + 'static,
    {
        Self {
            upstream: Box::pin(upstream),
        }
    }

    /// A single-value stream that emits `value`, then completes.
    pub fn just(value: T) -> Self {
        Self::new(stream::once(future::ready(StreamItem::Value(value))))
    }

    /// A single-value stream that completes without emitting.
    pub fn empty() -> Self {
        Self::new(stream::empty())
    }

    /// A single-value stream that fails with `error` without emitting a value.
    pub fn fail(error: E) -> Self {
        Self::new(stream::once(future::ready(StreamItem::Error(error))))
    }

    /// Transforms the value, if any. Failures and completion pass through untouched.
    pub fn map<U, F>(self, mut f: F) -> SingleStream<U, E>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        SingleStream::unchecked(self.upstream.map(move |item| item.map(&mut f)))
    }

    /// Replaces the value, if any, with `value`.
    pub fn map_to<U>(self, value: U) -> SingleStream<U, E>
    where
        U: Clone + Send + 'static,
    {
        SingleStream::unchecked(MapTo::new(self.upstream, value))
    }

    /// Drives the stream to its terminal outcome.
    ///
    /// Returns `None` for an empty completion, `Some(Ok(value))` for a value and
    /// `Some(Err(error))` for a failure.
    pub async fn outcome(mut self) -> Option<Result<T, E>> {
        self.next().await.map(Into::into)
    }
}

impl<T, E> Stream for SingleStream<T, E> {
    type Item = StreamItem<T, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.upstream.as_mut().poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<T, E> SingleValueStream for SingleStream<T, E> {}

impl<T, E> fmt::Debug for SingleStream<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleStream").finish_non_exhaustive()
    }
}
