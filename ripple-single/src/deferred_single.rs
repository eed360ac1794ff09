// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred one-shot computations exposed as single-value streams.
//!
//! A [`DeferredSingle`] stores a *builder*: a closure that receives a [`Completion`] and
//! must eventually call it once with the outcome of some work (a network call, a disk
//! read, ...). Nothing runs at creation time. Each call to
//! [`subscribe`](DeferredSingle::subscribe) invokes the builder afresh, so concurrent
//! subscribers never share in-flight work; de-duplication is up to the caller.
//!
//! ## Completion rules
//!
//! - `succeed(value)` → the subscription emits `Value(value)`, then completes.
//! - `fail(error)` → the subscription emits `Error(error)` and no value.
//! - Any call after the first, or after the subscriber went away, is a silent no-op.
//! - If every clone of the completion is dropped unused, the subscription completes empty.
//!   A builder that keeps a completion alive and never calls it is different: its
//!   subscription stays pending until the subscriber drops it, and
//!   [`Completion::is_cancelled`] then reports `true`.
//!
//! The completion is `Send + Sync`, so the builder may hand it to another thread; the
//! outcome is delivered to whichever task polls the subscription.
//!
//! ## Example
//!
//! ```
//! use ripple_single::DeferredSingle;
//! use std::thread;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let lookup = DeferredSingle::<u32, std::io::Error>::create(|completion| {
//!     thread::spawn(move || completion.succeed(42));
//! });
//!
//! assert_eq!(lookup.subscribe_erased().outcome().await.unwrap().unwrap(), 42);
//! # }
//! ```

use crate::{SingleStream, SingleValueStream};
use core::fmt;
use futures::channel::oneshot;
use futures::stream::FusedStream;
use futures::{ready, Future, Stream};
use ripple_core::mutex::Mutex;
use ripple_core::{RippleError, StreamItem};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

type Builder<T, E> = dyn Fn(Completion<T, E>) + Send + Sync + 'static;

/// A deferred, non-shared, one-shot computation.
///
/// See the [module documentation](self) for details.
pub struct DeferredSingle<T, E = RippleError> {
    builder: Arc<Builder<T, E>>,
}

impl<T, E> DeferredSingle<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Stores `builder` without running it.
    pub fn create<F>(builder: F) -> Self
    where
        F: Fn(Completion<T, E>) + Send + Sync + 'static,
    {
        Self {
            builder: Arc::new(builder),
        }
    }

    /// Starts a new, independent execution of the builder.
    ///
    /// The builder runs synchronously on the calling thread before this returns; the work
    /// it starts may complete on any thread. Dropping the returned stream cancels delivery
    /// and is visible to the builder through [`Completion::is_cancelled`].
    pub fn subscribe(&self) -> DeferredSubscription<T, E> {
        let (sender, receiver) = oneshot::channel();
        (self.builder)(Completion::new(sender));
        DeferredSubscription {
            outcome: Some(receiver),
        }
    }

    /// [`subscribe`](Self::subscribe), erased into a [`SingleStream`].
    pub fn subscribe_erased(&self) -> SingleStream<T, E> {
        SingleStream::new(self.subscribe())
    }
}

impl<T, E> Clone for DeferredSingle<T, E> {
    fn clone(&self) -> Self {
        Self {
            builder: Arc::clone(&self.builder),
        }
    }
}

impl<T, E> fmt::Debug for DeferredSingle<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredSingle").finish_non_exhaustive()
    }
}

/// Completion callback handed to a [`DeferredSingle`] builder.
///
/// Clones share the same slot: whichever clone completes first wins.
pub struct Completion<T, E> {
    sender: Arc<Mutex<Option<oneshot::Sender<Result<T, E>>>>>,
}

impl<T, E> Completion<T, E> {
    fn new(sender: oneshot::Sender<Result<T, E>>) -> Self {
        Self {
            sender: Arc::new(Mutex::new(Some(sender))),
        }
    }

    /// Delivers the outcome of the work. Only the first call has an effect.
    pub fn complete(&self, result: Result<T, E>) {
        let Some(sender) = self.sender.lock().take() else {
            return;
        };
        // An error here means the subscriber is gone; the outcome is simply discarded.
        let _ = sender.send(result);
    }

    /// Shorthand for `complete(Ok(value))`.
    pub fn succeed(&self, value: T) {
        self.complete(Ok(value));
    }

    /// Shorthand for `complete(Err(error))`.
    pub fn fail(&self, error: E) {
        self.complete(Err(error));
    }

    /// Returns `true` once an outcome has been delivered (or discarded).
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.sender.lock().is_none()
    }

    /// Returns `true` if the subscription was dropped before completion.
    ///
    /// Builders may poll this to abandon work nobody is waiting for.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.sender
            .lock()
            .as_ref()
            .is_some_and(oneshot::Sender::is_canceled)
    }
}

impl<T, E> Clone for Completion<T, E> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T, E> fmt::Debug for Completion<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("completed", &self.is_completed())
            .finish()
    }
}

/// One subscription to a [`DeferredSingle`].
#[must_use = "streams do nothing unless polled"]
pub struct DeferredSubscription<T, E> {
    outcome: Option<oneshot::Receiver<Result<T, E>>>,
}

impl<T, E> Stream for DeferredSubscription<T, E> {
    type Item = StreamItem<T, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let Some(receiver) = self.outcome.as_mut() else {
            return Poll::Ready(None);
        };

        let received = ready!(Pin::new(receiver).poll(cx));
        self.outcome = None;

        // `Canceled` means every completion was dropped unused: complete empty.
        Poll::Ready(received.ok().map(StreamItem::from))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.outcome {
            Some(_) => (0, Some(1)),
            None => (0, Some(0)),
        }
    }
}

impl<T, E> FusedStream for DeferredSubscription<T, E> {
    fn is_terminated(&self) -> bool {
        self.outcome.is_none()
    }
}

impl<T, E> SingleValueStream for DeferredSubscription<T, E> {}

impl<T, E> fmt::Debug for DeferredSubscription<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredSubscription")
            .field("terminated", &self.outcome.is_none())
            .finish()
    }
}
