// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject that replays its latest value.
//!
//! A [`LatestValueSubject`] always holds a current value. Every subscriber first receives
//! that value and then every value pushed afterwards, in push order.
//!
//! ## Characteristics
//!
//! - **Replay-latest**: A late subscriber sees the current value first, never older ones.
//! - **Unbounded**: Uses unbounded channels internally (no backpressure).
//! - **Thread-safe**: Cheap to clone; all clones share the same internal state.
//! - **Non-reentrant fan-out**: Pushing only enqueues into subscriber channels. No
//!   subscriber code runs while the internal lock is held, so a subscriber may push back
//!   into the subject from its own task without deadlocking.
//! - **Teardown**: Dropping the last handle (or calling [`close`](LatestValueSubject::close))
//!   completes every subscriber stream.
//!
//! ## Example
//!
//! ```
//! use ripple_core::LatestValueSubject;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = LatestValueSubject::new(0);
//! subject.send(1).unwrap();
//!
//! // Late subscriber: receives the current value first
//! let mut stream = subject.subscribe();
//! subject.send(2).unwrap();
//! subject.close();
//!
//! assert_eq!(stream.next().await, Some(1));
//! assert_eq!(stream.next().await, Some(2));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

use crate::mutex::Mutex;
use crate::SubjectError;
use async_channel::Sender;
use futures::Stream;
use std::pin::Pin;
use std::sync::Arc;

pub type SubjectBoxStream<T> = Pin<Box<dyn Stream<Item = T> + Send + Sync + 'static>>;

struct SubjectState<T> {
    closed: bool,
    current: T,
    senders: Vec<Sender<T>>,
}

impl<T: Clone> SubjectState<T> {
    // Enqueues the current value for every live subscriber and forgets the dropped ones.
    fn broadcast(&mut self) {
        let before = self.senders.len();
        let current = &self.current;
        self.senders.retain(|tx| tx.try_send(current.clone()).is_ok());

        let pruned = before - self.senders.len();
        if pruned > 0 {
            debug!("latest value subject pruned {} dropped subscribers", pruned);
        }
    }
}

/// A hot subject that remembers its latest value and replays it to new subscribers.
///
/// See the [module documentation](self) for examples and more details.
pub struct LatestValueSubject<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> LatestValueSubject<T> {
    /// Creates a new open subject holding `initial` as its current value.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                current: initial,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to this subject.
    ///
    /// The returned stream yields the current value immediately, then one item per
    /// subsequent [`send`](Self::send) or [`update`](Self::update). Registration and the
    /// replay happen under the same lock as pushes, so no value can slip in between.
    ///
    /// Subscribing to a closed subject yields a stream that ends immediately.
    pub fn subscribe(&self) -> SubjectBoxStream<T> {
        let mut state = self.state.lock();
        let (tx, rx) = async_channel::unbounded();

        if !state.closed && tx.try_send(state.current.clone()).is_ok() {
            state.senders.push(tx);
        }

        Box::pin(rx)
    }

    /// Subscribe to values pushed from now on, without the replay of the current value.
    ///
    /// The subscription is registered immediately: a push that happens before the returned
    /// stream is first polled is still delivered. Subscribing to a closed subject yields a
    /// stream that ends immediately.
    pub fn subscribe_updates(&self) -> SubjectBoxStream<T> {
        let mut state = self.state.lock();
        let (tx, rx) = async_channel::unbounded();

        if !state.closed {
            state.senders.push(tx);
        }

        Box::pin(rx)
    }

    /// Replace the current value and push it to all active subscribers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn send(&self, value: T) -> Result<(), SubjectError> {
        self.update(|current| *current = value)
    }

    /// Read-modify-write the current value, then push the result to all active subscribers.
    ///
    /// The mutation and the push form one critical section: concurrent updates are
    /// observed by every subscriber in the order they were applied.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed; `f` is not called.
    pub fn update<F>(&self, f: F) -> Result<(), SubjectError>
    where
        F: FnOnce(&mut T),
    {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        f(&mut state.current);
        state.broadcast();
        Ok(())
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn value(&self) -> T {
        self.state.lock().current.clone()
    }

    /// Runs `f` against the current value without copying it.
    ///
    /// `f` runs under the subject's lock: it must not call back into this subject.
    pub fn with_value<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.state.lock().current)
    }

    /// Closes the subject, completing all subscriber streams.
    ///
    /// After closing, `send()` and `update()` return `SubjectError::Closed` and
    /// `subscribe()` returns an already completed stream. The current value stays readable.
    ///
    /// Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if !state.closed {
            debug!(
                "latest value subject closed with {} subscribers",
                state.senders.len()
            );
        }
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently registered subscribers.
    ///
    /// Note: dropped subscribers are removed on the next push, not immediately.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + Sync + Default + 'static> Default for LatestValueSubject<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for LatestValueSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
