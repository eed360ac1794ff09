// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RippleError;
use core::fmt::Debug;

/// A stream event that is either a value or a terminal failure.
///
/// Fallible ripple streams are `Stream<Item = StreamItem<T, E>>`. Following Rx semantics,
/// an `Error` terminates the sequence, and the end of the stream (`None` from `poll_next`)
/// is the completion event. Streams that never fail use `E = Infallible`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamItem<T, E = RippleError> {
    /// A successful value
    Value(T),
    /// A failure that terminates the stream
    Error(E),
}

impl<T, E> StreamItem<T, E> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, StreamItem::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    /// Converts from `StreamItem<T, E>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            StreamItem::Value(v) => Some(v),
            StreamItem::Error(_) => None,
        }
    }

    /// Converts from `StreamItem<T, E>` to `Option<E>`, discarding values.
    pub fn err(self) -> Option<E> {
        match self {
            StreamItem::Value(_) => None,
            StreamItem::Error(e) => Some(e),
        }
    }

    /// Maps a `StreamItem<T, E>` to `StreamItem<U, E>` by applying a function to the contained value.
    ///
    /// Errors are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> StreamItem<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(f(v)),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

    /// Maps the failure of a `StreamItem`, leaving values untouched.
    pub fn map_err<E2, F>(self, f: F) -> StreamItem<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(v),
            StreamItem::Error(e) => StreamItem::Error(f(e)),
        }
    }

    /// Maps a `StreamItem<T, E>` to `StreamItem<U, E>` by applying a function that can fail.
    ///
    /// Errors are propagated unchanged.
    pub fn and_then<U, F>(self, f: F) -> StreamItem<U, E>
    where
        F: FnOnce(T) -> StreamItem<U, E>,
    {
        match self {
            StreamItem::Value(v) => f(v),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

    /// Returns the contained value, panicking if it's an error.
    ///
    /// # Panics
    ///
    /// Panics if the item is an `Error`.
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            StreamItem::Value(v) => v,
            StreamItem::Error(e) => {
                panic!("called `StreamItem::unwrap()` on an `Error` value: {e:?}")
            }
        }
    }

    /// Returns the contained value, panicking with a custom message if it's an error.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the item is an `Error`.
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            StreamItem::Value(v) => v,
            StreamItem::Error(e) => panic!("{msg}: {e:?}"),
        }
    }
}

impl<T, E> From<Result<T, E>> for StreamItem<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => StreamItem::Value(v),
            Err(e) => StreamItem::Error(e),
        }
    }
}

impl<T, E> From<StreamItem<T, E>> for Result<T, E> {
    fn from(item: StreamItem<T, E>) -> Self {
        match item {
            StreamItem::Value(v) => Ok(v),
            StreamItem::Error(e) => Err(e),
        }
    }
}
