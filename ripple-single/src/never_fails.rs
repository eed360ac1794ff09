// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Map, Stream, StreamExt};
use ripple_core::StreamItem;
use std::convert::Infallible;

/// Stream returned by [`NeverFailsExt::never_fails`].
pub type NeverFails<S> =
    Map<S, fn(<S as Stream>::Item) -> StreamItem<<S as Stream>::Item, Infallible>>;

/// Lifts a plain stream into a fallible stream whose failure type is uninhabited.
///
/// This is the bridge between never-failing sources (like dictionary snapshots) and the
/// fallible operators of this crate:
///
/// ```rust
/// use ripple_single::{FirstValueOnlyExt, NeverFailsExt};
/// use futures::stream;
///
/// # #[tokio::main]
/// # async fn main() {
/// let single = stream::iter(vec![1, 2, 3]).never_fails().erase_to_single();
/// assert_eq!(single.outcome().await, Some(Ok(1)));
/// # }
/// ```
pub trait NeverFailsExt: Stream + Sized {
    fn never_fails(self) -> NeverFails<Self>;
}

impl<S: Stream> NeverFailsExt for S {
    fn never_fails(self) -> NeverFails<Self> {
        StreamExt::map(self, StreamItem::Value as fn(_) -> _)
    }
}
