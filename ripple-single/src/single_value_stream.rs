// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Empty, Once};
use futures::{Future, Stream};

/// Marker for streams that emit at most one value per subscription.
///
/// Implementing this trait is a promise made by the producer: every subscription emits
/// zero or one value and then completes, or fails without having emitted a value. After
/// a value, a failure or completion, nothing else is ever emitted.
///
/// The promise cannot be checked from the emission history, so it is never inferred.
/// Streams that don't implement it can obtain it through
/// [`first_value_only`](crate::FirstValueOnlyExt::first_value_only).
pub trait SingleValueStream: Stream {}

impl<Fut: Future> SingleValueStream for Once<Fut> {}

impl<T> SingleValueStream for Empty<T> {}
