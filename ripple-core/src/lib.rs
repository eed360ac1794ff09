// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core building blocks shared by every ripple crate.
//!
//! - [`StreamItem`]: the event carried by fallible streams. `Value` is a value event,
//!   `Error` is a terminal failure, and the end of the stream is completion.
//! - [`RippleError`] / [`SubjectError`]: the error taxonomy.
//! - [`LatestValueSubject`]: a hot subject that remembers its latest value and replays it
//!   to every new subscriber before any later value.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod error;
pub mod latest_value_subject;
pub mod mutex;
pub mod stream_item;
pub mod subject_error;

pub use self::error::{Result, RippleError};
pub use self::latest_value_subject::{LatestValueSubject, SubjectBoxStream};
pub use self::stream_item::StreamItem;
pub use self::subject_error::SubjectError;
