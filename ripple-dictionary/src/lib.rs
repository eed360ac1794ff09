// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observable key-value storage.
//!
//! [`ObservableDictionary`] is a synchronized map whose whole content is published as a
//! stream of snapshots: every mutation pushes the new full mapping to every subscriber,
//! and a new subscriber immediately receives the current mapping.
//!
//! ```
//! use ripple_dictionary::ObservableDictionary;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let sessions = ObservableDictionary::new();
//! let mut count = sessions.count();
//!
//! sessions.set_value("alice", Some(1));
//! sessions.set_value("bob", Some(2));
//!
//! assert_eq!(count.next().await, Some(0));
//! assert_eq!(count.next().await, Some(1));
//! assert_eq!(count.next().await, Some(2));
//! assert_eq!(sessions.value_for_key("bob"), Some(2));
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod observable_dictionary;

pub use self::observable_dictionary::{ObservableDictionary, Snapshot};
