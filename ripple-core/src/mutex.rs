// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The lock used for every piece of shared state in ripple.
//!
//! `parking_lot::Mutex` never poisons, so a panicking subscriber cannot wedge a subject
//! or a dictionary for the other threads using it.

pub use parking_lot::Mutex;
