// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request store and persistence backends for Opsdesk.
//!
//! [`RequestStore`] holds the authoritative in-process collection of
//! service requests and applies the escalation policy on demand.
//! [`JsonFileStorage`] is the durable slot: one JSON array in one file.

pub mod json_file;
pub mod store;

pub use json_file::JsonFileStorage;
pub use store::RequestStore;
