// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Opsdesk request tracker.
//!
//! This crate provides the error type, the service-request domain types,
//! and the persistence trait the request store is built against. All
//! other Opsdesk crates depend on the definitions here.

pub mod error;
pub mod persistence;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::OpsdeskError;
pub use persistence::Persistence;
pub use types::{RequestDraft, RequestId, RequestPatch, RequestStatus, ServiceRequest};
