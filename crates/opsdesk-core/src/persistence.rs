// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence seam for the request store.

use async_trait::async_trait;

use crate::error::OpsdeskError;
use crate::types::ServiceRequest;

/// Adapter for the durable slot holding the serialized request collection.
///
/// The store serializes the whole collection after every mutation and
/// deserializes it once on open. Implementations must treat a missing
/// slot as an empty collection; only malformed or unreadable data is an
/// error.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Read the full collection from the slot.
    async fn load(&self) -> Result<Vec<ServiceRequest>, OpsdeskError>;

    /// Replace the slot contents with the given collection.
    async fn save(&self, requests: &[ServiceRequest]) -> Result<(), OpsdeskError>;
}
