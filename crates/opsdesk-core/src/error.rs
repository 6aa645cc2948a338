// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Opsdesk request tracker.

use thiserror::Error;

/// The primary error type used across all Opsdesk crates.
#[derive(Debug, Error)]
pub enum OpsdeskError {
    /// Configuration errors (invalid TOML, unknown statuses, bad thresholds).
    #[error("configuration error: {0}")]
    Config(String),

    /// Persistence errors (slot read/write failure, malformed JSON).
    #[error("persistence error: {source}")]
    Persistence {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl OpsdeskError {
    /// Wrap any error as a persistence failure.
    pub fn persistence<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Persistence {
            source: Box::new(source),
        }
    }
}
