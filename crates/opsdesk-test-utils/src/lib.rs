// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Opsdesk.
//!
//! Provides a mock persistence adapter and request fixtures for fast,
//! deterministic, CI-runnable tests without touching the filesystem.
//!
//! # Components
//!
//! - [`MemoryStorage`] - Mock persistence slot with failure injection
//! - [`fixtures`] - Request and timestamp builders

pub mod fixtures;
pub mod mock_persistence;

pub use mock_persistence::MemoryStorage;
