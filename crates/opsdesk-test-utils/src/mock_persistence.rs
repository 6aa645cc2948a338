// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory mock persistence for deterministic store tests.
//!
//! `MemoryStorage` implements `Persistence` against a plain vector,
//! with switches to inject load/save failures and a counter recording
//! how often the store flushed its collection.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use opsdesk_core::{OpsdeskError, Persistence, ServiceRequest};

/// A mock persistence slot backed by an in-memory vector.
pub struct MemoryStorage {
    records: Arc<Mutex<Vec<ServiceRequest>>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
    save_count: AtomicUsize,
}

impl MemoryStorage {
    /// Create an empty mock slot.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            fail_loads: AtomicBool::new(false),
            fail_saves: AtomicBool::new(false),
            save_count: AtomicUsize::new(0),
        }
    }

    /// Create a mock slot pre-loaded with the given records.
    pub fn with_records(records: Vec<ServiceRequest>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            fail_loads: AtomicBool::new(false),
            fail_saves: AtomicBool::new(false),
            save_count: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent `load` fail.
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `save` fail.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// A copy of the currently persisted records.
    pub async fn snapshot(&self) -> Vec<ServiceRequest> {
        self.records.lock().await.clone()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Persistence for MemoryStorage {
    async fn load(&self) -> Result<Vec<ServiceRequest>, OpsdeskError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(OpsdeskError::persistence(std::io::Error::other(
                "injected load failure",
            )));
        }
        Ok(self.records.lock().await.clone())
    }

    async fn save(&self, requests: &[ServiceRequest]) -> Result<(), OpsdeskError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(OpsdeskError::persistence(std::io::Error::other(
                "injected save failure",
            )));
        }
        *self.records.lock().await = requests.to_vec();
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
