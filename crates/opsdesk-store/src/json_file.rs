// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON file backend for the persistence slot.
//!
//! The whole request collection is serialized as one JSON array into a
//! single named file. Writes go to a sibling temp file first and are
//! renamed into place so a crash mid-write cannot truncate the slot.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use opsdesk_core::{OpsdeskError, Persistence, ServiceRequest};

/// Persistence backed by a single JSON file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot path this backend reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl Persistence for JsonFileStorage {
    async fn load(&self) -> Result<Vec<ServiceRequest>, OpsdeskError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "slot file absent, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(OpsdeskError::persistence(e)),
        };
        serde_json::from_slice(&bytes).map_err(OpsdeskError::persistence)
    }

    async fn save(&self, requests: &[ServiceRequest]) -> Result<(), OpsdeskError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(OpsdeskError::persistence)?;
        }

        let bytes = serde_json::to_vec_pretty(requests).map_err(OpsdeskError::persistence)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes)
            .await
            .map_err(OpsdeskError::persistence)?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(OpsdeskError::persistence)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use opsdesk_core::{RequestDraft, ServiceRequest};

    fn sample() -> ServiceRequest {
        ServiceRequest::from_draft(
            RequestDraft {
                title: "Order cement".into(),
                requester: "bruno".into(),
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("requests.json"));
        assert!(storage.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("requests.json"));

        let requests = vec![sample(), sample()];
        storage.save(&requests).await.unwrap();

        let loaded = storage.load().await.unwrap();
        assert_eq!(loaded, requests);
        assert_eq!(loaded[0].submitted_at, requests[0].submitted_at);
    }

    #[tokio::test]
    async fn save_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested/deeper/requests.json"));
        storage.save(&[sample()]).await.unwrap();
        assert_eq!(storage.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_slot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("requests.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(storage.load().await.is_err());
    }

    #[tokio::test]
    async fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("requests.json"));
        storage.save(&[sample()]).await.unwrap();

        let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        assert_eq!(names, vec!["requests.json"]);
    }
}
