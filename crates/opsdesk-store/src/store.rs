// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The request store: the authoritative in-process request collection.
//!
//! `RequestStore` owns an ordered vector of requests (front = newest),
//! exposes CRUD operations, and applies the escalation policy across the
//! whole collection on demand. Every mutation re-serializes the full
//! collection through the injected [`Persistence`] adapter. Persistence
//! failures degrade to a logged warning; the in-memory collection stays
//! authoritative for the session.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use opsdesk_core::{Persistence, RequestDraft, RequestId, RequestPatch, ServiceRequest};
use opsdesk_escalation::EscalationPolicy;

/// In-memory request collection with injected persistence and escalation policy.
pub struct RequestStore {
    requests: Vec<ServiceRequest>,
    persistence: Arc<dyn Persistence>,
    policy: EscalationPolicy,
}

impl RequestStore {
    /// Open the store, loading the persisted collection.
    ///
    /// A load failure is logged and the store starts empty; it is never
    /// surfaced as a blocking error.
    pub async fn open(persistence: Arc<dyn Persistence>, policy: EscalationPolicy) -> Self {
        let requests = match persistence.load().await {
            Ok(requests) => {
                debug!(count = requests.len(), "request collection loaded");
                requests
            }
            Err(e) => {
                warn!(error = %e, "failed to load request collection, starting empty");
                Vec::new()
            }
        };
        Self {
            requests,
            persistence,
            policy,
        }
    }

    /// Submit a new request: stamps id and submission time, inserts at the
    /// front of the collection, persists. Returns the assigned id.
    pub async fn submit(&mut self, draft: RequestDraft) -> RequestId {
        let request = ServiceRequest::from_draft(draft, Utc::now());
        let id = request.id.clone();
        info!(id = %id, title = %request.title, "request submitted");
        self.requests.insert(0, request);
        self.persist().await;
        id
    }

    /// Merge a patch into the matching request. A missing id is a silent
    /// no-op. Returns whether a request was updated.
    pub async fn update(&mut self, id: &RequestId, patch: RequestPatch) -> bool {
        let Some(request) = self.requests.iter_mut().find(|r| &r.id == id) else {
            debug!(id = %id, "update for unknown request id, ignoring");
            return false;
        };
        request.apply(patch);
        info!(id = %id, status = %request.status, "request updated");
        self.persist().await;
        true
    }

    /// Delete the matching request. A missing id is a silent no-op.
    /// Returns whether a request was removed.
    pub async fn remove(&mut self, id: &RequestId) -> bool {
        let before = self.requests.len();
        self.requests.retain(|r| &r.id != id);
        if self.requests.len() == before {
            debug!(id = %id, "remove for unknown request id, ignoring");
            return false;
        }
        info!(id = %id, "request removed");
        self.persist().await;
        true
    }

    /// Look up a request by id.
    pub fn get(&self, id: &RequestId) -> Option<&ServiceRequest> {
        self.requests.iter().find(|r| &r.id == id)
    }

    /// All requests, newest first.
    pub fn list(&self) -> &[ServiceRequest] {
        &self.requests
    }

    /// Apply the escalation policy to every request and commit the
    /// resulting transitions with their audit stamps.
    ///
    /// A request transitions only when the policy's decision differs from
    /// its current status and equals the escalation target, so a request
    /// already escalated is never re-stamped. Returns the number of
    /// requests escalated in this pass.
    pub async fn reevaluate_all(&mut self, now: DateTime<Utc>) -> usize {
        let mut escalated = 0;
        for request in &mut self.requests {
            let decided = self.policy.evaluate(request.status, request.submitted_at, now);
            if decided != request.status && decided == self.policy.target() {
                info!(
                    id = %request.id,
                    from = %request.status,
                    to = %decided,
                    "request escalated"
                );
                request.previous_status = Some(request.status);
                request.status = decided;
                request.auto_transitioned_at = Some(now);
                request.auto_transition_reason = Some(self.policy.reason().to_string());
                request.was_auto_transitioned = true;
                escalated += 1;
            }
        }
        self.persist().await;
        escalated
    }

    /// Serialize the whole collection to the slot, logging on failure.
    async fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.requests).await {
            warn!(error = %e, "failed to persist request collection");
        }
    }
}
