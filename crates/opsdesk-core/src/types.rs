// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types for service requests and their lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a service request (UUID v4 string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of a service request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum RequestStatus {
    /// Initial status after submission, awaiting first action.
    Submitted,
    /// Accepted by an approver.
    Approved,
    /// Actively being worked on.
    InProgress,
    /// Work done, waiting for sign-off.
    AwaitingApproval,
    /// Closed successfully.
    Completed,
    /// Closed without action.
    Rejected,
    /// Flagged by the escalation rule as needing attention.
    Pending,
}

/// A service request held by the request store.
///
/// The four audit fields (`previous_status`, `auto_transitioned_at`,
/// `auto_transition_reason`, `was_auto_transitioned`) are populated only
/// together, and only by the escalation path. [`RequestPatch`] carries no
/// audit fields, so user edits cannot reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: RequestId,
    pub title: String,
    pub requester: String,
    pub submitted_at: DateTime<Utc>,
    pub status: RequestStatus,
    #[serde(default)]
    pub previous_status: Option<RequestStatus>,
    #[serde(default)]
    pub auto_transitioned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub auto_transition_reason: Option<String>,
    #[serde(default)]
    pub was_auto_transitioned: bool,
}

impl ServiceRequest {
    /// Build a new request from a draft, stamping id and submission time.
    pub fn from_draft(draft: RequestDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RequestId::generate(),
            title: draft.title,
            requester: draft.requester,
            submitted_at: now,
            status: RequestStatus::Submitted,
            previous_status: None,
            auto_transitioned_at: None,
            auto_transition_reason: None,
            was_auto_transitioned: false,
        }
    }

    /// Merge a patch into this request. `Some` fields overwrite, `None`
    /// fields are left untouched.
    pub fn apply(&mut self, patch: RequestPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(requester) = patch.requester {
            self.requester = requester;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// User-supplied fields for a new submission.
#[derive(Debug, Clone)]
pub struct RequestDraft {
    pub title: String,
    pub requester: String,
}

/// Partial update for an existing request.
///
/// Deliberately excludes the escalation audit fields.
#[derive(Debug, Clone, Default)]
pub struct RequestPatch {
    pub title: Option<String>,
    pub requester: Option<String>,
    pub status: Option<RequestStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RequestDraft {
        RequestDraft {
            title: "Replace scaffold bolts".into(),
            requester: "ana".into(),
        }
    }

    #[test]
    fn from_draft_stamps_id_time_and_initial_status() {
        let now = Utc::now();
        let req = ServiceRequest::from_draft(draft(), now);
        assert!(!req.id.0.is_empty());
        assert_eq!(req.submitted_at, now);
        assert_eq!(req.status, RequestStatus::Submitted);
        assert!(!req.was_auto_transitioned);
        assert!(req.previous_status.is_none());
        assert!(req.auto_transitioned_at.is_none());
        assert!(req.auto_transition_reason.is_none());
    }

    #[test]
    fn apply_merges_only_some_fields() {
        let mut req = ServiceRequest::from_draft(draft(), Utc::now());
        req.apply(RequestPatch {
            status: Some(RequestStatus::Approved),
            ..RequestPatch::default()
        });
        assert_eq!(req.status, RequestStatus::Approved);
        assert_eq!(req.title, "Replace scaffold bolts");
        assert_eq!(req.requester, "ana");
    }

    #[test]
    fn status_display_and_parse_round_trip() {
        use std::str::FromStr;
        let variants = [
            RequestStatus::Submitted,
            RequestStatus::Approved,
            RequestStatus::InProgress,
            RequestStatus::AwaitingApproval,
            RequestStatus::Completed,
            RequestStatus::Rejected,
            RequestStatus::Pending,
        ];
        assert_eq!(variants.len(), 7, "RequestStatus must have exactly 7 variants");
        for variant in &variants {
            let s = variant.to_string();
            let parsed = RequestStatus::from_str(&s).expect("should parse back");
            assert_eq!(*variant, parsed);
        }
    }

    #[test]
    fn request_serde_round_trip_restores_dates() {
        let req = ServiceRequest::from_draft(draft(), Utc::now());
        let json = serde_json::to_string(&req).expect("should serialize");
        let parsed: ServiceRequest = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(req, parsed);
        assert_eq!(req.submitted_at, parsed.submitted_at);
    }

    #[test]
    fn audit_fields_default_when_missing_from_json() {
        // Records written before escalation existed carry no audit fields.
        let json = format!(
            r#"{{"id":"r-1","title":"t","requester":"u","submitted_at":"{}","status":"Submitted"}}"#,
            Utc::now().to_rfc3339()
        );
        let parsed: ServiceRequest = serde_json::from_str(&json).expect("should deserialize");
        assert!(!parsed.was_auto_transitioned);
        assert!(parsed.previous_status.is_none());
    }
}
