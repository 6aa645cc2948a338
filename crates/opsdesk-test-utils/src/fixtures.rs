// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request fixtures for store and escalation tests.

use chrono::{DateTime, TimeZone, Utc};

use opsdesk_core::{RequestDraft, RequestId, RequestStatus, ServiceRequest};

/// A draft with placeholder content.
pub fn sample_draft(title: &str) -> RequestDraft {
    RequestDraft {
        title: title.to_string(),
        requester: "test-user".to_string(),
    }
}

/// A request with the given status, submitted at the given instant.
pub fn request_with_status(
    title: &str,
    status: RequestStatus,
    submitted_at: DateTime<Utc>,
) -> ServiceRequest {
    ServiceRequest {
        id: RequestId::generate(),
        title: title.to_string(),
        requester: "test-user".to_string(),
        submitted_at,
        status,
        previous_status: None,
        auto_transitioned_at: None,
        auto_transition_reason: None,
        was_auto_transitioned: false,
    }
}

/// A UTC instant at 09:00 on the given date. Panics on invalid dates,
/// which is fine for fixtures.
pub fn morning(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
}
