// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The automatic status-escalation rule.
//!
//! [`EscalationPolicy::evaluate`] is a pure decision function: given a
//! request's status and submission time, it returns the status the
//! request should hold. Stamping the audit fields is the caller's job
//! (see `RequestStore::reevaluate_all` in `opsdesk-store`).

use chrono::{DateTime, Utc};
use opsdesk_core::RequestStatus;

use crate::business_days::{business_days_between, BusinessCalendar};

/// Default reason string stamped onto escalated requests.
pub const DEFAULT_REASON: &str = "no action taken within the business-day threshold";

/// Default number of elapsed business days before a request escalates.
pub const DEFAULT_THRESHOLD: u32 = 3;

/// Decides when an unattended request is forced to [`RequestStatus::Pending`].
#[derive(Debug, Clone)]
pub struct EscalationPolicy {
    eligible: Vec<RequestStatus>,
    threshold_business_days: u32,
    reason: String,
    calendar: BusinessCalendar,
}

impl Default for EscalationPolicy {
    fn default() -> Self {
        // The eligible set is deliberately conservative: only requests
        // still in their initial status escalate.
        Self {
            eligible: vec![RequestStatus::Submitted],
            threshold_business_days: DEFAULT_THRESHOLD,
            reason: DEFAULT_REASON.to_string(),
            calendar: BusinessCalendar::default(),
        }
    }
}

impl EscalationPolicy {
    pub fn new(
        eligible: Vec<RequestStatus>,
        threshold_business_days: u32,
        reason: String,
        calendar: BusinessCalendar,
    ) -> Self {
        Self {
            eligible,
            threshold_business_days,
            reason,
            calendar,
        }
    }

    /// The status escalated requests are moved to.
    pub fn target(&self) -> RequestStatus {
        RequestStatus::Pending
    }

    /// The explanatory string stamped onto escalated requests.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Return the status the request should hold at `now`.
    ///
    /// Escalates to [`RequestStatus::Pending`] iff the current status is
    /// in the eligible set and at least `threshold_business_days` working
    /// days have elapsed since submission. Otherwise returns the status
    /// unchanged. No side effects.
    pub fn evaluate(
        &self,
        status: RequestStatus,
        submitted_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> RequestStatus {
        if !self.eligible.contains(&status) {
            return status;
        }
        let elapsed = business_days_between(submitted_at, now, &self.calendar);
        if elapsed >= self.threshold_business_days {
            self.target()
        } else {
            status
        }
    }
}
