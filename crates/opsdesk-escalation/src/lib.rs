// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Business-day arithmetic and the automatic escalation rule for Opsdesk.
//!
//! A request left in an eligible status for a configured number of
//! business days is escalated to `Pending` to signal that it needs
//! attention. Everything here is pure: the request store owns the
//! mutation and audit stamping.

pub mod business_days;
pub mod policy;

pub use business_days::{business_days_between, BusinessCalendar};
pub use policy::{EscalationPolicy, DEFAULT_REASON, DEFAULT_THRESHOLD};
