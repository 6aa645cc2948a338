// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Opsdesk request tracker.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use opsdesk_core::{OpsdeskError, RequestStatus};
use opsdesk_escalation::{BusinessCalendar, EscalationPolicy, DEFAULT_REASON, DEFAULT_THRESHOLD};

/// Top-level Opsdesk configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpsdeskConfig {
    /// Desk identity and logging settings.
    #[serde(default)]
    pub desk: DeskConfig,

    /// Durable slot settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Automatic escalation rule settings.
    #[serde(default)]
    pub escalation: EscalationConfig,
}

/// Desk identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DeskConfig {
    /// Display name of the desk.
    #[serde(default = "default_desk_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            name: default_desk_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_desk_name() -> String {
    "opsdesk".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Durable slot configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the JSON file holding the serialized request collection.
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

fn default_data_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("opsdesk").join("requests.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("requests.json"))
        .to_string_lossy()
        .into_owned()
}

/// Automatic escalation rule configuration.
///
/// Statuses, weekdays, and holidays are kept as strings here and parsed
/// during validation, so a typo surfaces as a config diagnostic instead
/// of a deserialization panic deep in the stack.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EscalationConfig {
    /// Elapsed business days before an eligible request escalates.
    #[serde(default = "default_threshold")]
    pub threshold_business_days: u32,

    /// Statuses still awaiting first action, eligible for escalation.
    /// Conservative default: only the initial submission status.
    #[serde(default = "default_eligible_statuses")]
    pub eligible_statuses: Vec<String>,

    /// Explanatory string stamped onto escalated requests.
    #[serde(default = "default_reason")]
    pub reason: String,

    /// Weekdays that never count as business days.
    #[serde(default = "default_non_working_weekdays")]
    pub non_working_weekdays: Vec<String>,

    /// Holiday dates (`YYYY-MM-DD`) excluded from business-day counting.
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            threshold_business_days: default_threshold(),
            eligible_statuses: default_eligible_statuses(),
            reason: default_reason(),
            non_working_weekdays: default_non_working_weekdays(),
            holidays: Vec::new(),
        }
    }
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

fn default_eligible_statuses() -> Vec<String> {
    vec![RequestStatus::Submitted.to_string()]
}

fn default_reason() -> String {
    DEFAULT_REASON.to_string()
}

fn default_non_working_weekdays() -> Vec<String> {
    vec!["Sat".to_string(), "Sun".to_string()]
}

impl EscalationConfig {
    /// Build the runtime policy from this section.
    ///
    /// Validation checks the same parses up front; an error here means
    /// the config was not validated first.
    pub fn to_policy(&self) -> Result<EscalationPolicy, OpsdeskError> {
        let eligible = self
            .eligible_statuses
            .iter()
            .map(|s| {
                RequestStatus::from_str(s)
                    .map_err(|_| OpsdeskError::Config(format!("unknown request status `{s}`")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let non_working = self
            .non_working_weekdays
            .iter()
            .map(|s| {
                Weekday::from_str(s)
                    .map_err(|_| OpsdeskError::Config(format!("unknown weekday `{s}`")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let holidays = self
            .holidays
            .iter()
            .map(|s| {
                NaiveDate::from_str(s)
                    .map_err(|_| OpsdeskError::Config(format!("invalid holiday date `{s}`")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EscalationPolicy::new(
            eligible,
            self.threshold_business_days,
            self.reason.clone(),
            BusinessCalendar::new(non_working, holidays),
        ))
    }
}
