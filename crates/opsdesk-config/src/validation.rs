// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: parseable statuses and dates, a sane threshold, a
//! non-empty slot path.

use std::str::FromStr;

use chrono::{NaiveDate, Weekday};

use opsdesk_core::RequestStatus;

use crate::diagnostic::ConfigError;
use crate::model::OpsdeskConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &OpsdeskConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.desk.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "desk.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.desk.log_level
            ),
        });
    }

    if config.storage.data_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.data_path must not be empty".to_string(),
        });
    }

    if config.escalation.threshold_business_days == 0 {
        errors.push(ConfigError::Validation {
            message: "escalation.threshold_business_days must be at least 1".to_string(),
        });
    }

    for status in &config.escalation.eligible_statuses {
        match RequestStatus::from_str(status) {
            Ok(RequestStatus::Pending) => errors.push(ConfigError::Validation {
                message: "escalation.eligible_statuses must not contain the escalation \
                          target `Pending`"
                    .to_string(),
            }),
            Ok(_) => {}
            Err(_) => errors.push(ConfigError::Validation {
                message: format!(
                    "escalation.eligible_statuses contains unknown status `{status}`"
                ),
            }),
        }
    }

    if config.escalation.reason.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "escalation.reason must not be empty".to_string(),
        });
    }

    for day in &config.escalation.non_working_weekdays {
        if Weekday::from_str(day).is_err() {
            errors.push(ConfigError::Validation {
                message: format!(
                    "escalation.non_working_weekdays contains unknown weekday `{day}`"
                ),
            });
        }
    }

    for holiday in &config.escalation.holidays {
        if NaiveDate::from_str(holiday).is_err() {
            errors.push(ConfigError::Validation {
                message: format!(
                    "escalation.holidays contains invalid date `{holiday}` (expected YYYY-MM-DD)"
                ),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
