// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Opsdesk configuration system.

use opsdesk_config::diagnostic::{suggest_key, ConfigError};
use opsdesk_config::model::OpsdeskConfig;
use opsdesk_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_opsdesk_config() {
    let toml = r#"
[desk]
name = "site-office"
log_level = "debug"

[storage]
data_path = "/tmp/requests.json"

[escalation]
threshold_business_days = 5
eligible_statuses = ["Submitted", "AwaitingApproval"]
reason = "stalled beyond five working days"
non_working_weekdays = ["Sat", "Sun"]
holidays = ["2026-12-25"]
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.desk.name, "site-office");
    assert_eq!(config.desk.log_level, "debug");
    assert_eq!(config.storage.data_path, "/tmp/requests.json");
    assert_eq!(config.escalation.threshold_business_days, 5);
    assert_eq!(
        config.escalation.eligible_statuses,
        vec!["Submitted", "AwaitingApproval"]
    );
    assert_eq!(config.escalation.reason, "stalled beyond five working days");
    assert_eq!(config.escalation.holidays, vec!["2026-12-25"]);
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.desk.name, "opsdesk");
    assert_eq!(config.desk.log_level, "info");
    assert!(!config.storage.data_path.is_empty());
    assert_eq!(config.escalation.threshold_business_days, 3);
    assert_eq!(config.escalation.eligible_statuses, vec!["Submitted"]);
    assert_eq!(
        config.escalation.non_working_weekdays,
        vec!["Sat", "Sun"]
    );
    assert!(config.escalation.holidays.is_empty());
}

/// Unknown field in [escalation] section is rejected.
#[test]
fn unknown_field_in_escalation_produces_error() {
    let toml = r#"
[escalation]
treshold_business_days = 2
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("treshold_business_days"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[requests]
path = "/tmp/x.json"
"#;

    let err = load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("requests"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Dot-notation overrides (as produced by the env provider) land in the
/// right nested keys despite embedded underscores.
#[test]
fn dot_notation_override_keeps_underscored_keys_intact() {
    use figment::{providers::Serialized, Figment};

    let config: OpsdeskConfig = Figment::new()
        .merge(Serialized::defaults(OpsdeskConfig::default()))
        .merge(("storage.data_path", "/var/lib/opsdesk/slot.json"))
        .merge(("escalation.threshold_business_days", 7u32))
        .extract()
        .expect("dot-notation overrides should merge");

    assert_eq!(config.storage.data_path, "/var/lib/opsdesk/slot.json");
    assert_eq!(config.escalation.threshold_business_days, 7);
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: OpsdeskConfig = Figment::new()
        .merge(Serialized::defaults(OpsdeskConfig::default()))
        .merge(Toml::file("/nonexistent/path/opsdesk.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.desk.name, "opsdesk");
}

/// Unknown key produces an UnknownKey diagnostic with a suggestion.
#[test]
fn diagnostic_error_includes_unknown_key_and_suggestion() {
    let toml = r#"
[storage]
data_pth = "/tmp/x.json"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "data_pth"
                && suggestion.as_deref() == Some("data_path")
                && valid_keys.contains("data_path")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for `data_pth` with suggestion `data_path`, got: {errors:?}"
    );
}

/// Invalid type (string where number expected) is rejected.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[escalation]
threshold_business_days = "three"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("threshold_business_days"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError implements miette::Diagnostic and renders.
#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "data_pth".to_string(),
        suggestion: Some("data_path".to_string()),
        valid_keys: "data_path".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some(), "should have diagnostic code");
    let help = error.help().expect("should have help text").to_string();
    assert!(
        help.contains("did you mean `data_path`"),
        "help should contain suggestion, got: {help}"
    );

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("data_pth"), "rendered report should mention the key");
}

/// Fuzzy suggestions come from Jaro-Winkler similarity.
#[test]
fn diagnostic_suggestions_use_fuzzy_matching() {
    let valid_keys = &["threshold_business_days", "eligible_statuses", "reason"];
    assert_eq!(
        suggest_key("eligible_statusses", valid_keys),
        Some("eligible_statuses".to_string())
    );
    assert!(suggest_key("qqqqq", valid_keys).is_none());
}

/// load_and_validate_str surfaces semantic validation failures.
#[test]
fn validation_catches_zero_threshold() {
    let toml = r#"
[escalation]
threshold_business_days = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("zero threshold should fail");
    let has_validation_error = errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("threshold_business_days"))
    });
    assert!(has_validation_error, "should have validation error for zero threshold");
}

/// A validated config builds a usable escalation policy.
#[test]
fn validated_config_builds_policy() {
    let toml = r#"
[escalation]
threshold_business_days = 2
eligible_statuses = ["Submitted"]
reason = "two days without action"
"#;

    let config = load_and_validate_str(toml).expect("should validate");
    let policy = config.escalation.to_policy().expect("should build policy");
    assert_eq!(policy.reason(), "two days without action");
}
