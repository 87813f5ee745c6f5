//! Cloud reservation rules: validation interpretation and status lines.
//!
//! Pure functions only; callers supply the timestamp.

use chrono::{DateTime, Utc};
use quads_api_types::AssignmentStatus;

/// Validation state of a cloud as sampled by one status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    Pending,
    Validated,
}

impl ValidationState {
    #[must_use]
    pub fn is_validated(self) -> bool {
        self == Self::Validated
    }
}

/// Interpret the `validated` field of an assignment.
///
/// A missing field is pending. A present field is validated unless its
/// textual form, lower-cased, is `false`, so `false`, `"False"` and
/// `"FALSE"` are pending while `true`, `"yes"`, `1` or `null` are validated.
#[must_use]
pub fn validation_state(status: &AssignmentStatus) -> ValidationState {
    let Some(value) = &status.validated else {
        return ValidationState::Pending;
    };

    let text = match value {
        serde_json::Value::String(s) => s.to_lowercase(),
        other => other.to_string().to_lowercase(),
    };

    if text == "false" {
        ValidationState::Pending
    } else {
        ValidationState::Validated
    }
}

/// Format a UTC timestamp the way poll lines show it.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// One poll line: `2025-01-01 12:00:00 UTC: cloud02 is validated`.
#[must_use]
pub fn format_poll_line(at: DateTime<Utc>, cloud: &str, state: ValidationState) -> String {
    let verdict = match state {
        ValidationState::Pending => "is not validated yet",
        ValidationState::Validated => "is validated",
    };
    format!("{}: {cloud} {verdict}", format_timestamp(at))
}

/// Render one entry of the available-hosts listing.
///
/// Hostnames arrive as JSON strings and print bare; anything else prints as
/// compact JSON.
#[must_use]
pub fn format_host(host: &serde_json::Value) -> String {
    match host {
        serde_json::Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}
