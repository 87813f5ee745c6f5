//! Application service: block until a cloud finishes validating.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Time flows through the injected [`Clock`], so the loop runs on virtual time
//! in tests.

use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};
use quads_api_types::AssignmentId;

use crate::application::ports::{Clock, ProgressReporter, QuadsApi};
use crate::domain::WaitPolicy;
use crate::domain::cloud::{format_poll_line, validation_state};

/// How the poll loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The server reported the cloud validated on poll number `polls`.
    Validated { polls: u32 },
    /// The deadline passed after `polls` queries without validation.
    TimedOut { polls: u32 },
}

impl WaitOutcome {
    /// Number of status queries sent.
    #[must_use]
    pub fn polls(self) -> u32 {
        match self {
            Self::Validated { polls } | Self::TimedOut { polls } => polls,
        }
    }
}

/// Poll the assignment until it is validated or `policy.timeout` elapses.
///
/// The deadline is checked before every query, and the loop sleeps one poll
/// interval after each pending answer. A timeout is reported as
/// [`WaitOutcome::TimedOut`], not as an error.
///
/// # Errors
///
/// Returns the first failing status query's error; nothing is retried.
pub fn wait_for_validation(
    api: &impl QuadsApi,
    clock: &impl Clock,
    reporter: &impl ProgressReporter,
    cloud_label: &str,
    assignment_id: &AssignmentId,
    policy: WaitPolicy,
) -> Result<WaitOutcome> {
    reporter.step(&format!(
        "Waiting for a cloud {cloud_label} to complete validating"
    ));

    let deadline = deadline(clock.now(), policy);
    let mut polls = 0u32;

    while clock.now() < deadline {
        let status = api.assignment_status(assignment_id)?;
        polls += 1;

        let state = validation_state(&status);
        tracing::debug!(%assignment_id, polls, ?state, "polled assignment");
        let line = format_poll_line(clock.now(), cloud_label, state);

        if state.is_validated() {
            reporter.success(&line);
            return Ok(WaitOutcome::Validated { polls });
        }

        reporter.step(&line);
        clock.sleep(policy.poll_interval);
    }

    tracing::info!(
        %assignment_id,
        polls,
        timeout_secs = policy.timeout.as_secs(),
        "deadline passed before cloud validated"
    );
    Ok(WaitOutcome::TimedOut { polls })
}

fn deadline(start: DateTime<Utc>, policy: WaitPolicy) -> DateTime<Utc> {
    TimeDelta::from_std(policy.timeout)
        .ok()
        .and_then(|timeout| start.checked_add_signed(timeout))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
