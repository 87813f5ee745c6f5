//! `auto-quads wait-for-cloud`: block until a cloud finishes validating.

use anyhow::Result;
use clap::Args;
use quads_api_types::AssignmentId;

use crate::app::AppContext;
use crate::application::ports::{Clock, QuadsApi};
use crate::application::services::wait::{self, WaitOutcome};
use crate::domain::WaitPolicy;
use crate::domain::config::{DEFAULT_POLL_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};

/// Arguments for the wait-for-cloud command.
#[derive(Args, Debug)]
pub struct WaitForCloudArgs {
    /// Assignment ID
    #[arg(short = 'i', long, env = "QUADS_ASSIGNMENT_ID")]
    pub assignment_id: String,

    /// Timeout in seconds
    #[arg(short, long, env = "QUADS_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Poll interval in seconds
    #[arg(short, long, env = "QUADS_POLL_INTERVAL", default_value_t = DEFAULT_POLL_INTERVAL_SECS)]
    pub poll_interval: u64,
}

/// Run `auto-quads wait-for-cloud`. No login is needed.
///
/// Reaching the timeout is not an error: the command still succeeds, it just
/// never prints the validated line.
///
/// # Errors
///
/// Returns an error if the timeout or poll interval is zero, or if a status
/// query fails.
pub fn run(
    app: &AppContext,
    api: &impl QuadsApi,
    clock: &impl Clock,
    args: &WaitForCloudArgs,
) -> Result<WaitOutcome> {
    let policy = WaitPolicy::from_secs(args.timeout, args.poll_interval)?;
    let assignment_id = AssignmentId::new(args.assignment_id.clone());
    wait::wait_for_validation(
        api,
        clock,
        &app.reporter(),
        app.settings.cloud_label(),
        &assignment_id,
        policy,
    )
}
