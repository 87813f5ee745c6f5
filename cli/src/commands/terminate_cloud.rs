//! `auto-quads terminate-cloud`: tear down a cloud reservation.

use anyhow::Result;
use clap::Args;
use quads_api_types::AssignmentId;

use crate::app::AppContext;
use crate::application::ports::QuadsApi;
use crate::application::services::cloud;

/// Arguments for the terminate-cloud command.
#[derive(Args, Debug)]
pub struct TerminateCloudArgs {
    /// Assignment ID
    #[arg(short = 'i', long, env = "QUADS_ASSIGNMENT_ID")]
    pub assignment_id: String,
}

/// Run `auto-quads terminate-cloud`.
///
/// # Errors
///
/// Returns an error if login fails or the server does not answer `200`.
pub fn run(app: &AppContext, api: &impl QuadsApi, args: &TerminateCloudArgs) -> Result<()> {
    let session = app.login(api, "terminate a cloud")?;
    let assignment_id = AssignmentId::new(args.assignment_id.clone());
    cloud::terminate_cloud(
        api,
        &session,
        app.settings.cloud_label(),
        &assignment_id,
        &app.reporter(),
    )
}
