//! `auto-quads add-hosts`: add one or more hosts to a cloud.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::QuadsApi;
use crate::application::services::hosts;

/// Arguments for the add-hosts command.
#[derive(Args, Debug)]
pub struct AddHostsArgs {
    /// Hostname(s) to add to the cloud
    #[arg(required = true, num_args = 1..)]
    pub hostname: Vec<String>,
}

/// Run `auto-quads add-hosts`.
///
/// # Errors
///
/// Returns an error if `--cloud` is missing, login fails, or any host is
/// rejected. Hosts added before the rejected one stay added.
pub fn run(app: &AppContext, api: &impl QuadsApi, args: &AddHostsArgs) -> Result<usize> {
    let cloud = app.settings.require_cloud("add hosts")?;
    let session = app.login(api, "add hosts")?;
    hosts::add_hosts(api, &session, cloud, &args.hostname, &app.reporter())
}
