//! `auto-quads create-cloud`: create a new self-scheduled cloud.

use anyhow::Result;
use clap::Args;
use clap::builder::BoolishValueParser;
use quads_api_types::SelfAssignmentRequest;

use crate::app::AppContext;
use crate::application::ports::QuadsApi;
use crate::application::services::cloud::{self, CreatedCloud};

/// Arguments for the create-cloud command.
#[derive(Args, Debug)]
pub struct CreateCloudArgs {
    /// Cloud description
    #[arg(short, long, env = "QUADS_DESCRIPTION")]
    pub description: String,

    /// QinQ VLAN mode
    #[arg(
        short,
        long,
        env = "QUADS_QINQ",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=1)
    )]
    pub qinq: u8,

    /// Wipe the cloud
    #[arg(short, long, env = "QUADS_WIPE", value_parser = BoolishValueParser::new())]
    pub wipe: bool,
}

/// Run `auto-quads create-cloud`.
///
/// # Errors
///
/// Returns an error if login fails or the server does not create the cloud.
pub fn run(app: &AppContext, api: &impl QuadsApi, args: &CreateCloudArgs) -> Result<CreatedCloud> {
    let session = app.login(api, "create a cloud")?;

    // Login succeeded, so a username was present and `Settings` derived an owner.
    let request = SelfAssignmentRequest {
        description: args.description.clone(),
        owner: app.settings.owner.clone().unwrap_or_default(),
        qinq: args.qinq,
        wipe: args.wipe,
    };
    cloud::create_cloud(api, &session, &request, &app.reporter())
}
