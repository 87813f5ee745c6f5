//! CLI argument parsing with clap derive

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::domain::Settings;
use crate::infra::{HttpQuadsClient, SystemClock};

/// Tool to obtain a self-scheduled quads environment
#[derive(Parser, Debug)]
#[command(name = "auto-quads", version)]
pub struct Cli {
    /// QUADS server hostname
    #[arg(short = 's', long, env = "QUADS_SERVER")]
    pub quads_server: Option<String>,

    /// Username for QUADS API
    #[arg(short, long, env = "QUADS_USERNAME")]
    pub username: Option<String>,

    /// Password for QUADS API
    #[arg(short, long, env = "QUADS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Cloud name
    #[arg(short, long, env = "QUADS_CLOUD")]
    pub cloud: Option<String>,

    /// Cloud owner (defaults to the username before '@')
    #[arg(short, long, env = "QUADS_OWNER")]
    pub owner: Option<String>,

    /// Suppress progress output
    #[arg(long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new account
    Register,

    /// Create a new self-scheduled cloud
    CreateCloud(commands::CreateCloudArgs),

    /// List available hosts
    AvailableHosts,

    /// Add one or more hosts to a cloud
    AddHosts(commands::AddHostsArgs),

    /// Wait for a cloud to complete validating
    WaitForCloud(commands::WaitForCloudArgs),

    /// Terminate a cloud
    TerminateCloud(commands::TerminateCloudArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// Without a subcommand, help is printed and the exit code is 1. A missing
    /// server address is reported as a usage error before anything is sent.
    /// Every dispatched command ends with the elapsed wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns an error if the help text cannot be written or the HTTP client
    /// cannot be built. Command failures are reported here and mapped to
    /// exit code 1.
    pub fn run(self) -> Result<ExitCode> {
        let started = Instant::now();
        let Cli {
            quads_server,
            username,
            password,
            cloud,
            owner,
            quiet,
            no_color,
            command,
        } = self;

        let Some(command) = command else {
            Self::command().print_help()?;
            return Ok(ExitCode::FAILURE);
        };

        let settings =
            match Settings::resolve(quads_server.as_deref(), username, password, cloud, owner) {
                Ok(settings) => settings,
                Err(e) => {
                    Self::command()
                        .error(ErrorKind::MissingRequiredArgument, e)
                        .print()?;
                    return Ok(ExitCode::FAILURE);
                }
            };
        tracing::debug!(server = %settings.server, ?command, "dispatching");

        let app = AppContext::new(&OutputFlags { no_color, quiet }, settings);
        let api = HttpQuadsClient::new(&app.settings.server)?;

        let result = dispatch(&app, &api, &command);
        if let Err(e) = &result {
            app.output.error(&format!("{e:#}"));
        }

        app.output.kv(
            "Total time",
            &format!("{} seconds", started.elapsed().as_secs_f64().round()),
        );

        Ok(if result.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

fn dispatch(app: &AppContext, api: &HttpQuadsClient, command: &Command) -> Result<()> {
    match command {
        Command::Register => commands::register::run(app, api),
        Command::CreateCloud(args) => commands::create_cloud::run(app, api, args).map(drop),
        Command::AvailableHosts => commands::available_hosts::run(app, api).map(drop),
        Command::AddHosts(args) => commands::add_hosts::run(app, api, args).map(drop),
        Command::WaitForCloud(args) => {
            commands::wait_for_cloud::run(app, api, &SystemClock, args).map(drop)
        }
        Command::TerminateCloud(args) => commands::terminate_cloud::run(app, api, args),
    }
}
