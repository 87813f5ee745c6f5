//! Application context: unified state passed to every command handler.
//!
//! Built once in `Cli::run()` after settings are resolved, then borrowed by
//! every handler. The scheduling-server client and clock are passed next to
//! it so handlers can run against test doubles.

use anyhow::Result;

use crate::application::ports::QuadsApi;
use crate::application::services::session;
use crate::domain::{Session, Settings};
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Invocation-wide settings, resolved once from flags and environment.
    pub settings: Settings,
}

impl AppContext {
    /// Construct an `AppContext` from output flags and resolved settings.
    #[must_use]
    pub fn new(flags: &OutputFlags, settings: Settings) -> Self {
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            settings,
        }
    }

    /// Progress reporter writing to this context's terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Log in with the configured credentials.
    ///
    /// `action` names the command in the error raised when credentials are
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or the server rejects them.
    pub fn login(&self, api: &impl QuadsApi, action: &'static str) -> Result<Session> {
        let credentials = self.settings.credentials(action)?;
        session::login(api, &credentials, &self.reporter())
    }
}
