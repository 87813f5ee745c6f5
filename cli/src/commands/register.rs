//! `auto-quads register`: register a new account.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::QuadsApi;
use crate::application::services::registration;

/// Run `auto-quads register`.
///
/// # Errors
///
/// Returns an error if credentials are missing or the server rejects them.
pub fn run(app: &AppContext, api: &impl QuadsApi) -> Result<()> {
    let credentials = app.settings.credentials("register")?;
    registration::register(api, &credentials, &app.reporter())
}
