//! `auto-quads available-hosts`: list hosts open for self-scheduling.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::QuadsApi;
use crate::application::services::hosts;

/// Run `auto-quads available-hosts`. No login is needed.
///
/// # Errors
///
/// Returns an error if the listing cannot be fetched or parsed.
pub fn run(app: &AppContext, api: &impl QuadsApi) -> Result<usize> {
    hosts::list_available(api, &app.reporter())
}
