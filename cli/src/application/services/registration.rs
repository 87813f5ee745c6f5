//! Application service: account registration use-case.

use anyhow::Result;
use quads_api_types::RegisterRequest;

use crate::application::ports::{ProgressReporter, QuadsApi};
use crate::domain::Credentials;

/// Register a new account with the given credentials.
///
/// # Errors
///
/// Returns an error if the server does not answer `200`.
pub fn register(
    api: &impl QuadsApi,
    credentials: &Credentials,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    reporter.step("Registering a new account");
    api.register(&RegisterRequest {
        username: credentials.username.clone(),
        password: credentials.password.clone(),
    })?;
    reporter.success("Registered successfully");
    Ok(())
}
