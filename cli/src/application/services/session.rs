//! Application service: login use-case.

use anyhow::Result;

use crate::application::ports::{ProgressReporter, QuadsApi};
use crate::domain::{Credentials, Session};

/// Exchange credentials for a bearer token.
///
/// # Errors
///
/// Returns an error if the server does not answer `200` or the body has no
/// `auth_token`.
pub fn login(
    api: &impl QuadsApi,
    credentials: &Credentials,
    reporter: &impl ProgressReporter,
) -> Result<Session> {
    let response = api.login(credentials)?;
    tracing::debug!(username = %credentials.username, "login accepted");
    reporter.success("Logged in successfully");
    Ok(Session::new(response.auth_token))
}
