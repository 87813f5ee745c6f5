//! Application service: create and terminate self-scheduled clouds.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::Result;
use quads_api_types::{AssignmentId, SelfAssignmentRequest};

use crate::application::ports::{ProgressReporter, QuadsApi};
use crate::domain::Session;

/// A cloud freshly created by the server.
///
/// The assignment ID is the handle `wait-for-cloud` and `terminate-cloud`
/// take; it is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedCloud {
    pub name: String,
    pub assignment_id: AssignmentId,
}

/// Request a new self-scheduled cloud.
///
/// # Errors
///
/// Returns an error if the server does not answer `201 Created` or omits the
/// cloud name / assignment ID.
pub fn create_cloud(
    api: &impl QuadsApi,
    session: &Session,
    request: &SelfAssignmentRequest,
    reporter: &impl ProgressReporter,
) -> Result<CreatedCloud> {
    reporter.step("Creating a new self-scheduled cloud");
    reporter.detail("Description", &request.description);
    reporter.detail("Owner", &request.owner);
    reporter.detail("QinQ VLAN ID", &request.qinq.to_string());
    reporter.detail("Wipe the cloud", &request.wipe.to_string());

    let response = api.create_self_assignment(session, request)?;
    let created = CreatedCloud {
        name: response.cloud.name,
        assignment_id: response.notification.assignment_id,
    };

    tracing::info!(cloud = %created.name, assignment_id = %created.assignment_id, "cloud created");
    reporter.success("Cloud created successfully");
    reporter.detail("Cloud name", &created.name);
    reporter.detail("Cloud Assignment ID", created.assignment_id.as_str());
    Ok(created)
}

/// Terminate the cloud behind `assignment_id`.
///
/// The status code the server answered with is reported whether or not the
/// termination succeeded.
///
/// # Errors
///
/// Returns an error if the server does not answer `200`.
pub fn terminate_cloud(
    api: &impl QuadsApi,
    session: &Session,
    cloud_label: &str,
    assignment_id: &AssignmentId,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    reporter.step("Terminating a cloud");
    reporter.detail("Cloud name", cloud_label);

    let result = api.terminate_assignment(session, assignment_id);
    let status = match &result {
        Ok(()) => Some(200),
        Err(e) => e.status(),
    };
    if let Some(status) = status {
        reporter.detail("Status code", &status.to_string());
    }
    result?;

    reporter.success("Cloud terminated successfully");
    Ok(())
}
