//! Application service: list self-schedulable hosts and add hosts to a cloud.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::Result;
use quads_api_types::ScheduleRequest;

use crate::application::ports::{ProgressReporter, QuadsApi};
use crate::domain::Session;
use crate::domain::cloud::format_host;

/// Print every host available for self-scheduling and return how many there were.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a JSON array.
pub fn list_available(api: &impl QuadsApi, reporter: &impl ProgressReporter) -> Result<usize> {
    reporter.step("Getting available hosts:");
    let hosts = api.available_hosts()?;
    for host in &hosts {
        reporter.item(&format_host(host));
    }
    reporter.detail("Total available hosts", &hosts.len().to_string());
    Ok(hosts.len())
}

/// Add each hostname to `cloud`, in order.
///
/// The first rejection aborts the batch: hosts already added stay added and
/// the remaining hostnames are never attempted.
///
/// # Errors
///
/// Returns the first failing request's error.
pub fn add_hosts(
    api: &impl QuadsApi,
    session: &Session,
    cloud: &str,
    hostnames: &[String],
    reporter: &impl ProgressReporter,
) -> Result<usize> {
    for (added, hostname) in hostnames.iter().enumerate() {
        reporter.step(&format!("Adding host: {hostname} to cloud: {cloud}"));
        let request = ScheduleRequest {
            cloud: cloud.to_string(),
            hostname: hostname.clone(),
        };
        if let Err(e) = api.schedule_host(session, &request) {
            tracing::warn!(
                cloud,
                hostname = %hostname,
                added,
                remaining = hostnames.len() - added - 1,
                "aborting host batch"
            );
            return Err(e.into());
        }
        reporter.success("Host added to cloud successfully");
    }
    Ok(hostnames.len())
}
