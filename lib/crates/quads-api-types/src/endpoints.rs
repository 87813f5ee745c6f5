//! Endpoint paths, relative to the API root (`<base>/api/v3`).

/// Versioned API root appended to the server base URL.
pub const API_ROOT: &str = "/api/v3";

pub const REGISTER: &str = "/register";
pub const LOGIN: &str = "/login";
pub const SELF_ASSIGNMENT: &str = "/assignments/self";
pub const AVAILABLE_SELF_SCHEDULE: &str = "/available?can_self_schedule=true";
pub const SCHEDULES: &str = "/schedules";

/// Status of a single assignment: `/assignments/{id}`.
#[must_use]
pub fn assignment(assignment_id: &str) -> String {
    format!("/assignments/{assignment_id}")
}

/// Termination of a single assignment: `/assignments/terminate/{id}`.
#[must_use]
pub fn terminate(assignment_id: &str) -> String {
    format!("/assignments/terminate/{assignment_id}")
}
