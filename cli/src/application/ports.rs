//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and the wire types, never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use quads_api_types::{
    AssignmentId, AssignmentStatus, LoginResponse, RegisterRequest, ScheduleRequest,
    SelfAssignmentRequest, SelfAssignmentResponse,
};

use crate::domain::{ApiError, Credentials, Session};

// ── Scheduling server port ────────────────────────────────────────────────────

/// One method per QUADS v3 endpoint the client consumes.
///
/// Every call is a single blocking round trip. Implementations return
/// [`ApiError::Rejected`] when the server answers with anything but the
/// endpoint's success status; nothing is retried.
pub trait QuadsApi {
    /// `POST /register`, expects `200`.
    fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;

    /// `POST /login` with a basic credential header, expects `200`.
    fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /assignments/self`, expects `201`.
    fn create_self_assignment(
        &self,
        session: &Session,
        request: &SelfAssignmentRequest,
    ) -> Result<SelfAssignmentResponse, ApiError>;

    /// `GET /available?can_self_schedule=true`.
    fn available_hosts(&self) -> Result<Vec<serde_json::Value>, ApiError>;

    /// `POST /schedules`, expects `200`.
    fn schedule_host(&self, session: &Session, request: &ScheduleRequest) -> Result<(), ApiError>;

    /// `GET /assignments/{id}`.
    fn assignment_status(&self, assignment_id: &AssignmentId)
    -> Result<AssignmentStatus, ApiError>;

    /// `POST /assignments/terminate/{id}`, expects `200`.
    fn terminate_assignment(
        &self,
        session: &Session,
        assignment_id: &AssignmentId,
    ) -> Result<(), ApiError>;
}

// ── Clock port ────────────────────────────────────────────────────────────────

/// Wall-clock time and blocking sleep, so the poll loop can run on virtual time.
pub trait Clock {
    /// Current UTC time.
    fn now(&self) -> DateTime<Utc>;
    /// Block the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts user-facing progress lines so services can emit them without
/// depending on the Presentation layer.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a `key: value` detail line.
    fn detail(&self, key: &str, value: &str);
    /// Emit one bare list item.
    fn item(&self, text: &str);
}
