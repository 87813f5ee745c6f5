//! Infrastructure implementation of the `QuadsApi` port over HTTPS.
//!
//! One blocking `ureq` agent per invocation. Certificate and hostname
//! validation are disabled: QUADS servers run on internal hosts with
//! self-signed certificates.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use quads_api_types::endpoints;
use quads_api_types::{
    AssignmentId, AssignmentStatus, LoginResponse, RegisterRequest, ScheduleRequest,
    SelfAssignmentRequest, SelfAssignmentResponse,
};
use serde::de::DeserializeOwned;

use crate::application::ports::QuadsApi;
use crate::domain::{ApiError, Credentials, ServerUrl, Session};

/// Status code and body of one exchange, whatever the status.
#[derive(Debug)]
struct Reply {
    status: u16,
    body: String,
}

/// Production `QuadsApi` backed by a blocking `ureq` agent.
pub struct HttpQuadsClient {
    agent: ureq::Agent,
    api_root: String,
}

impl HttpQuadsClient {
    /// Build a client for the given server.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS connector cannot be initialised.
    pub fn new(server: &ServerUrl) -> Result<Self> {
        let tls = native_tls::TlsConnector::builder()
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true)
            .build()
            .context("failed to initialise TLS connector")?;
        let agent = ureq::AgentBuilder::new()
            .tls_connector(Arc::new(tls))
            .user_agent(concat!("auto-quads/", env!("CARGO_PKG_VERSION")))
            .build();

        Ok(Self {
            agent,
            api_root: api_root(server),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }

    /// Send one request and capture status and body, including non-2xx replies.
    fn send(
        &self,
        action: &'static str,
        method: &str,
        path: &str,
        authorization: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<Reply, ApiError> {
        let mut request = self
            .agent
            .request(method, &self.url(path))
            .set("Content-Type", "application/json");
        if let Some(auth) = authorization {
            request = request.set("Authorization", auth);
        }

        let started = Instant::now();
        let result = match body {
            Some(json) => request.send_json(json),
            None => request.call(),
        };
        let response = match result {
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(e) => {
                return Err(ApiError::Transport {
                    action,
                    reason: e.to_string(),
                });
            }
        };

        let status = response.status();
        tracing::debug!(
            method,
            path,
            status,
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "quads request"
        );
        let body = response.into_string().map_err(|e| ApiError::Transport {
            action,
            reason: format!("failed to read response body: {e}"),
        })?;

        Ok(Reply { status, body })
    }

    fn get(&self, action: &'static str, path: &str) -> Result<Reply, ApiError> {
        self.send(action, "GET", path, None, None)
    }

    fn post(
        &self,
        action: &'static str,
        path: &str,
        authorization: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<Reply, ApiError> {
        self.send(action, "POST", path, authorization, body)
    }
}

impl QuadsApi for HttpQuadsClient {
    fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        const ACTION: &str = "register";
        let reply = self.post(ACTION, endpoints::REGISTER, None, Some(to_json(ACTION, request)?))?;
        expect_status(ACTION, reply, 200).map(drop)
    }

    fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        const ACTION: &str = "login";
        let header = basic_auth_header(credentials);
        let reply = self.post(ACTION, endpoints::LOGIN, Some(&header), None)?;
        parse_json(ACTION, &expect_status(ACTION, reply, 200)?)
    }

    fn create_self_assignment(
        &self,
        session: &Session,
        request: &SelfAssignmentRequest,
    ) -> Result<SelfAssignmentResponse, ApiError> {
        const ACTION: &str = "create cloud";
        let reply = self.post(
            ACTION,
            endpoints::SELF_ASSIGNMENT,
            Some(&session.bearer()),
            Some(to_json(ACTION, request)?),
        )?;
        parse_json(ACTION, &expect_status(ACTION, reply, 201)?)
    }

    fn available_hosts(&self) -> Result<Vec<serde_json::Value>, ApiError> {
        const ACTION: &str = "list available hosts";
        let reply = self.get(ACTION, endpoints::AVAILABLE_SELF_SCHEDULE)?;
        parse_json(ACTION, &expect_success(ACTION, reply)?)
    }

    fn schedule_host(&self, session: &Session, request: &ScheduleRequest) -> Result<(), ApiError> {
        const ACTION: &str = "add host to cloud";
        let reply = self.post(
            ACTION,
            endpoints::SCHEDULES,
            Some(&session.bearer()),
            Some(to_json(ACTION, request)?),
        )?;
        expect_status(ACTION, reply, 200).map(drop)
    }

    fn assignment_status(
        &self,
        assignment_id: &AssignmentId,
    ) -> Result<AssignmentStatus, ApiError> {
        const ACTION: &str = "query cloud status";
        let reply = self.get(ACTION, &endpoints::assignment(assignment_id.as_str()))?;
        parse_json(ACTION, &expect_success(ACTION, reply)?)
    }

    fn terminate_assignment(
        &self,
        session: &Session,
        assignment_id: &AssignmentId,
    ) -> Result<(), ApiError> {
        const ACTION: &str = "terminate cloud";
        let reply = self.post(
            ACTION,
            &endpoints::terminate(assignment_id.as_str()),
            Some(&session.bearer()),
            None,
        )?;
        expect_status(ACTION, reply, 200).map(drop)
    }
}

/// `<base>/api/v3`.
fn api_root(server: &ServerUrl) -> String {
    format!("{}{}", server.as_str(), endpoints::API_ROOT)
}

/// `Basic base64(user:pass)`.
fn basic_auth_header(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", STANDARD.encode(raw))
}

fn expect_status(action: &'static str, reply: Reply, expected: u16) -> Result<Reply, ApiError> {
    if reply.status == expected {
        Ok(reply)
    } else {
        Err(rejected(action, reply))
    }
}

fn expect_success(action: &'static str, reply: Reply) -> Result<Reply, ApiError> {
    if (200..300).contains(&reply.status) {
        Ok(reply)
    } else {
        Err(rejected(action, reply))
    }
}

fn rejected(action: &'static str, reply: Reply) -> ApiError {
    ApiError::Rejected {
        action,
        status: reply.status,
        body: reply.body,
    }
}

fn parse_json<T: DeserializeOwned>(action: &'static str, reply: &Reply) -> Result<T, ApiError> {
    serde_json::from_str(&reply.body).map_err(|e| ApiError::MalformedResponse {
        action,
        reason: e.to_string(),
    })
}

fn to_json(action: &'static str, body: &impl serde::Serialize) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::MalformedResponse {
        action,
        reason: format!("cannot encode request: {e}"),
    })
}
