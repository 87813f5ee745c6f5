//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, or `std::net`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while resolving settings, before any request is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--quads-server is required (or set QUADS_SERVER env var)")]
    MissingServer,

    #[error("Invalid QUADS server address '{0}'")]
    InvalidServer(String),

    #[error(
        "--username and --password are required to {action} (or set QUADS_USERNAME / QUADS_PASSWORD)"
    )]
    MissingCredentials { action: &'static str },

    #[error("--cloud is required to {action} (or set QUADS_CLOUD env var)")]
    MissingCloud { action: &'static str },

    #[error("--{flag} must be a positive number of seconds")]
    InvalidDuration { flag: &'static str },
}

// ── API errors ────────────────────────────────────────────────────────────────

/// Errors returned by the scheduling server or the transport underneath it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status other than the one the call expects.
    #[error("Failed to {action}: {body}")]
    Rejected {
        action: &'static str,
        status: u16,
        body: String,
    },

    #[error("Failed to {action}: {reason}")]
    Transport {
        action: &'static str,
        reason: String,
    },

    #[error("Failed to {action}: unexpected response ({reason})")]
    MalformedResponse {
        action: &'static str,
        reason: String,
    },
}

impl ApiError {
    /// HTTP status the server answered with, if it answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport { .. } | Self::MalformedResponse { .. } => None,
        }
    }
}
