//! Resolved settings for a single invocation.
//!
//! Pure functions only. No I/O or environment access. Flag/env layering is
//! done by clap; this module turns the parsed values into an immutable
//! [`Settings`] that handlers borrow.

use std::fmt;
use std::time::Duration;

use crate::domain::error::ConfigError;

/// Default wait-for-cloud timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 900;

/// Default wait-for-cloud poll interval, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Base URL of the scheduling server, without the API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrl(String);

impl ServerUrl {
    /// Parse a server address given as a bare host (`quads.example.com`,
    /// `host:8443`) or as a base URL with an `http://`/`https://` scheme.
    ///
    /// Bare hosts are reached over HTTPS.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingServer`] for blank input and
    /// [`ConfigError::InvalidServer`] when the address contains whitespace or
    /// has no host part.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingServer);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidServer(raw.to_string()));
        }

        let base = if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };
        let base = base.trim_end_matches('/');

        let host = base
            .split_once("://")
            .map_or("", |(_, rest)| rest);
        if host.is_empty() {
            return Err(ConfigError::InvalidServer(raw.to_string()));
        }

        Ok(Self(base.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Username/password pair used for login and registration.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Invocation-wide settings, resolved once at startup.
#[derive(Clone)]
pub struct Settings {
    pub server: ServerUrl,
    pub username: Option<String>,
    pub password: Option<String>,
    pub cloud: Option<String>,
    pub owner: Option<String>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("cloud", &self.cloud)
            .field("owner", &self.owner)
            .finish()
    }
}

impl Settings {
    /// Resolve settings from parsed flag/env values.
    ///
    /// The owner falls back to the local part of the username when not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the server address is missing or malformed.
    pub fn resolve(
        server: Option<&str>,
        username: Option<String>,
        password: Option<String>,
        cloud: Option<String>,
        owner: Option<String>,
    ) -> Result<Self, ConfigError> {
        let server = ServerUrl::parse(server.unwrap_or_default())?;
        let owner = non_blank(owner).or_else(|| username.as_deref().map(owner_from_username));

        Ok(Self {
            server,
            username: non_blank(username),
            password,
            cloud: non_blank(cloud),
            owner,
        })
    }

    /// Credentials for commands that log in or register.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if either half is absent.
    pub fn credentials(&self, action: &'static str) -> Result<Credentials, ConfigError> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Ok(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => Err(ConfigError::MissingCredentials { action }),
        }
    }

    /// Cloud name for commands that act on a specific cloud.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCloud`] if no cloud was given.
    pub fn require_cloud(&self, action: &'static str) -> Result<&str, ConfigError> {
        self.cloud
            .as_deref()
            .ok_or(ConfigError::MissingCloud { action })
    }

    /// Cloud name for display, `None` rendered the way the server logs it.
    #[must_use]
    pub fn cloud_label(&self) -> &str {
        self.cloud.as_deref().unwrap_or("None")
    }
}

/// Derive a cloud owner from a username: the text before the first `@`.
#[must_use]
pub fn owner_from_username(username: &str) -> String {
    username
        .split_once('@')
        .map_or(username, |(local, _)| local)
        .to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Deadline and cadence of the wait-for-cloud poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl WaitPolicy {
    /// Build a policy from whole seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDuration`] if either value is zero.
    pub fn from_secs(timeout: u64, poll_interval: u64) -> Result<Self, ConfigError> {
        if timeout == 0 {
            return Err(ConfigError::InvalidDuration { flag: "timeout" });
        }
        if poll_interval == 0 {
            return Err(ConfigError::InvalidDuration {
                flag: "poll-interval",
            });
        }
        Ok(Self {
            timeout: Duration::from_secs(timeout),
            poll_interval: Duration::from_secs(poll_interval),
        })
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}
