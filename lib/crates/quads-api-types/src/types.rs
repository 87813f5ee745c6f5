use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Body returned by `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub auth_token: String,
}

/// Body of `POST /assignments/self`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelfAssignmentRequest {
    pub description: String,
    pub owner: String,
    /// QinQ VLAN mode, `0` or `1`.
    pub qinq: u8,
    pub wipe: bool,
}

/// Body returned by `POST /assignments/self` on `201 Created`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelfAssignmentResponse {
    pub cloud: CloudRef,
    pub notification: NotificationRef,
}

/// The cloud a new self-assignment was placed on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloudRef {
    pub name: String,
}

/// Notification record attached to a new self-assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationRef {
    pub assignment_id: AssignmentId,
}

/// Body of `POST /schedules`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub cloud: String,
    pub hostname: String,
}

/// Body returned by `GET /assignments/{id}`.
///
/// Only `validated` is read by the client; the server's representation of it
/// is not always a JSON boolean, so it is kept raw.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssignmentStatus {
    #[serde(default, deserialize_with = "present")]
    pub validated: Option<serde_json::Value>,
}

/// Keeps an explicit `null` distinct from a missing field.
fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Server-issued identifier of a cloud reservation.
///
/// The server emits it as either a JSON number or a string; both are accepted
/// and carried as text since the client only ever embeds it in a path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AssignmentId(String);

impl AssignmentId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssignmentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}
