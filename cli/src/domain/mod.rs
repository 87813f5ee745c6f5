//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::net`, or `std::thread`.
//! All functions are synchronous and take data in, returning data out.

pub mod cloud;
pub mod config;
pub mod error;
pub mod session;

pub use cloud::{ValidationState, validation_state};
pub use config::{Credentials, ServerUrl, Settings, WaitPolicy};
pub use error::{ApiError, ConfigError};
pub use session::Session;
