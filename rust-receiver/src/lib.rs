//! Slackhook - Slack slash-command receiver.
//!
//! This library provides the modules behind the `slackhook-web` binary:
//! - `config`: environment configuration, including the required signing secret
//! - `web`: request-signature verification, handlers and response payloads
//! - `server`: router construction and bounded graceful shutdown
//!
//! ## Request flow
//!
//! ```text
//! Slack → POST / → verify v0 signature → 200 / 400 / 500 Block Kit response
//! ```

pub mod config;
pub mod server;
pub mod web;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use web::{verify_slack_signature, AppState, SignatureVerifier, SlackResponse, Verification};
